// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Serde support for regions and sizes.
//!
//! Regions serialize as flat structs of their bounds (`minimum_x`,
//! `maximum_x`, ...). Deserialization goes back through the validating
//! factories, so an inverted payload is rejected with the same message
//! [`Area::of`] would produce. The coordinate-space tag is not encoded.

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use region_num::Scalar;

use crate::area::Area;
use crate::size::{Size, Size3};
use crate::volume::Volume;

impl<S: Scalar + Serialize, Space> Serialize for Area<S, Space> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let mut state = serializer.serialize_struct("Area", 4)?;
        state.serialize_field("minimum_x", self.minimum_x())?;
        state.serialize_field("maximum_x", self.maximum_x())?;
        state.serialize_field("minimum_y", self.minimum_y())?;
        state.serialize_field("maximum_y", self.maximum_y())?;
        state.end()
    }
}

#[derive(serde::Deserialize)]
#[serde(rename = "Area", deny_unknown_fields)]
struct RawArea<S> {
    minimum_x: S,
    maximum_x: S,
    minimum_y: S,
    maximum_y: S,
}

impl<'de, S: Scalar + Deserialize<'de>, Space> Deserialize<'de> for Area<S, Space> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawArea::<S>::deserialize(deserializer)?;
        Self::of(raw.minimum_x, raw.maximum_x, raw.minimum_y, raw.maximum_y)
            .map_err(D::Error::custom)
    }
}

impl<S: Scalar + Serialize, Space> Serialize for Volume<S, Space> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let mut state = serializer.serialize_struct("Volume", 6)?;
        state.serialize_field("minimum_x", self.minimum_x())?;
        state.serialize_field("maximum_x", self.maximum_x())?;
        state.serialize_field("minimum_y", self.minimum_y())?;
        state.serialize_field("maximum_y", self.maximum_y())?;
        state.serialize_field("minimum_z", self.minimum_z())?;
        state.serialize_field("maximum_z", self.maximum_z())?;
        state.end()
    }
}

#[derive(serde::Deserialize)]
#[serde(rename = "Volume", deny_unknown_fields)]
struct RawVolume<S> {
    minimum_x: S,
    maximum_x: S,
    minimum_y: S,
    maximum_y: S,
    minimum_z: S,
    maximum_z: S,
}

impl<'de, S: Scalar + Deserialize<'de>, Space> Deserialize<'de> for Volume<S, Space> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawVolume::<S>::deserialize(deserializer)?;
        Self::of(
            raw.minimum_x,
            raw.maximum_x,
            raw.minimum_y,
            raw.maximum_y,
            raw.minimum_z,
            raw.maximum_z,
        )
        .map_err(D::Error::custom)
    }
}

impl<S: Scalar + Serialize> Serialize for Size<S> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let mut state = serializer.serialize_struct("Size", 2)?;
        state.serialize_field("width", self.width())?;
        state.serialize_field("height", self.height())?;
        state.end()
    }
}

#[derive(serde::Deserialize)]
#[serde(rename = "Size", deny_unknown_fields)]
struct RawSize<S> {
    width: S,
    height: S,
}

impl<'de, S: Scalar + Deserialize<'de>> Deserialize<'de> for Size<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSize::<S>::deserialize(deserializer)?;
        Self::of(raw.width, raw.height).map_err(D::Error::custom)
    }
}

impl<S: Scalar + Serialize> Serialize for Size3<S> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let mut state = serializer.serialize_struct("Size3", 3)?;
        state.serialize_field("width", self.width())?;
        state.serialize_field("height", self.height())?;
        state.serialize_field("depth", self.depth())?;
        state.end()
    }
}

#[derive(serde::Deserialize)]
#[serde(rename = "Size3", deny_unknown_fields)]
struct RawSize3<S> {
    width: S,
    height: S,
    depth: S,
}

impl<'de, S: Scalar + Deserialize<'de>> Deserialize<'de> for Size3<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSize3::<S>::deserialize(deserializer)?;
        Self::of(raw.width, raw.height, raw.depth).map_err(D::Error::custom)
    }
}
