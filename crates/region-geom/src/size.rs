// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::cmp::Ordering;
use core::fmt;

use region_num::Scalar;

use crate::area::Area;
use crate::error::{Dimension, GeomError};
use crate::span::Span;
use crate::volume::Volume;

fn at_least<S: Scalar>(value: &S, other: &S) -> bool {
    value.compare(other) != Ordering::Less
}

fn non_negative<S: Scalar>(value: S, dimension: Dimension) -> Result<S, GeomError> {
    if value.is_negative() {
        return Err(GeomError::negative(dimension, &value));
    }
    Ok(value)
}

/// Position-less width and height, both non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size<S> {
    width: S,
    height: S,
}

impl<S: Scalar> Size<S> {
    /// Validates and builds a size; the error names `Width` or `Height`.
    pub fn of(width: S, height: S) -> Result<Self, GeomError> {
        Ok(Self {
            width: non_negative(width, Dimension::Width)?,
            height: non_negative(height, Dimension::Height)?,
        })
    }

    /// Horizontal extent.
    pub fn width(&self) -> &S {
        &self.width
    }

    /// Vertical extent.
    pub fn height(&self) -> &S {
        &self.height
    }

    /// A box of size `other` would fit inside a box of this size.
    ///
    /// Reflexive and transitive, not symmetric.
    pub fn includes(&self, other: &Self) -> bool {
        at_least(&self.width, &other.width) && at_least(&self.height, &other.height)
    }

    /// The area of this size anchored at the origin.
    pub fn area<Space>(&self) -> Area<S, Space> {
        Area::from_spans(
            Span::from_origin(self.width.clone()),
            Span::from_origin(self.height.clone()),
        )
    }
}

impl<S: Scalar> fmt::Display for Size<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width.canonical(), self.height.canonical())
    }
}

/// Position-less width, height and depth, all non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size3<S> {
    width: S,
    height: S,
    depth: S,
}

impl<S: Scalar> Size3<S> {
    /// Validates and builds a size; the error names `Width`, `Height` or `Depth`.
    pub fn of(width: S, height: S, depth: S) -> Result<Self, GeomError> {
        Ok(Self {
            width: non_negative(width, Dimension::Width)?,
            height: non_negative(height, Dimension::Height)?,
            depth: non_negative(depth, Dimension::Depth)?,
        })
    }

    /// Extent along x.
    pub fn width(&self) -> &S {
        &self.width
    }

    /// Extent along y.
    pub fn height(&self) -> &S {
        &self.height
    }

    /// Extent along z.
    pub fn depth(&self) -> &S {
        &self.depth
    }

    /// A box of size `other` would fit inside a box of this size.
    pub fn includes(&self, other: &Self) -> bool {
        at_least(&self.width, &other.width)
            && at_least(&self.height, &other.height)
            && at_least(&self.depth, &other.depth)
    }

    /// The volume of this size anchored at the origin.
    pub fn volume<Space>(&self) -> Volume<S, Space> {
        Volume::from_spans(
            Span::from_origin(self.width.clone()),
            Span::from_origin(self.height.clone()),
            Span::from_origin(self.depth.clone()),
        )
    }
}

impl<S: Scalar> fmt::Display for Size3<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}x{}",
            self.width.canonical(),
            self.height.canonical(),
            self.depth.canonical()
        )
    }
}
