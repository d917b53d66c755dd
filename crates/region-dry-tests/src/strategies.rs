// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Proptest strategies for region values.
//!
//! Coordinates stay within [`COORDINATE_LIMIT`] and extents within
//! [`EXTENT_LIMIT`]. Any sum or difference of a handful of such values fits
//! in `i32`, so properties built on these strategies exercise the algebra
//! rather than the overflow path.

use proptest::prelude::*;
use region_geom::{Area, Size, Volume};
use region_num::{BigDecimal, BigInt};

/// Largest absolute coordinate produced by the integer strategies.
pub const COORDINATE_LIMIT: i32 = 1_000_000;

/// Largest extent produced by the integer strategies.
pub const EXTENT_LIMIT: i32 = 10_000;

/// Coordinate in `[-COORDINATE_LIMIT, COORDINATE_LIMIT]`.
pub fn coordinate_i32() -> impl Strategy<Value = i32> {
    -COORDINATE_LIMIT..=COORDINATE_LIMIT
}

/// Extent in `[0, EXTENT_LIMIT]`.
pub fn extent_i32() -> impl Strategy<Value = i32> {
    0..=EXTENT_LIMIT
}

/// Offset for alignment, hollowing and splitting. Occasionally exceeds any
/// generated extent so clamping paths are hit.
pub fn offset_i32() -> impl Strategy<Value = i32> {
    prop_oneof![
        4 => 0..=EXTENT_LIMIT,
        1 => EXTENT_LIMIT..=2 * EXTENT_LIMIT,
    ]
}

/// Untagged `i32` area.
pub fn area_i32() -> impl Strategy<Value = Area<i32>> {
    (coordinate_i32(), coordinate_i32(), extent_i32(), extent_i32())
        .prop_filter_map("bounds fit in i32", |(x, y, w, h)| Area::<i32>::create(x, y, w, h).ok())
}

/// Untagged `i64` area with coordinates well beyond the `i32` range.
pub fn area_i64() -> impl Strategy<Value = Area<i64>> {
    let coordinate = -1_000_000_000_000_i64..=1_000_000_000_000;
    let extent = 0_i64..=1_000_000_000;
    (coordinate.clone(), coordinate, extent.clone(), extent)
        .prop_filter_map("bounds fit in i64", |(x, y, w, h)| Area::<i64>::create(x, y, w, h).ok())
}

/// Untagged `f64` area with finite bounds.
pub fn area_f64() -> impl Strategy<Value = Area<f64>> {
    let coordinate = -1.0e6..1.0e6_f64;
    let extent = 0.0..1.0e4_f64;
    (coordinate.clone(), coordinate, extent.clone(), extent)
        .prop_filter_map("finite bounds", |(x, y, w, h)| Area::<f64>::create(x, y, w, h).ok())
}

/// Untagged `BigInt` area whose bounds straddle the `i64` range.
pub fn area_big_int() -> impl Strategy<Value = Area<BigInt>> {
    (any::<i64>(), any::<i64>(), any::<u32>(), any::<u32>()).prop_filter_map(
        "non-negative extents",
        |(x, y, w, h)| {
            let scale = BigInt::from(i64::MAX);
            Area::<BigInt>::create(
                BigInt::from(x) * &scale,
                BigInt::from(y),
                BigInt::from(w) * &scale,
                BigInt::from(h),
            )
            .ok()
        },
    )
}

/// Untagged `BigDecimal` area with two fractional digits.
pub fn area_big_decimal() -> impl Strategy<Value = Area<BigDecimal>> {
    let coordinate = -100_000_000_i64..=100_000_000;
    let extent = 0_i64..=1_000_000;
    (coordinate.clone(), coordinate, extent.clone(), extent).prop_filter_map(
        "non-negative extents",
        |(x, y, w, h)| {
            let cents = |v: i64| BigDecimal::new(BigInt::from(v), 2);
            Area::<BigDecimal>::create(cents(x), cents(y), cents(w), cents(h)).ok()
        },
    )
}

/// Untagged `i32` volume.
pub fn volume_i32() -> impl Strategy<Value = Volume<i32>> {
    (
        (coordinate_i32(), coordinate_i32(), coordinate_i32()),
        (extent_i32(), extent_i32(), extent_i32()),
    )
        .prop_filter_map("bounds fit in i32", |((x, y, z), (w, h, d))| {
            Volume::<i32>::create(x, y, z, w, h, d).ok()
        })
}

/// `i32` size.
pub fn size_i32() -> impl Strategy<Value = Size<i32>> {
    (extent_i32(), extent_i32()).prop_filter_map("non-negative", |(w, h)| Size::of(w, h).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::pinned_runner;

    #[test]
    fn integer_areas_stay_within_limits() {
        let mut runner = pinned_runner();
        runner
            .run(&area_i32(), |area| {
                prop_assert!(area.width() <= EXTENT_LIMIT);
                prop_assert!(area.minimum_x().abs() <= COORDINATE_LIMIT);
                Ok(())
            })
            .unwrap();
    }
}
