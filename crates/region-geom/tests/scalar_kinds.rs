// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! The same layout scenarios, run once per scalar kind.

use region_geom::{Area, Dimension, GeomError, Handle, Scalar, Size, Volume};

fn area<S: Scalar>(n: fn(i16) -> S, min_x: i16, max_x: i16, min_y: i16, max_y: i16) -> Area<S> {
    Area::of(n(min_x), n(max_x), n(min_y), n(max_y)).unwrap()
}

fn hollow_out_scenario<S: Scalar>(n: fn(i16) -> S) {
    let outer = Area::<S>::create(n(0), n(0), n(100), n(100)).unwrap();
    let hollowed = outer.hollow_out(n(10), n(20), n(30), n(40)).unwrap();
    assert_eq!(hollowed, area(n, 10, 80, 30, 60));
    assert_eq!(*hollowed.minimum_x(), n(10));
    assert_eq!(*hollowed.maximum_y(), n(60));
}

fn split_scenario<S: Scalar>(n: fn(i16) -> S) {
    let (lower, upper) = area(n, 0, 10, 0, 10).split_along_parallel_to_x(n(5)).unwrap();
    assert_eq!(lower, area(n, 0, 10, 5, 10));
    assert_eq!(upper, area(n, 0, 10, 0, 5));
}

fn neighbours_scenario<S: Scalar>(n: fn(i16) -> S) {
    let a = area(n, 0, 10, 0, 10);
    let b = area(n, 11, 20, 0, 10);
    assert!(!a.overlaps(&b) && !b.overlaps(&a));
    assert!(!a.contains(&b) && !b.contains(&a));
    let touching = area(n, 10, 20, 0, 10);
    assert!(!a.overlaps(&touching) && !touching.overlaps(&a));
}

fn could_fit_scenario<S: Scalar>(n: fn(i16) -> S) {
    let small = area(n, 0, 3, 0, 3);
    let far = area(n, 50, 60, 50, 60);
    assert!(small.could_fit_inside(&far));
    assert!(!far.could_fit_inside(&small));
    let same_size_elsewhere = area(n, -13, -10, 40, 43);
    assert!(small.could_fit_inside(&same_size_elsewhere));
    assert!(same_size_elsewhere.could_fit_inside(&small));
}

fn negative_size_scenario<S: Scalar>(n: fn(i16) -> S) {
    let err = Size::of(n(-1), n(0)).unwrap_err();
    assert!(err.to_string().contains("Width"));
    assert!(matches!(
        err,
        GeomError::InvariantViolation { dimension: Dimension::Width, .. }
    ));
}

fn inverted_area_scenario<S: Scalar>(n: fn(i16) -> S) {
    let err = Area::<S>::of(n(0), n(1), n(5), n(3)).unwrap_err();
    assert_eq!(err.to_string(), "invariant violated on Y: minimum 5 exceeds maximum 3");
}

fn resize_scenario<S: Scalar>(n: fn(i16) -> S) {
    let a = area(n, 10, 20, 10, 20);
    let dragged = a.set_size_from(Handle::MinYMinX, n(15), n(5)).unwrap();
    assert_eq!(dragged, area(n, 5, 20, 15, 20));
    let scaled = a.scale_from(Handle::MaxYMaxX, n(-4), n(2)).unwrap();
    assert_eq!(scaled, area(n, 10, 16, 10, 22));
}

fn volume_scenario<S: Scalar>(n: fn(i16) -> S) {
    let v = Volume::<S>::create(n(0), n(0), n(0), n(100), n(100), n(100)).unwrap();
    let inner = v
        .hollow_out(n(10), n(20), n(30), n(40), n(1), n(2))
        .unwrap();
    assert_eq!(
        inner,
        Volume::of(n(10), n(80), n(30), n(60), n(1), n(98)).unwrap()
    );
    assert!(v.contains(&inner) && v.overlaps(&inner));
}

fn run_all<S: Scalar>(n: fn(i16) -> S) {
    hollow_out_scenario(n);
    split_scenario(n);
    neighbours_scenario(n);
    could_fit_scenario(n);
    negative_size_scenario(n);
    inverted_area_scenario(n);
    resize_scenario(n);
    volume_scenario(n);
}

#[test]
fn i32_kind() {
    run_all(i32::from);
}

#[test]
fn i64_kind() {
    run_all(i64::from);
}

#[test]
fn f32_kind() {
    run_all(f32::from);
}

#[test]
fn f64_kind() {
    run_all(f64::from);
}

#[cfg(feature = "big")]
mod big {
    use region_num::{BigDecimal, BigInt};

    #[test]
    fn bigint_kind() {
        super::run_all(BigInt::from);
    }

    #[test]
    fn bigdecimal_kind() {
        super::run_all(BigDecimal::from);
    }

    #[test]
    fn bigint_spans_beyond_fixed_width() {
        let huge = BigInt::from(i64::MAX) * BigInt::from(4);
        let a = region_geom::Area::<BigInt>::create(
            huge.clone(),
            huge.clone(),
            huge.clone(),
            1.into(),
        )
        .unwrap();
        assert_eq!(a.width(), huge);
        assert!(a.move_relative(huge.clone(), huge).is_ok());
    }

    #[test]
    fn bigdecimal_center_is_exact() {
        let a = region_geom::Area::<BigDecimal>::create(0.into(), 0.into(), 3.into(), 1.into())
            .unwrap();
        let inner = region_geom::Area::create(0.into(), 0.into(), 2.into(), 1.into()).unwrap();
        let centered = a.align_horizontally_center(&inner).unwrap();
        assert_eq!(centered.to_string(), "2x1 0.5+0");
    }
}

#[test]
fn fixed_width_overflow_names_kind_and_operation() {
    let err = Area::<i32>::create(i32::MAX - 1, 0, 2, 0).unwrap_err();
    assert_eq!(err.to_string(), "arithmetic overflow: i32 add");
    let err = Area::<i64>::of(i64::MIN, 0, 0, 0)
        .unwrap()
        .move_absolute(1, 0)
        .unwrap_err();
    assert!(err.is_overflow());
    assert_eq!(err.dimension(), None);
}

#[test]
fn floats_never_overflow() {
    let a = Area::<f64>::create(f64::MAX, 0.0, f64::MAX, 1.0).unwrap();
    assert!(a.maximum_x().is_infinite());
    assert!(a.move_relative(f64::MAX, 0.0).is_ok());
}
