// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;

use region_dry_tests::{offset_i32, volume_i32};
use region_geom::Edge;

proptest! {
    #[test]
    fn contains_is_reflexive(v in volume_i32()) {
        prop_assert!(v.contains(&v));
    }

    #[test]
    fn overlaps_is_symmetric(a in volume_i32(), b in volume_i32()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        prop_assert_eq!(a.intersection(&b).is_some(), a.overlaps(&b));
    }

    #[test]
    fn hollow_out_evenly_matches_six_equal_offsets(v in volume_i32(), k in offset_i32()) {
        prop_assert_eq!(v.hollow_out_evenly(k).unwrap(), v.hollow_out(k, k, k, k, k, k).unwrap());
        prop_assert_eq!(v.hollow_out(0, 0, 0, 0, 0, 0).unwrap(), v);
    }

    #[test]
    fn splits_partition_each_axis(v in volume_i32(), k in offset_i32()) {
        let (lower, upper) = v.split_along_plane_yz(k).unwrap();
        prop_assert_eq!(lower.width() + upper.width(), v.width());
        let (lower, upper) = v.split_along_plane_xz(k).unwrap();
        prop_assert_eq!(lower.height() + upper.height(), v.height());
        let (lower, upper) = v.split_along_plane_xy(k).unwrap();
        prop_assert_eq!(lower.depth() + upper.depth(), v.depth());
        prop_assert_eq!((lower.width(), lower.height()), (v.width(), v.height()));
    }

    #[test]
    fn size_round_trips_through_origin(v in volume_i32()) {
        let size = v.size().unwrap();
        prop_assert_eq!(size.volume(), v.move_to_origin().unwrap());
    }

    #[test]
    fn min_alignment_with_offset(outer in volume_i32(), inner in volume_i32(), k in offset_i32()) {
        let placed = outer.align_z(&inner, Edge::Min, k).unwrap();
        prop_assert_eq!(*placed.minimum_z(), outer.minimum_z() + k);
        prop_assert_eq!(placed.depth(), inner.depth());
        prop_assert_eq!(placed.x_span(), inner.x_span());
    }
}
