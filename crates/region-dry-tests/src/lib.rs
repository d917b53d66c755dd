// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test fixtures for region crates.
#![forbid(unsafe_code)]
//!
//! Property tests across the workspace draw regions from the same bounded
//! strategies so they never trip exact-arithmetic overflow by accident, and
//! run on a pinned seed so failures reproduce across machines and CI.
//!
//! # Modules
//!
//! - [`seed`] - Deterministic `TestRunner` construction
//! - [`strategies`] - Proptest strategies for scalars, areas and volumes

pub mod seed;
pub mod strategies;

pub use seed::{pinned_runner, pinned_runner_with_cases, SEED_BYTES};
pub use strategies::{
    area_big_decimal, area_big_int, area_f64, area_i32, area_i64, coordinate_i32, extent_i32,
    offset_i32, size_i32, volume_i32, COORDINATE_LIMIT, EXTENT_LIMIT,
};
