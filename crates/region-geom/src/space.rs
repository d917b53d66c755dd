// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Type-level coordinate spaces.
//!
//! Regions carry a `Space` type parameter that exists only at compile time.
//! Any type works as a tag; zero-sized unit structs are the usual choice:
//!
//! ```
//! use region_geom::Area;
//!
//! struct Screen;
//! struct World;
//!
//! let on_screen: Area<i32, Screen> = Area::create(0, 0, 640, 480)?;
//! // `Area<i32, World>` is a different type; crossing over is explicit.
//! let in_world: Area<i32, World> = on_screen.cast();
//! assert_eq!(in_world.width(), 640);
//! # Ok::<(), region_geom::GeomError>(())
//! ```
//!
//! The tag is stored as `PhantomData<fn() -> Space>`, so it never affects
//! size, auto traits or variance of the region holding it.

use core::marker::PhantomData;

/// Tag used by regions that do not name a coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Untagged;

/// Zero-sized marker carried by tagged regions.
pub(crate) type Tag<Space> = PhantomData<fn() -> Space>;
