// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Axis-aligned regions over any scalar kind.

This crate provides:
- Immutable two-dimensional areas (`Area`) and three-dimensional volumes
  (`Volume`), validated on construction so `minimum <= maximum` always holds.
- Position-less sizes (`Size`, `Size3`).
- Layout algebra: containment and overlap queries, moves, alignment with
  offsets, hollowing, splitting, resizing from a handle and fitting between
  neighbours.
- A phantom coordinate-space parameter so regions from different spaces
  cannot be mixed without an explicit `cast`.

Design notes:
- Every operation returns a new value; inputs are never mutated.
- Exact arithmetic is used wherever a new bound is computed, so fixed-width
  kinds report overflow instead of wrapping into a bogus region.
- Edge conventions: `contains` is inclusive, `overlaps` and `contains_point`
  treat maxima as exclusive.
- Rustdoc is treated as part of the contract; public items are documented.
"]

mod area;
mod error;
mod size;
mod space;
mod span;
mod volume;

#[cfg(feature = "serde")]
mod codec;

pub use area::{Area, Handle};
pub use error::{Dimension, GeomError};
pub use size::{Size, Size3};
pub use space::Untagged;
pub use span::{Edge, Span};
pub use volume::Volume;

pub use region_num::{ArithmeticOverflow, Scalar, ScalarKind};
