// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Scalar kinds for the region algebra.

This crate provides:
- The [`Scalar`] trait: zero, ordinary and exact add/subtract, min, max,
  compare and halving, written against references so primitives and
  arbitrary-precision numbers share one surface.
- Implementations for `i32`, `i64`, `f32`, `f64` and, behind the default
  `big` feature, `num_bigint::BigInt` and `bigdecimal::BigDecimal`.
- [`ArithmeticOverflow`], the only error exact arithmetic can produce.

Design notes:
- Overflow policy belongs to the scalar, not to the algorithms using it.
- Ordinary arithmetic on fixed-width kinds wraps instead of panicking; it is
  only used for derived quantities such as widths.
"]

mod error;
mod scalar;

#[cfg(feature = "big")]
mod big;

pub use error::{ArithmeticOp, ArithmeticOverflow};
pub use scalar::{Canonical, Difference, Scalar, ScalarKind};

#[cfg(feature = "big")]
pub use bigdecimal::BigDecimal;
#[cfg(feature = "big")]
pub use num_bigint::BigInt;
