// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar arithmetic abstraction for region algebra.
//!
//! Region code is written once against [`Scalar`] and instantiated per
//! numeric kind. Each implementation owns its overflow policy:
//!
//! - Fixed-width integers (`i32`, `i64`): ordinary `add`/`sub` wrap, `exact_*`
//!   report [`ArithmeticOverflow`] when the true result is not representable.
//! - Floating point (`f32`, `f64`): IEEE semantics throughout; `exact_*` never
//!   fail, `NaN`/`Inf` are not special-cased.
//! - Arbitrary precision (`BigInt`, `BigDecimal`, behind the `big` feature):
//!   overflow is impossible, `exact_*` and ordinary arithmetic coincide.
//!
//! Operations take operands by reference so the same trait covers `Copy`
//! primitives and heap-backed big numbers without forcing clones on callers.

use core::cmp::Ordering;
use core::fmt;

use num_traits::{CheckedAdd, CheckedSub, WrappingAdd, WrappingSub, Zero};

use crate::error::{ArithmeticOp, ArithmeticOverflow};

/// Identifies one of the supported numeric representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScalarKind {
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// IEEE 754 single precision.
    F32,
    /// IEEE 754 double precision.
    F64,
    /// Arbitrary-precision integer.
    BigInt,
    /// Arbitrary-precision decimal.
    BigDecimal,
}

impl ScalarKind {
    /// Returns `true` for kinds whose exact arithmetic can overflow.
    pub const fn is_fixed_width(self) -> bool {
        matches!(self, Self::I32 | Self::I64)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::BigInt => "bigint",
            Self::BigDecimal => "bigdecimal",
        })
    }
}

/// Arithmetic capability set the region algebra is generic over.
///
/// `add`/`sub` are the ordinary operations used for derived quantities and
/// comparisons; they need not detect overflow. Anything that must preserve an
/// extent exactly goes through `exact_add`/`exact_sub`.
pub trait Scalar:
    Clone + fmt::Debug + fmt::Display + PartialEq + PartialOrd + Send + Sync + 'static
{
    /// Numeric kind of this implementation.
    const KIND: ScalarKind;

    /// Returns the additive identity.
    fn zero() -> Self;

    /// Ordinary addition (wrapping for fixed-width kinds).
    fn add(&self, rhs: &Self) -> Self;

    /// Ordinary subtraction (wrapping for fixed-width kinds).
    fn sub(&self, rhs: &Self) -> Self;

    /// Addition that fails instead of losing the true result.
    fn exact_add(&self, rhs: &Self) -> Result<Self, ArithmeticOverflow>;

    /// Subtraction that fails instead of losing the true result.
    fn exact_sub(&self, rhs: &Self) -> Result<Self, ArithmeticOverflow>;

    /// Halves the value; integer kinds truncate toward zero.
    fn half(&self) -> Self;

    /// Total comparison used by the algebra.
    ///
    /// Unordered floating-point pairs compare as `Equal`, so `NaN` never
    /// trips an invariant check on its own.
    fn compare(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }

    /// Returns the lesser of two values, preferring `self` on ties.
    fn min(&self, other: &Self) -> Self {
        if other.compare(self) == Ordering::Less {
            other.clone()
        } else {
            self.clone()
        }
    }

    /// Returns the greater of two values, preferring `self` on ties.
    fn max(&self, other: &Self) -> Self {
        if other.compare(self) == Ordering::Greater {
            other.clone()
        } else {
            self.clone()
        }
    }

    /// Returns `true` when the value compares below zero.
    fn is_negative(&self) -> bool {
        self.compare(&Self::zero()) == Ordering::Less
    }

    /// Writes the value so that equal values always render identically.
    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }

    /// Writes the true value of `self - rhs`, even when it is not
    /// representable in `Self`.
    fn fmt_difference(&self, rhs: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sub(rhs).fmt_canonical(f)
    }

    /// Display adapter over [`Scalar::fmt_canonical`].
    fn canonical(&self) -> Canonical<'_, Self> {
        Canonical(self)
    }

    /// Display adapter over [`Scalar::fmt_difference`].
    fn difference<'a>(&'a self, rhs: &'a Self) -> Difference<'a, Self> {
        Difference(self, rhs)
    }
}

/// Renders a scalar through [`Scalar::fmt_canonical`].
#[derive(Debug, Clone, Copy)]
pub struct Canonical<'a, S: ?Sized>(pub &'a S);

impl<S: Scalar> fmt::Display for Canonical<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_canonical(f)
    }
}

/// Renders `lhs - rhs` through [`Scalar::fmt_difference`].
#[derive(Debug, Clone, Copy)]
pub struct Difference<'a, S: ?Sized>(pub &'a S, pub &'a S);

impl<S: Scalar> fmt::Display for Difference<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_difference(self.1, f)
    }
}

macro_rules! impl_fixed_width_scalar {
    ($t:ty, $kind:expr) => {
        impl Scalar for $t {
            const KIND: ScalarKind = $kind;

            #[inline]
            fn zero() -> Self {
                <$t as Zero>::zero()
            }

            #[inline]
            fn add(&self, rhs: &Self) -> Self {
                WrappingAdd::wrapping_add(self, rhs)
            }

            #[inline]
            fn sub(&self, rhs: &Self) -> Self {
                WrappingSub::wrapping_sub(self, rhs)
            }

            #[inline]
            fn exact_add(&self, rhs: &Self) -> Result<Self, ArithmeticOverflow> {
                CheckedAdd::checked_add(self, rhs)
                    .ok_or_else(|| ArithmeticOverflow::new(Self::KIND, ArithmeticOp::Add))
            }

            #[inline]
            fn exact_sub(&self, rhs: &Self) -> Result<Self, ArithmeticOverflow> {
                CheckedSub::checked_sub(self, rhs)
                    .ok_or_else(|| ArithmeticOverflow::new(Self::KIND, ArithmeticOp::Sub))
            }

            #[inline]
            fn half(&self) -> Self {
                *self / 2
            }

            #[inline]
            fn compare(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }

            #[inline]
            fn min(&self, other: &Self) -> Self {
                Ord::min(*self, *other)
            }

            #[inline]
            fn max(&self, other: &Self) -> Self {
                Ord::max(*self, *other)
            }

            fn fmt_difference(&self, rhs: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                // Two values of either width always differ by less than i128::MAX.
                write!(f, "{}", i128::from(*self) - i128::from(*rhs))
            }
        }
    };
}

macro_rules! impl_float_scalar {
    ($t:ty, $kind:expr) => {
        impl Scalar for $t {
            const KIND: ScalarKind = $kind;

            #[inline]
            fn zero() -> Self {
                <$t as Zero>::zero()
            }

            #[inline]
            fn add(&self, rhs: &Self) -> Self {
                self + rhs
            }

            #[inline]
            fn sub(&self, rhs: &Self) -> Self {
                self - rhs
            }

            #[inline]
            fn exact_add(&self, rhs: &Self) -> Result<Self, ArithmeticOverflow> {
                Ok(self + rhs)
            }

            #[inline]
            fn exact_sub(&self, rhs: &Self) -> Result<Self, ArithmeticOverflow> {
                Ok(self - rhs)
            }

            #[inline]
            fn half(&self) -> Self {
                self / 2.0
            }

            fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                // Adding +0.0 folds -0.0 into +0.0; the two compare equal.
                fmt::Display::fmt(&(self + 0.0), f)
            }
        }
    };
}

impl_fixed_width_scalar!(i32, ScalarKind::I32);
impl_fixed_width_scalar!(i64, ScalarKind::I64);

impl_float_scalar!(f32, ScalarKind::F32);
impl_float_scalar!(f64, ScalarKind::F64);
