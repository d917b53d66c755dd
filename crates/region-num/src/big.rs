// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Arbitrary-precision scalar kinds.
//!
//! Both kinds delegate arithmetic to their backing crates. Exact and ordinary
//! arithmetic coincide because neither kind has a representable range.

use core::cmp::Ordering;
use core::fmt;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::ArithmeticOverflow;
use crate::scalar::{Scalar, ScalarKind};

impl Scalar for BigInt {
    const KIND: ScalarKind = ScalarKind::BigInt;

    fn zero() -> Self {
        <Self as Zero>::zero()
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn sub(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn exact_add(&self, rhs: &Self) -> Result<Self, ArithmeticOverflow> {
        Ok(self + rhs)
    }

    fn exact_sub(&self, rhs: &Self) -> Result<Self, ArithmeticOverflow> {
        Ok(self - rhs)
    }

    fn half(&self) -> Self {
        // `Div` on BigInt truncates toward zero, matching the primitives.
        self / BigInt::from(2_u8)
    }

    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    fn min(&self, other: &Self) -> Self {
        Ord::min(self, other).clone()
    }

    fn max(&self, other: &Self) -> Self {
        Ord::max(self, other).clone()
    }
}

impl Scalar for BigDecimal {
    const KIND: ScalarKind = ScalarKind::BigDecimal;

    fn zero() -> Self {
        <Self as Zero>::zero()
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn sub(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn exact_add(&self, rhs: &Self) -> Result<Self, ArithmeticOverflow> {
        Ok(self + rhs)
    }

    fn exact_sub(&self, rhs: &Self) -> Result<Self, ArithmeticOverflow> {
        Ok(self - rhs)
    }

    fn half(&self) -> Self {
        BigDecimal::half(self)
    }

    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    fn min(&self, other: &Self) -> Self {
        Ord::min(self, other).clone()
    }

    fn max(&self, other: &Self) -> Self {
        Ord::max(self, other).clone()
    }

    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1.5 and 1.50 are equal but carry different scales.
        fmt::Display::fmt(&self.normalized(), f)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn bigint_never_overflows() {
        let big = BigInt::from(i64::MAX);
        let sum = big.exact_add(&BigInt::from(i64::MAX)).unwrap();
        assert_eq!(sum, BigInt::from(i128::from(i64::MAX) * 2));
    }

    #[test]
    fn bigint_half_truncates_toward_zero() {
        assert_eq!(Scalar::half(&BigInt::from(7)), BigInt::from(3));
        assert_eq!(Scalar::half(&BigInt::from(-7)), BigInt::from(-3));
    }

    #[test]
    fn bigdecimal_half_is_exact() {
        assert_eq!(Scalar::half(&dec("7")), dec("3.5"));
        assert_eq!(Scalar::half(&dec("0.001")), dec("0.0005"));
    }

    #[test]
    fn bigdecimal_canonical_rendering_ignores_scale() {
        let a = dec("1.50");
        let b = dec("1.5");
        assert_eq!(a, b);
        assert_eq!(a.canonical().to_string(), b.canonical().to_string());
    }

    #[test]
    fn big_min_max() {
        let a = BigInt::from(-3);
        let b = BigInt::from(4);
        assert_eq!(Scalar::min(&a, &b), a);
        assert_eq!(Scalar::max(&a, &b), b);
        assert!(Scalar::is_negative(&dec("-0.1")));
    }
}
