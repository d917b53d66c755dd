// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;

use region_num::{ArithmeticOp, Scalar, ScalarKind};

proptest! {
    #[test]
    fn i32_exact_add_matches_wide_reference(a in any::<i32>(), b in any::<i32>()) {
        let wide = i64::from(a) + i64::from(b);
        match Scalar::exact_add(&a, &b) {
            Ok(sum) => prop_assert_eq!(i64::from(sum), wide),
            Err(err) => {
                prop_assert!(i32::try_from(wide).is_err());
                prop_assert_eq!(err.kind, ScalarKind::I32);
                prop_assert_eq!(err.op, ArithmeticOp::Add);
            }
        }
    }

    #[test]
    fn i64_exact_sub_matches_wide_reference(a in any::<i64>(), b in any::<i64>()) {
        let wide = i128::from(a) - i128::from(b);
        match Scalar::exact_sub(&a, &b) {
            Ok(diff) => prop_assert_eq!(i128::from(diff), wide),
            Err(err) => {
                prop_assert!(i64::try_from(wide).is_err());
                prop_assert_eq!(err.op, ArithmeticOp::Sub);
            }
        }
    }

    #[test]
    fn min_and_max_bracket_both_operands(a in any::<i64>(), b in any::<i64>()) {
        let lo = Scalar::min(&a, &b);
        let hi = Scalar::max(&a, &b);
        prop_assert!(lo <= a && lo <= b);
        prop_assert!(hi >= a && hi >= b);
        prop_assert!(lo == a || lo == b);
    }

    #[test]
    fn integer_halves_differ_by_at_most_one(v in 0_i32..=i32::MAX) {
        let half = Scalar::half(&v);
        let rest = v - half;
        prop_assert!(rest - half == 0 || rest - half == 1);
    }
}

#[cfg(feature = "big")]
mod big {
    use super::*;
    use region_num::BigInt;

    proptest! {
        #[test]
        fn bigint_exact_add_agrees_with_i128(a in any::<i64>(), b in any::<i64>()) {
            let sum = Scalar::exact_add(&BigInt::from(a), &BigInt::from(b));
            prop_assert_eq!(sum, Ok(BigInt::from(i128::from(a) + i128::from(b))));
        }
    }
}
