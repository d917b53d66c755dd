// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error raised by exact arithmetic on fixed-width scalar kinds.

use core::fmt;

use thiserror::Error;

use crate::ScalarKind;

/// The arithmetic operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    /// Exact addition.
    Add,
    /// Exact subtraction.
    Sub,
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("add"),
            Self::Sub => f.write_str("sub"),
        }
    }
}

/// The true result of an exact operation is not representable in the scalar kind.
///
/// Only the fixed-width integer kinds produce this; floating-point kinds follow
/// IEEE semantics and arbitrary-precision kinds cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("arithmetic overflow: {kind} {op}")]
pub struct ArithmeticOverflow {
    /// Scalar kind the operation was performed in.
    pub kind: ScalarKind,
    /// Operation that overflowed.
    pub op: ArithmeticOp,
}

impl ArithmeticOverflow {
    /// Builds the error for `op` on `kind`.
    pub fn new(kind: ScalarKind, op: ArithmeticOp) -> Self {
        tracing::trace!(%kind, %op, "exact arithmetic overflowed");
        Self { kind, op }
    }
}
