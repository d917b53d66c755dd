// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors produced by region construction and algebra.

use core::fmt;

use region_num::{ArithmeticOverflow, Scalar};
use thiserror::Error;

/// Axis or extent named by an [`GeomError::InvariantViolation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    /// Horizontal axis of a region.
    X,
    /// Vertical axis of a region.
    Y,
    /// Depth axis of a volume.
    Z,
    /// Width of a size.
    Width,
    /// Height of a size.
    Height,
    /// Depth of a three-dimensional size.
    Depth,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::Width => "Width",
            Self::Height => "Height",
            Self::Depth => "Depth",
        })
    }
}

/// Error returned by the validating factories and by algebra operations that
/// use exact arithmetic.
///
/// Neither variant is recoverable inside the library: the operation that
/// raised it produced no value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A minimum exceeded its maximum, or a size dimension was negative.
    #[error("invariant violated on {dimension}: {reason}")]
    InvariantViolation {
        /// The offending axis or extent.
        dimension: Dimension,
        /// Human-readable description including the rejected values.
        reason: String,
    },
    /// Exact arithmetic on a fixed-width scalar kind overflowed.
    #[error(transparent)]
    Overflow(#[from] ArithmeticOverflow),
}

impl GeomError {
    pub(crate) fn inverted<S: Scalar>(dimension: Dimension, minimum: &S, maximum: &S) -> Self {
        tracing::trace!(%dimension, kind = %S::KIND, "rejecting inverted interval");
        Self::InvariantViolation {
            dimension,
            reason: format!(
                "minimum {} exceeds maximum {}",
                minimum.canonical(),
                maximum.canonical()
            ),
        }
    }

    pub(crate) fn negative<S: Scalar>(dimension: Dimension, value: &S) -> Self {
        tracing::trace!(%dimension, kind = %S::KIND, "rejecting negative extent");
        Self::InvariantViolation {
            dimension,
            reason: format!("{} is negative", value.canonical()),
        }
    }

    /// Returns the dimension named by an invariant violation.
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            Self::InvariantViolation { dimension, .. } => Some(*dimension),
            Self::Overflow(_) => None,
        }
    }

    /// Returns `true` when the error came from exact arithmetic.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }
}
