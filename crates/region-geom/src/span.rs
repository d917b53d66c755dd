// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! One axis of a region: a validated `[minimum, maximum]` interval.
//!
//! Every area and volume operation decomposes into independent per-axis
//! operations on spans. Edge conventions differ by operation and are fixed
//! here once:
//!
//! - [`Span::contains`] treats both bounds as inclusive.
//! - [`Span::overlaps`] and [`Span::contains_point`] treat the maximum as
//!   exclusive, so a zero-length span never overlaps itself and holds no
//!   point.
//!
//! Extents are compared and rendered by their true value; a fixed-width span
//! wider than its scalar type can represent is never judged by a wrapped size.

use core::cmp::Ordering;

use region_num::{Difference, Scalar};

use crate::error::{Dimension, GeomError};

/// Which edge of the outer span an aligned span is placed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Minimum edges coincide; the offset moves inward (toward larger values).
    Min,
    /// Maximum edges coincide; the offset moves inward (toward smaller values).
    Max,
    /// Centers coincide; the offset is added to the resulting minimum.
    Center,
}

/// Closed axis interval with `minimum <= maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span<S> {
    minimum: S,
    maximum: S,
}

impl<S> Span<S> {
    /// Inclusive lower bound.
    pub fn minimum(&self) -> &S {
        &self.minimum
    }

    /// Upper bound.
    pub fn maximum(&self) -> &S {
        &self.maximum
    }
}

impl<S: Scalar> Span<S> {
    /// Validates and builds a span.
    ///
    /// `dimension` names the axis in the error when `minimum > maximum`.
    pub fn of(minimum: S, maximum: S, dimension: Dimension) -> Result<Self, GeomError> {
        if minimum.compare(&maximum) == Ordering::Greater {
            return Err(GeomError::inverted(dimension, &minimum, &maximum));
        }
        Ok(Self { minimum, maximum })
    }

    /// Builds a span from bounds the caller has already ordered.
    pub(crate) fn ordered(minimum: S, maximum: S) -> Self {
        debug_assert!(minimum.compare(&maximum) != Ordering::Greater);
        Self { minimum, maximum }
    }

    /// Span `[0, extent]` for a non-negative extent.
    pub(crate) fn from_origin(extent: S) -> Self {
        Self::ordered(S::zero(), extent)
    }

    /// `maximum - minimum` using ordinary arithmetic.
    ///
    /// Fixed-width kinds wrap when the span is wider than the type can
    /// represent. Use [`Span::exact_size`] for the checked value,
    /// [`Span::compare_size`] to order sizes and [`Span::extent`] to render it.
    pub fn size(&self) -> S {
        self.maximum.sub(&self.minimum)
    }

    /// `maximum - minimum`, failing instead of wrapping.
    pub fn exact_size(&self) -> Result<S, GeomError> {
        Ok(self.maximum.exact_sub(&self.minimum)?)
    }

    /// Midpoint, rounded toward `minimum` for integer kinds. Never overflows.
    pub fn center(&self) -> S {
        if let Ok(size) = self.maximum.exact_sub(&self.minimum) {
            return self.minimum.add(&size.half());
        }
        // Only a span straddling zero can be too wide, and then the sum of its
        // bounds is representable. `half` truncates, so step down on odd
        // negative sums to keep rounding toward the minimum.
        let sum = self.minimum.add(&self.maximum);
        let half = sum.half();
        let remainder = sum.sub(&half.add(&half));
        if remainder.is_negative() {
            half.add(&remainder)
        } else {
            half
        }
    }

    /// Orders the true sizes of two spans.
    ///
    /// Sizes that overflow the scalar type rank above every representable
    /// size; two such sizes are ordered by the difference of their bounds.
    pub fn compare_size(&self, other: &Self) -> Ordering {
        match (
            self.maximum.exact_sub(&self.minimum),
            other.maximum.exact_sub(&other.minimum),
        ) {
            (Ok(mine), Ok(theirs)) => mine.compare(&theirs),
            (Err(_), Ok(_)) => Ordering::Greater,
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Err(_)) => {
                // Both spans straddle zero: maxima share a sign, as do minima,
                // so neither difference can overflow.
                let maxima = self.maximum.sub(&other.maximum);
                let minima = self.minimum.sub(&other.minimum);
                maxima.compare(&minima)
            }
        }
    }

    /// Display adapter rendering the true size, even when it overflows `S`.
    pub fn extent(&self) -> Difference<'_, S> {
        self.maximum.difference(&self.minimum)
    }

    /// `other` lies within `self`, both bounds inclusive.
    pub fn contains(&self, other: &Self) -> bool {
        other.minimum.compare(&self.minimum) != Ordering::Less
            && other.maximum.compare(&self.maximum) != Ordering::Greater
    }

    /// The spans share a non-empty half-open stretch.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.minimum.compare(&other.maximum) == Ordering::Less
            && other.minimum.compare(&self.maximum) == Ordering::Less
    }

    /// `value` lies in `[minimum, maximum)`.
    pub fn contains_point(&self, value: &S) -> bool {
        value.compare(&self.minimum) != Ordering::Less
            && value.compare(&self.maximum) == Ordering::Less
    }

    /// `self` is no longer than `other`, wherever either sits.
    pub fn could_fit_inside(&self, other: &Self) -> bool {
        self.compare_size(other) != Ordering::Greater
    }

    /// Smallest span covering both.
    pub fn containing(&self, other: &Self) -> Self {
        Self::ordered(
            self.minimum.min(&other.minimum),
            self.maximum.max(&other.maximum),
        )
    }

    /// Shared stretch of two overlapping spans.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        self.overlaps(other).then(|| {
            Self::ordered(
                self.minimum.max(&other.minimum),
                self.maximum.min(&other.maximum),
            )
        })
    }

    /// Translates both bounds by `delta`.
    pub fn moved_by(&self, delta: &S) -> Result<Self, GeomError> {
        Ok(Self::ordered(
            self.minimum.exact_add(delta)?,
            self.maximum.exact_add(delta)?,
        ))
    }

    /// Places the span so it starts at `minimum`, keeping its size.
    pub fn moved_to(&self, minimum: S) -> Result<Self, GeomError> {
        let size = self.exact_size()?;
        let maximum = minimum.exact_add(&size)?;
        Ok(Self::ordered(minimum, maximum))
    }

    /// Places `self` against `edge` of `outer`, `offset` inward, keeping its size.
    ///
    /// For [`Edge::Center`] the slack `outer.size - self.size` is halved; with
    /// integer kinds the two gaps then differ by at most one unit.
    pub fn aligned_to(&self, outer: &Self, edge: Edge, offset: &S) -> Result<Self, GeomError> {
        let minimum = match edge {
            Edge::Min => outer.minimum.exact_add(offset)?,
            Edge::Max => outer
                .maximum
                .exact_sub(offset)?
                .exact_sub(&self.exact_size()?)?,
            Edge::Center => {
                let slack = outer.exact_size()?.exact_sub(&self.exact_size()?)?;
                outer.minimum.exact_add(&slack.half())?.exact_add(offset)?
            }
        };
        self.moved_to(minimum)
    }

    /// Pulls each bound inward by its offset and keeps the result inside `self`.
    ///
    /// The shifted minimum is clamped into `[minimum, maximum]`, then the
    /// shifted maximum is, then the maximum is floored at the new minimum. An
    /// offset larger than the span collapses it onto the clamped minimum.
    pub fn hollowed(&self, minimum_offset: &S, maximum_offset: &S) -> Result<Self, GeomError> {
        let low = self.clamp(self.minimum.exact_add(minimum_offset)?);
        let high = self.clamp(self.maximum.exact_sub(maximum_offset)?);
        let high = low.max(&high);
        Ok(Self::ordered(low, high))
    }

    /// Cuts the span `offset` past its minimum.
    ///
    /// The offset is first capped at the span's size. Returns `(lower, upper)`
    /// where `lower` is the part above the cut and `upper` the part below it,
    /// so `lower.size + upper.size == self.size`. A negative offset leaves
    /// `upper` inverted and is reported against `dimension`.
    pub fn split_at(&self, offset: &S, dimension: Dimension) -> Result<(Self, Self), GeomError> {
        let offset = self.exact_size()?.min(offset);
        let cut = self.minimum.exact_add(&offset)?;
        let lower = Self::of(cut.clone(), self.maximum.clone(), dimension)?;
        let upper = Self::of(self.minimum.clone(), cut, dimension)?;
        Ok((lower, upper))
    }

    /// The gap between `a` and `b`, whichever order they come in.
    ///
    /// Runs from the smaller of the two maxima to the larger of the two minima,
    /// normalized so the result is never inverted. Overlapping inputs yield the
    /// overlap instead.
    pub fn between(a: &Self, b: &Self) -> Self {
        let low = a.maximum.min(&b.maximum);
        let high = a.minimum.max(&b.minimum);
        Self::ordered(low.min(&high), low.max(&high))
    }

    /// Span of `size` built at this span's minimum, then aligned to `anchor` of `self`.
    pub fn resized(&self, size: &S, anchor: Edge, dimension: Dimension) -> Result<Self, GeomError> {
        let fresh = Self::of(
            self.minimum.clone(),
            self.minimum.exact_add(size)?,
            dimension,
        )?;
        fresh.aligned_to(self, anchor, &S::zero())
    }

    /// Grows (or shrinks) the span by `delta`, floored at zero, around `anchor`.
    pub fn scaled(&self, delta: &S, anchor: Edge, dimension: Dimension) -> Result<Self, GeomError> {
        let size = self.exact_size()?.exact_add(delta)?.max(&S::zero());
        self.resized(&size, anchor, dimension)
    }

    fn clamp(&self, value: S) -> S {
        value.max(&self.minimum).min(&self.maximum)
    }
}
