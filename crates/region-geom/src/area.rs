// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use region_num::Scalar;

use crate::error::{Dimension, GeomError};
use crate::size::Size;
use crate::space::{Tag, Untagged};
use crate::span::{Edge, Span};

/// The part of an area that is dragged by a resize.
///
/// The opposite corner (or the center) stays where it was: resizing from
/// `MinYMinX` keeps the `MaxYMaxX` corner fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Minimum-Y, minimum-X corner; the opposite corner stays fixed.
    MinYMinX,
    /// Minimum-Y, maximum-X corner; the opposite corner stays fixed.
    MinYMaxX,
    /// Maximum-Y, minimum-X corner; the opposite corner stays fixed.
    MaxYMinX,
    /// Maximum-Y, maximum-X corner; the opposite corner stays fixed.
    MaxYMaxX,
    /// All edges move symmetrically; the center stays fixed.
    Center,
}

impl Handle {
    /// Per-axis edges that stay fixed, as `(x, y)`.
    const fn anchors(self) -> (Edge, Edge) {
        match self {
            Self::MinYMinX => (Edge::Max, Edge::Max),
            Self::MinYMaxX => (Edge::Min, Edge::Max),
            Self::MaxYMinX => (Edge::Max, Edge::Min),
            Self::MaxYMaxX => (Edge::Min, Edge::Min),
            Self::Center => (Edge::Center, Edge::Center),
        }
    }
}

/// Axis-aligned rectangle tagged with a coordinate space.
///
/// Invariants:
/// - `minimum_x <= maximum_x` and `minimum_y <= maximum_y`, enforced by
///   [`Area::of`] and preserved by every operation.
/// - Width and height are derived, never stored.
///
/// Operations that reposition or resize go through exact arithmetic and
/// report [`GeomError::Overflow`] for fixed-width kinds instead of wrapping.
pub struct Area<S, Space = Untagged> {
    x: Span<S>,
    y: Span<S>,
    space: Tag<Space>,
}

impl<S: Scalar, Space> Area<S, Space> {
    /// Validates bounds and builds an area.
    pub fn of(minimum_x: S, maximum_x: S, minimum_y: S, maximum_y: S) -> Result<Self, GeomError> {
        Ok(Self::from_spans(
            Span::of(minimum_x, maximum_x, Dimension::X)?,
            Span::of(minimum_y, maximum_y, Dimension::Y)?,
        ))
    }

    /// Builds an area from its minimum corner and extents.
    ///
    /// The maxima are computed with exact addition; a negative extent is
    /// rejected by the same check as [`Area::of`].
    pub fn create(x: S, y: S, width: S, height: S) -> Result<Self, GeomError> {
        let maximum_x = x.exact_add(&width)?;
        let maximum_y = y.exact_add(&height)?;
        Self::of(x, maximum_x, y, maximum_y)
    }

    /// Combines two already-validated spans.
    pub fn from_spans(x: Span<S>, y: Span<S>) -> Self {
        Self {
            x,
            y,
            space: PhantomData,
        }
    }

    /// Horizontal span.
    pub fn x_span(&self) -> &Span<S> {
        &self.x
    }

    /// Vertical span.
    pub fn y_span(&self) -> &Span<S> {
        &self.y
    }

    /// Lowest x.
    pub fn minimum_x(&self) -> &S {
        self.x.minimum()
    }

    /// Highest x.
    pub fn maximum_x(&self) -> &S {
        self.x.maximum()
    }

    /// Lowest y.
    pub fn minimum_y(&self) -> &S {
        self.y.minimum()
    }

    /// Highest y.
    pub fn maximum_y(&self) -> &S {
        self.y.maximum()
    }

    /// `maximum_x - minimum_x` using ordinary arithmetic.
    ///
    /// Wraps for a fixed-width area wider than the scalar type can represent;
    /// [`Area::size`] reports that case as an error and
    /// [`Area::could_fit_inside`] and `Display` use the true width.
    pub fn width(&self) -> S {
        self.x.size()
    }

    /// `maximum_y - minimum_y` using ordinary arithmetic; wraps like
    /// [`Area::width`].
    pub fn height(&self) -> S {
        self.y.size()
    }

    /// Position-less extent of this area.
    pub fn size(&self) -> Result<Size<S>, GeomError> {
        Size::of(self.x.exact_size()?, self.y.exact_size()?)
    }

    /// Center point `(x, y)`; integer kinds round toward the minimum corner.
    pub fn center(&self) -> (S, S) {
        (self.x.center(), self.y.center())
    }

    /// `other` lies entirely within `self`, edges inclusive.
    pub fn contains(&self, other: &Self) -> bool {
        self.x.contains(&other.x) && self.y.contains(&other.y)
    }

    /// The areas share interior; maximum edges are exclusive.
    ///
    /// Touching edges do not overlap, and an area with zero width or height
    /// never overlaps itself. It can still overlap a larger area that
    /// surrounds it.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x.overlaps(&other.x) && self.y.overlaps(&other.y)
    }

    /// `self` is no wider and no taller than `other`; position is ignored.
    pub fn could_fit_inside(&self, other: &Self) -> bool {
        self.x.could_fit_inside(&other.x) && self.y.could_fit_inside(&other.y)
    }

    /// Smallest area enclosing both.
    pub fn containing(&self, other: &Self) -> Self {
        Self::from_spans(self.x.containing(&other.x), self.y.containing(&other.y))
    }

    /// Shared interior of two overlapping areas.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        Some(Self::from_spans(
            self.x.intersection(&other.x)?,
            self.y.intersection(&other.y)?,
        ))
    }

    /// `(x, y)` lies in `[minimum_x, maximum_x) × [minimum_y, maximum_y)`.
    pub fn contains_point(&self, x: &S, y: &S) -> bool {
        self.x.contains_point(x) && self.y.contains_point(y)
    }

    /// Translates by `(dx, dy)`.
    pub fn move_relative(&self, dx: S, dy: S) -> Result<Self, GeomError> {
        Ok(Self::from_spans(self.x.moved_by(&dx)?, self.y.moved_by(&dy)?))
    }

    /// Moves the minimum corner to `(x, y)`.
    pub fn move_absolute(&self, x: S, y: S) -> Result<Self, GeomError> {
        Ok(Self::from_spans(self.x.moved_to(x)?, self.y.moved_to(y)?))
    }

    /// Moves the minimum corner to the origin.
    pub fn move_to_origin(&self) -> Result<Self, GeomError> {
        self.move_absolute(S::zero(), S::zero())
    }

    fn align_x(&self, inner: &Self, edge: Edge, offset: &S) -> Result<Self, GeomError> {
        Ok(Self::from_spans(
            inner.x.aligned_to(&self.x, edge, offset)?,
            inner.y.clone(),
        ))
    }

    fn align_y(&self, inner: &Self, edge: Edge, offset: &S) -> Result<Self, GeomError> {
        Ok(Self::from_spans(
            inner.x.clone(),
            inner.y.aligned_to(&self.y, edge, offset)?,
        ))
    }

    fn align_corner(
        &self,
        inner: &Self,
        x_edge: Edge,
        y_edge: Edge,
        x_offset: &S,
        y_offset: &S,
    ) -> Result<Self, GeomError> {
        self.align_y(&self.align_x(inner, x_edge, x_offset)?, y_edge, y_offset)
    }

    /// Moves `inner` horizontally so its minimum x meets this area's.
    pub fn align_horizontally_min_x(&self, inner: &Self) -> Result<Self, GeomError> {
        self.align_x(inner, Edge::Min, &S::zero())
    }

    /// Moves `inner` horizontally to sit `offset` right of this area's minimum x.
    pub fn align_horizontally_min_x_offset(
        &self,
        inner: &Self,
        offset: S,
    ) -> Result<Self, GeomError> {
        self.align_x(inner, Edge::Min, &offset)
    }

    /// Moves `inner` horizontally so its maximum x meets this area's.
    pub fn align_horizontally_max_x(&self, inner: &Self) -> Result<Self, GeomError> {
        self.align_x(inner, Edge::Max, &S::zero())
    }

    /// Moves `inner` horizontally to end `offset` left of this area's maximum x.
    pub fn align_horizontally_max_x_offset(
        &self,
        inner: &Self,
        offset: S,
    ) -> Result<Self, GeomError> {
        self.align_x(inner, Edge::Max, &offset)
    }

    /// Centers `inner` horizontally within this area.
    pub fn align_horizontally_center(&self, inner: &Self) -> Result<Self, GeomError> {
        self.align_x(inner, Edge::Center, &S::zero())
    }

    /// Centers `inner` horizontally, then shifts it right by `offset`.
    pub fn align_horizontally_center_offset(
        &self,
        inner: &Self,
        offset: S,
    ) -> Result<Self, GeomError> {
        self.align_x(inner, Edge::Center, &offset)
    }

    /// Moves `inner` vertically so its minimum y meets this area's.
    pub fn align_vertically_min_y(&self, inner: &Self) -> Result<Self, GeomError> {
        self.align_y(inner, Edge::Min, &S::zero())
    }

    /// Moves `inner` vertically to sit `offset` past this area's minimum y.
    pub fn align_vertically_min_y_offset(
        &self,
        inner: &Self,
        offset: S,
    ) -> Result<Self, GeomError> {
        self.align_y(inner, Edge::Min, &offset)
    }

    /// Moves `inner` vertically so its maximum y meets this area's.
    pub fn align_vertically_max_y(&self, inner: &Self) -> Result<Self, GeomError> {
        self.align_y(inner, Edge::Max, &S::zero())
    }

    /// Moves `inner` vertically to end `offset` before this area's maximum y.
    pub fn align_vertically_max_y_offset(
        &self,
        inner: &Self,
        offset: S,
    ) -> Result<Self, GeomError> {
        self.align_y(inner, Edge::Max, &offset)
    }

    /// Centers `inner` vertically within this area.
    pub fn align_vertically_center(&self, inner: &Self) -> Result<Self, GeomError> {
        self.align_y(inner, Edge::Center, &S::zero())
    }

    /// Centers `inner` vertically, then shifts it by `offset`.
    pub fn align_vertically_center_offset(
        &self,
        inner: &Self,
        offset: S,
    ) -> Result<Self, GeomError> {
        self.align_y(inner, Edge::Center, &offset)
    }

    /// Puts `inner` into this area's minimum-y, minimum-x corner.
    pub fn align_min_y_min_x(&self, inner: &Self) -> Result<Self, GeomError> {
        self.align_corner(inner, Edge::Min, Edge::Min, &S::zero(), &S::zero())
    }

    /// Puts `inner` into the minimum-y, minimum-x corner, inset by the offsets.
    pub fn align_min_y_min_x_offset(
        &self,
        inner: &Self,
        x_offset: S,
        y_offset: S,
    ) -> Result<Self, GeomError> {
        self.align_corner(inner, Edge::Min, Edge::Min, &x_offset, &y_offset)
    }

    /// Puts `inner` into this area's minimum-y, maximum-x corner.
    pub fn align_min_y_max_x(&self, inner: &Self) -> Result<Self, GeomError> {
        self.align_corner(inner, Edge::Max, Edge::Min, &S::zero(), &S::zero())
    }

    /// Puts `inner` into the minimum-y, maximum-x corner, inset by the offsets.
    pub fn align_min_y_max_x_offset(
        &self,
        inner: &Self,
        x_offset: S,
        y_offset: S,
    ) -> Result<Self, GeomError> {
        self.align_corner(inner, Edge::Max, Edge::Min, &x_offset, &y_offset)
    }

    /// Puts `inner` into this area's maximum-y, minimum-x corner.
    pub fn align_max_y_min_x(&self, inner: &Self) -> Result<Self, GeomError> {
        self.align_corner(inner, Edge::Min, Edge::Max, &S::zero(), &S::zero())
    }

    /// Puts `inner` into the maximum-y, minimum-x corner, inset by the offsets.
    pub fn align_max_y_min_x_offset(
        &self,
        inner: &Self,
        x_offset: S,
        y_offset: S,
    ) -> Result<Self, GeomError> {
        self.align_corner(inner, Edge::Min, Edge::Max, &x_offset, &y_offset)
    }

    /// Puts `inner` into this area's maximum-y, maximum-x corner.
    pub fn align_max_y_max_x(&self, inner: &Self) -> Result<Self, GeomError> {
        self.align_corner(inner, Edge::Max, Edge::Max, &S::zero(), &S::zero())
    }

    /// Puts `inner` into the maximum-y, maximum-x corner, inset by the offsets.
    pub fn align_max_y_max_x_offset(
        &self,
        inner: &Self,
        x_offset: S,
        y_offset: S,
    ) -> Result<Self, GeomError> {
        self.align_corner(inner, Edge::Max, Edge::Max, &x_offset, &y_offset)
    }

    /// Centers `inner` on both axes.
    pub fn align_center(&self, inner: &Self) -> Result<Self, GeomError> {
        self.align_vertically_center(&self.align_horizontally_center(inner)?)
    }

    /// Shrinks inward from each edge by its own offset.
    ///
    /// Each shifted bound is clamped back into this area, and a maximum that
    /// ends up below its minimum is raised to it, so oversized offsets
    /// collapse an axis instead of inverting it.
    pub fn hollow_out(
        &self,
        minimum_x_offset: S,
        maximum_x_offset: S,
        minimum_y_offset: S,
        maximum_y_offset: S,
    ) -> Result<Self, GeomError> {
        Ok(Self::from_spans(
            self.x.hollowed(&minimum_x_offset, &maximum_x_offset)?,
            self.y.hollowed(&minimum_y_offset, &maximum_y_offset)?,
        ))
    }

    /// [`Area::hollow_out`] with the same offset on every edge.
    pub fn hollow_out_evenly(&self, offset: S) -> Result<Self, GeomError> {
        self.hollow_out(offset.clone(), offset.clone(), offset.clone(), offset)
    }

    /// Resizes to `width × height`, keeping the part opposite `handle` in place.
    pub fn set_size_from(&self, handle: Handle, width: S, height: S) -> Result<Self, GeomError> {
        let (x_anchor, y_anchor) = handle.anchors();
        Ok(Self::from_spans(
            self.x.resized(&width, x_anchor, Dimension::X)?,
            self.y.resized(&height, y_anchor, Dimension::Y)?,
        ))
    }

    /// Grows each extent by its delta (floored at zero), then resizes from `handle`.
    pub fn scale_from(&self, handle: Handle, dx: S, dy: S) -> Result<Self, GeomError> {
        let (x_anchor, y_anchor) = handle.anchors();
        Ok(Self::from_spans(
            self.x.scaled(&dx, x_anchor, Dimension::X)?,
            self.y.scaled(&dy, y_anchor, Dimension::Y)?,
        ))
    }

    /// Keeps this area's y span and takes the horizontal gap between `a` and `b`.
    pub fn fit_between_horizontal(&self, a: &Self, b: &Self) -> Self {
        Self::from_spans(Span::between(&a.x, &b.x), self.y.clone())
    }

    /// Keeps this area's x span and takes the vertical gap between `a` and `b`.
    pub fn fit_between_vertical(&self, a: &Self, b: &Self) -> Self {
        Self::from_spans(self.x.clone(), Span::between(&a.y, &b.y))
    }

    /// Cuts along a line parallel to the x axis, `y_offset` past the minimum y.
    ///
    /// Returns `(lower, upper)`: `lower` spans `[minimum_y + offset, maximum_y]`
    /// and `upper` spans `[minimum_y, minimum_y + offset]`, both with this
    /// area's x span. The offset is capped at the height.
    pub fn split_along_parallel_to_x(&self, y_offset: S) -> Result<(Self, Self), GeomError> {
        let (lower, upper) = self.y.split_at(&y_offset, Dimension::Y)?;
        Ok((
            Self::from_spans(self.x.clone(), lower),
            Self::from_spans(self.x.clone(), upper),
        ))
    }

    /// Cuts along a line parallel to the y axis, `x_offset` past the minimum x.
    ///
    /// Returns `(lower, upper)` with `lower` on the maximum-x side; see
    /// [`Area::split_along_parallel_to_x`].
    pub fn split_along_parallel_to_y(&self, x_offset: S) -> Result<(Self, Self), GeomError> {
        let (lower, upper) = self.x.split_at(&x_offset, Dimension::X)?;
        Ok((
            Self::from_spans(lower, self.y.clone()),
            Self::from_spans(upper, self.y.clone()),
        ))
    }
}

impl<S, Space> Area<S, Space> {
    /// Reinterprets the area in another coordinate space.
    ///
    /// The bounds move over untouched; only the static tag changes.
    pub fn cast<Other>(self) -> Area<S, Other> {
        Area {
            x: self.x,
            y: self.y,
            space: PhantomData,
        }
    }
}

impl<S: Clone, Space> Clone for Area<S, Space> {
    fn clone(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.clone(),
            space: PhantomData,
        }
    }
}

impl<S: Copy, Space> Copy for Area<S, Space> {}

impl<S: PartialEq, Space> PartialEq for Area<S, Space> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<S: Eq, Space> Eq for Area<S, Space> {}

impl<S: Hash, Space> Hash for Area<S, Space> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl<S: fmt::Debug, Space> fmt::Debug for Area<S, Space> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Area")
            .field("minimum_x", self.x.minimum())
            .field("maximum_x", self.x.maximum())
            .field("minimum_y", self.y.minimum())
            .field("maximum_y", self.y.maximum())
            .finish()
    }
}

/// Renders `"<width>x<height> <minimum_x>+<minimum_y>"`.
impl<S: Scalar, Space> fmt::Display for Area<S, Space> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} {}+{}",
            self.x.extent(),
            self.y.extent(),
            self.minimum_x().canonical(),
            self.minimum_y().canonical()
        )
    }
}
