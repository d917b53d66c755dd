// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Three-axis counterpart of [`Area`](crate::Area).
//!
//! Every operation is the area operation applied to one more span; the edge
//! conventions and overflow behavior are identical.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use region_num::Scalar;

use crate::error::{Dimension, GeomError};
use crate::size::Size3;
use crate::space::{Tag, Untagged};
use crate::span::{Edge, Span};

/// Axis-aligned box tagged with a coordinate space.
///
/// Invariants: `minimum <= maximum` on x, y and z, enforced by
/// [`Volume::of`].
pub struct Volume<S, Space = Untagged> {
    x: Span<S>,
    y: Span<S>,
    z: Span<S>,
    space: Tag<Space>,
}

impl<S: Scalar, Space> Volume<S, Space> {
    /// Validates bounds and builds a volume.
    pub fn of(
        minimum_x: S,
        maximum_x: S,
        minimum_y: S,
        maximum_y: S,
        minimum_z: S,
        maximum_z: S,
    ) -> Result<Self, GeomError> {
        Ok(Self::from_spans(
            Span::of(minimum_x, maximum_x, Dimension::X)?,
            Span::of(minimum_y, maximum_y, Dimension::Y)?,
            Span::of(minimum_z, maximum_z, Dimension::Z)?,
        ))
    }

    /// Builds a volume from its minimum corner and extents (exact addition).
    pub fn create(x: S, y: S, z: S, width: S, height: S, depth: S) -> Result<Self, GeomError> {
        let maximum_x = x.exact_add(&width)?;
        let maximum_y = y.exact_add(&height)?;
        let maximum_z = z.exact_add(&depth)?;
        Self::of(x, maximum_x, y, maximum_y, z, maximum_z)
    }

    /// Combines three already-validated spans.
    pub fn from_spans(x: Span<S>, y: Span<S>, z: Span<S>) -> Self {
        Self {
            x,
            y,
            z,
            space: PhantomData,
        }
    }

    /// Span along x.
    pub fn x_span(&self) -> &Span<S> {
        &self.x
    }

    /// Span along y.
    pub fn y_span(&self) -> &Span<S> {
        &self.y
    }

    /// Span along z.
    pub fn z_span(&self) -> &Span<S> {
        &self.z
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

    /// Lowest z.
    pub fn minimum_z(&self) -> &S {
        self.z.minimum()
    }

    /// Highest z.
    pub fn maximum_z(&self) -> &S {
        self.z.maximum()
    }

    /// Extent along x, using ordinary arithmetic like [`Area::width`](crate::Area::width).
    pub fn width(&self) -> S {
        self.x.size()
    }

    /// Extent along y.
    pub fn height(&self) -> S {
        self.y.size()
    }

    /// Extent along z.
    pub fn depth(&self) -> S {
        self.z.size()
    }

    /// Position-less extent of this volume.
    pub fn size(&self) -> Result<Size3<S>, GeomError> {
        Size3::of(
            self.x.exact_size()?,
            self.y.exact_size()?,
            self.z.exact_size()?,
        )
    }

    /// `other` lies entirely within `self`, faces inclusive.
    pub fn contains(&self, other: &Self) -> bool {
        self.x.contains(&other.x) && self.y.contains(&other.y) && self.z.contains(&other.z)
    }

    /// The volumes share interior; maximum faces are exclusive, so a flat
    /// volume never overlaps itself.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x.overlaps(&other.x) && self.y.overlaps(&other.y) && self.z.overlaps(&other.z)
    }

    /// `self` is no larger than `other` on any axis; position is ignored.
    pub fn could_fit_inside(&self, other: &Self) -> bool {
        self.x.could_fit_inside(&other.x)
            && self.y.could_fit_inside(&other.y)
            && self.z.could_fit_inside(&other.z)
    }

    /// Smallest volume enclosing both.
    pub fn containing(&self, other: &Self) -> Self {
        Self::from_spans(
            self.x.containing(&other.x),
            self.y.containing(&other.y),
            self.z.containing(&other.z),
        )
    }

    /// Shared interior of two overlapping volumes.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        Some(Self::from_spans(
            self.x.intersection(&other.x)?,
            self.y.intersection(&other.y)?,
            self.z.intersection(&other.z)?,
        ))
    }

    /// `(x, y, z)` lies inside, maximum faces exclusive.
    pub fn contains_point(&self, x: &S, y: &S, z: &S) -> bool {
        self.x.contains_point(x) && self.y.contains_point(y) && self.z.contains_point(z)
    }

    /// Translates by `(dx, dy, dz)`.
    pub fn move_relative(&self, dx: S, dy: S, dz: S) -> Result<Self, GeomError> {
        Ok(Self::from_spans(
            self.x.moved_by(&dx)?,
            self.y.moved_by(&dy)?,
            self.z.moved_by(&dz)?,
        ))
    }

    /// Moves the minimum corner to `(x, y, z)`.
    pub fn move_absolute(&self, x: S, y: S, z: S) -> Result<Self, GeomError> {
        Ok(Self::from_spans(
            self.x.moved_to(x)?,
            self.y.moved_to(y)?,
            self.z.moved_to(z)?,
        ))
    }

    /// Moves the minimum corner to the origin.
    pub fn move_to_origin(&self) -> Result<Self, GeomError> {
        self.move_absolute(S::zero(), S::zero(), S::zero())
    }

    /// Places `inner` against `edge` of this volume along x, `offset` inward.
    pub fn align_x(&self, inner: &Self, edge: Edge, offset: S) -> Result<Self, GeomError> {
        Ok(Self::from_spans(
            inner.x.aligned_to(&self.x, edge, &offset)?,
            inner.y.clone(),
            inner.z.clone(),
        ))
    }

    /// Places `inner` against `edge` of this volume along y, `offset` inward.
    pub fn align_y(&self, inner: &Self, edge: Edge, offset: S) -> Result<Self, GeomError> {
        Ok(Self::from_spans(
            inner.x.clone(),
            inner.y.aligned_to(&self.y, edge, &offset)?,
            inner.z.clone(),
        ))
    }

    /// Places `inner` against `edge` of this volume along z, `offset` inward.
    pub fn align_z(&self, inner: &Self, edge: Edge, offset: S) -> Result<Self, GeomError> {
        Ok(Self::from_spans(
            inner.x.clone(),
            inner.y.clone(),
            inner.z.aligned_to(&self.z, edge, &offset)?,
        ))
    }

    /// Centers `inner` on all three axes.
    pub fn align_center(&self, inner: &Self) -> Result<Self, GeomError> {
        let zero = S::zero();
        Ok(Self::from_spans(
            inner.x.aligned_to(&self.x, Edge::Center, &zero)?,
            inner.y.aligned_to(&self.y, Edge::Center, &zero)?,
            inner.z.aligned_to(&self.z, Edge::Center, &zero)?,
        ))
    }

    /// Shrinks inward from each face by its own offset, clamped like
    /// [`Area::hollow_out`](crate::Area::hollow_out).
    pub fn hollow_out(
        &self,
        minimum_x_offset: S,
        maximum_x_offset: S,
        minimum_y_offset: S,
        maximum_y_offset: S,
        minimum_z_offset: S,
        maximum_z_offset: S,
    ) -> Result<Self, GeomError> {
        Ok(Self::from_spans(
            self.x.hollowed(&minimum_x_offset, &maximum_x_offset)?,
            self.y.hollowed(&minimum_y_offset, &maximum_y_offset)?,
            self.z.hollowed(&minimum_z_offset, &maximum_z_offset)?,
        ))
    }

    /// [`Volume::hollow_out`] with the same offset on every face.
    pub fn hollow_out_evenly(&self, offset: S) -> Result<Self, GeomError> {
        Ok(Self::from_spans(
            self.x.hollowed(&offset, &offset)?,
            self.y.hollowed(&offset, &offset)?,
            self.z.hollowed(&offset, &offset)?,
        ))
    }

    /// Cuts with a plane parallel to y and z, `x_offset` past the minimum x.
    ///
    /// Returns `(lower, upper)` with `lower` on the maximum-x side.
    pub fn split_along_plane_yz(&self, x_offset: S) -> Result<(Self, Self), GeomError> {
        let (lower, upper) = self.x.split_at(&x_offset, Dimension::X)?;
        Ok((
            Self::from_spans(lower, self.y.clone(), self.z.clone()),
            Self::from_spans(upper, self.y.clone(), self.z.clone()),
        ))
    }

    /// Cuts with a plane parallel to x and z, `y_offset` past the minimum y.
    pub fn split_along_plane_xz(&self, y_offset: S) -> Result<(Self, Self), GeomError> {
        let (lower, upper) = self.y.split_at(&y_offset, Dimension::Y)?;
        Ok((
            Self::from_spans(self.x.clone(), lower, self.z.clone()),
            Self::from_spans(self.x.clone(), upper, self.z.clone()),
        ))
    }

    /// Cuts with a plane parallel to x and y, `z_offset` past the minimum z.
    pub fn split_along_plane_xy(&self, z_offset: S) -> Result<(Self, Self), GeomError> {
        let (lower, upper) = self.z.split_at(&z_offset, Dimension::Z)?;
        Ok((
            Self::from_spans(self.x.clone(), self.y.clone(), lower),
            Self::from_spans(self.x.clone(), self.y.clone(), upper),
        ))
    }

    /// Keeps y and z, takes the gap between `a` and `b` along x.
    pub fn fit_between_x(&self, a: &Self, b: &Self) -> Self {
        Self::from_spans(Span::between(&a.x, &b.x), self.y.clone(), self.z.clone())
    }

    /// Keeps x and z, takes the gap between `a` and `b` along y.
    pub fn fit_between_y(&self, a: &Self, b: &Self) -> Self {
        Self::from_spans(self.x.clone(), Span::between(&a.y, &b.y), self.z.clone())
    }

    /// Keeps x and y, takes the gap between `a` and `b` along z.
    pub fn fit_between_z(&self, a: &Self, b: &Self) -> Self {
        Self::from_spans(self.x.clone(), self.y.clone(), Span::between(&a.z, &b.z))
    }
}

impl<S, Space> Volume<S, Space> {
    /// Reinterprets the volume in another coordinate space; bounds are untouched.
    pub fn cast<Other>(self) -> Volume<S, Other> {
        Volume {
            x: self.x,
            y: self.y,
            z: self.z,
            space: PhantomData,
        }
    }
}

impl<S: Clone, Space> Clone for Volume<S, Space> {
    fn clone(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.clone(),
            z: self.z.clone(),
            space: PhantomData,
        }
    }
}

impl<S: Copy, Space> Copy for Volume<S, Space> {}

impl<S: PartialEq, Space> PartialEq for Volume<S, Space> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl<S: Eq, Space> Eq for Volume<S, Space> {}

impl<S: Hash, Space> Hash for Volume<S, Space> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
        self.z.hash(state);
    }
}

impl<S: fmt::Debug, Space> fmt::Debug for Volume<S, Space> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Volume")
            .field("minimum_x", self.x.minimum())
            .field("maximum_x", self.x.maximum())
            .field("minimum_y", self.y.minimum())
            .field("maximum_y", self.y.maximum())
            .field("minimum_z", self.z.minimum())
            .field("maximum_z", self.z.maximum())
            .finish()
    }
}

/// Renders `"<width>x<height>x<depth> <minimum_x>+<minimum_y>+<minimum_z>"`.
impl<S: Scalar, Space> fmt::Display for Volume<S, Space> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}x{} {}+{}+{}",
            self.x.extent(),
            self.y.extent(),
            self.z.extent(),
            self.minimum_x().canonical(),
            self.minimum_y().canonical(),
            self.minimum_z().canonical()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(min: i32, max: i32) -> Volume<i32> {
        Volume::of(min, max, min, max, min, max).unwrap()
    }

    #[test]
    fn of_names_depth_axis() {
        let err = Volume::<i32>::of(0, 1, 0, 1, 3, 2).unwrap_err();
        assert_eq!(err.dimension(), Some(Dimension::Z));
    }

    #[test]
    fn create_and_display() {
        let v = Volume::<i64>::create(1, 2, 3, 4, 5, 6).unwrap();
        assert_eq!(v.to_string(), "4x5x6 1+2+3");
        assert_eq!(*v.maximum_z(), 9);
    }

    #[test]
    fn containment_and_overlap_follow_area_conventions() {
        let outer = cube(0, 10);
        assert!(outer.contains(&outer));
        assert!(outer.overlaps(&cube(9, 12)));
        assert!(!outer.overlaps(&cube(10, 12)));
        assert!(!cube(3, 3).overlaps(&cube(3, 3)));
        assert!(outer.contains_point(&0, &0, &0));
        assert!(!outer.contains_point(&0, &10, &0));
    }

    #[test]
    fn hollow_out_evenly_shrinks_every_face() {
        assert_eq!(cube(0, 10).hollow_out_evenly(2).unwrap(), cube(2, 8));
        assert_eq!(
            cube(0, 10).hollow_out_evenly(2).unwrap(),
            cube(0, 10).hollow_out(2, 2, 2, 2, 2, 2).unwrap()
        );
    }

    #[test]
    fn splits_partition_their_axis() {
        let (lower, upper) = cube(0, 10).split_along_plane_xy(4).unwrap();
        assert_eq!(lower, Volume::of(0, 10, 0, 10, 4, 10).unwrap());
        assert_eq!(upper, Volume::of(0, 10, 0, 10, 0, 4).unwrap());
        assert_eq!(lower.depth() + upper.depth(), 10);
    }

    #[test]
    fn align_center_and_move() {
        let outer = cube(0, 10);
        let centered = outer.align_center(&cube(0, 4)).unwrap();
        assert_eq!(centered, cube(3, 7));
        assert_eq!(centered.move_to_origin().unwrap(), cube(0, 4));
        let shifted = outer.align_z(&cube(0, 4), Edge::Max, 1).unwrap();
        assert_eq!(shifted, Volume::of(0, 4, 0, 4, 5, 9).unwrap());
    }

    #[test]
    fn fit_between_along_z() {
        let fit = cube(0, 1);
        let near = Volume::of(0, 1, 0, 1, 0, 2).unwrap();
        let far = Volume::of(0, 1, 0, 1, 7, 9).unwrap();
        assert_eq!(fit.fit_between_z(&far, &near), Volume::of(0, 1, 0, 1, 2, 7).unwrap());
    }

    #[test]
    fn could_fit_inside_ignores_position_and_wrapping() {
        let wide = Volume::<i64>::of(i64::MIN, i64::MAX, 0, 1, 0, 1).unwrap();
        let small = Volume::<i64>::of(100, 110, 0, 1, 0, 1).unwrap();
        assert!(!wide.could_fit_inside(&small));
        assert!(small.could_fit_inside(&wide));
        assert!(small.could_fit_inside(&small.move_relative(-500, 7, 3).unwrap()));
        assert_eq!(wide.to_string(), "18446744073709551615x1x1 -9223372036854775808+0+0");
    }

    #[test]
    fn move_relative_overflow() {
        assert!(cube(0, 1).move_relative(0, i32::MAX, 0).unwrap_err().is_overflow());
    }
}
