use crate::{Point2i, PointN};

use core::ops::{Add, Sub};
use itertools::{iproduct, Product};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangle of lattice cells. This is the `TerrainRect` used for every rectangular query and mutation.
pub type Extent2i = ExtentN<[i32; 2]>;

/// An extent is mathematically the Cartesian product of a half-closed interval `[a, b)` in each dimension. You can also
/// just think of it as an axis-aligned box with some shape and a minimum point.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ExtentN<N> {
    /// The least point contained in the extent.
    pub minimum: PointN<N>,
    /// The length of each dimension.
    pub shape: PointN<N>,
}

impl<N> ExtentN<N> {
    /// The default representation of an extent as the minimum point and shape.
    #[inline]
    pub fn from_min_and_shape(minimum: PointN<N>, shape: PointN<N>) -> Self {
        Self { minimum, shape }
    }
}

impl Extent2i {
    /// An alternative representation of an extent as the minimum point and least upper bound.
    #[inline]
    pub fn from_min_and_lub(minimum: Point2i, least_upper_bound: Point2i) -> Self {
        // We want to avoid negative shape components.
        let shape = (least_upper_bound - minimum).join(&Point2i::ZERO);

        Self { minimum, shape }
    }

    /// An alternative representation of an integer extent as the minimum point and maximum point.
    #[inline]
    pub fn from_min_and_max(minimum: Point2i, max: Point2i) -> Self {
        Self::from_min_and_lub(minimum, max + Point2i::ONES)
    }

    /// Constructs the unique extent with both `p1` and `p2` as corners.
    #[inline]
    pub fn from_corners(p1: Point2i, p2: Point2i) -> Self {
        Self::from_min_and_max(p1.meet(&p2), p1.join(&p2))
    }

    /// The number of points contained in the extent.
    #[inline]
    pub fn num_points(&self) -> usize {
        (self.shape.x() * self.shape.y()) as usize
    }

    /// Returns `true` iff the number of points in the extent is 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shape.x() <= 0 || self.shape.y() <= 0
    }

    /// The least point `p` for which all points `q` in the extent satisfy `q < p`.
    #[inline]
    pub fn least_upper_bound(&self) -> Point2i {
        self.minimum + self.shape
    }

    /// The unique greatest point in the extent.
    #[inline]
    pub fn max(&self) -> Point2i {
        self.least_upper_bound() - Point2i::ONES
    }

    /// Returns `true` iff the point `p` is contained in this extent.
    #[inline]
    pub fn contains(&self, p: Point2i) -> bool {
        self.minimum <= p && p < self.least_upper_bound()
    }

    /// Returns the extent containing only the points in both `self` and `other`.
    #[inline]
    pub fn intersection(&self, other: &Self) -> Self {
        let minimum = self.minimum.join(&other.minimum);
        let lub = self.least_upper_bound().meet(&other.least_upper_bound());

        Self::from_min_and_lub(minimum, lub)
    }

    /// Returns `true` iff the intersection of `self` and `other` is equal to `self`.
    #[inline]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.is_empty() || self.intersection(other).eq(self)
    }

    /// Translate the extent such that it has `new_min` as its new minimum.
    #[inline]
    pub fn with_minimum(&self, new_min: Point2i) -> Self {
        Self::from_min_and_shape(new_min, self.shape)
    }

    /// Iterate over all points in the extent, in row-major order.
    /// ```
    /// # use quadterrain_core::prelude::*;
    /// #
    /// let extent = Extent2i::from_min_and_shape(PointN([0, 0]), PointN([2, 2]));
    /// let points = extent.iter_points().collect::<Vec<_>>();
    /// assert_eq!(points, vec![PointN([0, 0]), PointN([1, 0]), PointN([0, 1]), PointN([1, 1])]);
    /// ```
    #[inline]
    pub fn iter_points(&self) -> Extent2PointIter {
        let lub = self.least_upper_bound();

        Extent2PointIter {
            // iproduct is opposite of row-major order.
            product_iter: iproduct!(self.minimum.y()..lub.y(), self.minimum.x()..lub.x()),
        }
    }
}

/// An iterator over all points in an `Extent2i`.
pub struct Extent2PointIter {
    product_iter: Product<Range<i32>, Range<i32>>,
}

impl Iterator for Extent2PointIter {
    type Item = Point2i;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.product_iter.next().map(|(y, x)| PointN([x, y]))
    }
}

impl Add<Point2i> for Extent2i {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Point2i) -> Self::Output {
        Self::from_min_and_shape(self.minimum + rhs, self.shape)
    }
}

impl Sub<Point2i> for Extent2i {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Point2i) -> Self::Output {
        Self::from_min_and_shape(self.minimum - rhs, self.shape)
    }
}

/// Returns the smallest extent containing all of the given points.
#[inline]
pub fn bounding_extent<I>(mut points: I) -> Extent2i
where
    I: Iterator<Item = Point2i>,
{
    let first_point = points
        .next()
        .expect("Cannot find bounding extent of empty set of points");

    let mut min_point = first_point;
    let mut max_point = first_point;
    for p in points {
        min_point = min_point.meet(&p);
        max_point = max_point.join(&p);
    }

    Extent2i::from_min_and_max(min_point, max_point)
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn empty_intersection_is_empty() {
        let e1 = Extent2i::from_min_and_max(PointN([0; 2]), PointN([1; 2]));
        let e2 = Extent2i::from_min_and_max(PointN([3; 2]), PointN([4; 2]));

        // A naive implementation might say the shape is [-1, -1].
        assert_eq!(e1.intersection(&e2).shape, PointN([0; 2]));
        assert!(e1.intersection(&e2).is_empty());
    }

    #[test]
    fn touching_extents_do_not_intersect() {
        let west = Extent2i::from_min_and_shape(PointN([0, 0]), PointN([4, 4]));
        let east = Extent2i::from_min_and_shape(PointN([4, 0]), PointN([4, 4]));

        assert!(west.intersection(&east).is_empty());
        assert!(!west.contains(PointN([4, 0])));
        assert!(east.contains(PointN([4, 0])));
    }

    #[test]
    fn subset_and_corners() {
        let outer = Extent2i::from_min_and_shape(PointN([0, 0]), PointN([8, 8]));
        let inner = Extent2i::from_corners(PointN([6, 2]), PointN([1, 5]));

        assert_eq!(inner, Extent2i::from_min_and_shape(PointN([1, 2]), PointN([6, 4])));
        assert!(inner.is_subset_of(&outer));
        assert!(!outer.is_subset_of(&inner));
        assert_eq!(inner.max(), PointN([6, 5]));
    }

    #[test]
    fn bounding_extent_of_scattered_points() {
        let extent = bounding_extent(vec![PointN([3, -1]), PointN([0, 2]), PointN([1, 1])].into_iter());

        assert_eq!(extent, Extent2i::from_min_and_max(PointN([0, -1]), PointN([3, 2])));
        assert_eq!(extent.num_points(), 16);
    }
}
