use core::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on the terrain lattice (or in the continuous space above it), which is just a primitive array of type `N`.
/// Points are most conveniently constructed as:
///
/// ```
/// use quadterrain_core::PointN;
///
/// let cell = PointN([1, 2]); // Point2i
/// let sample = PointN([1.5, 2.5]); // Point2f
/// let ray_start = PointN([1.5, 2.5, 100.0]); // Point3f
/// ```
///
/// Points support the basic linear algebraic operations: addition, subtraction and scalar multiplication.
///
/// ```
/// use quadterrain_core::PointN;
///
/// let p1 = PointN([1, 2]);
/// let p2 = PointN([3, 4]);
///
/// assert_eq!(p1 + p2, PointN([4, 6]));
/// assert_eq!(p1 - p2, PointN([-2, -2]));
/// assert_eq!(p1 * 2, PointN([2, 4]));
/// ```
///
/// Integer points also carry a partial order where A < B iff every component of A is less than the matching component of
/// B. This is what makes extent containment checks read naturally:
///
/// ```
/// use quadterrain_core::PointN;
///
/// let min = PointN([0, 0]);
/// let least_upper_bound = PointN([4, 4]);
///
/// let p = PointN([3, 0]);
/// assert!(min <= p && p < least_upper_bound);
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PointN<N>(pub N);

impl<N> AddAssign for PointN<N>
where
    N: Copy,
    PointN<N>: Add<Output = Self>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<N> SubAssign for PointN<N>
where
    N: Copy,
    PointN<N>: Sub<Output = Self>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
