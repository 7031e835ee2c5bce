use crate::PointN;

use core::ops::{Add, Mul, Neg, Sub};
use num::Integer;
use std::cmp::{max, min, Ordering};

/// A 2-dimensional point with scalar type `T`.
pub type Point2<T> = PointN<[T; 2]>;
/// A lattice cell of the terrain.
pub type Point2i = PointN<[i32; 2]>;
/// A continuous position over the terrain, in the same units as the lattice.
pub type Point2f = PointN<[f32; 2]>;

impl<T> Point2<T> {
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.0[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.0[1]
    }
}

impl<T> Point2<T>
where
    T: Copy,
{
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn fill(value: T) -> Self {
        PointN([value; 2])
    }

    /// Returns the component specified by index, i.e. X = 0, Y = 1.
    #[inline]
    pub fn at(&self, component_index: usize) -> T {
        self.0[component_index]
    }

    #[inline]
    pub fn map_components(&self, f: impl Fn(T) -> T) -> Self {
        PointN([f(self.x()), f(self.y())])
    }
}

impl Point2i {
    pub const ZERO: Self = PointN([0; 2]);
    pub const ONES: Self = PointN([1; 2]);
    pub const MIN: Self = PointN([i32::MIN; 2]);
    pub const MAX: Self = PointN([i32::MAX; 2]);

    /// The component-wise maximum.
    #[inline]
    pub fn join(&self, other: &Self) -> Self {
        PointN([max(self.x(), other.x()), max(self.y(), other.y())])
    }

    /// The component-wise minimum.
    #[inline]
    pub fn meet(&self, other: &Self) -> Self {
        PointN([min(self.x(), other.x()), min(self.y(), other.y())])
    }

    #[inline]
    pub fn scalar_div_floor(&self, rhs: i32) -> Self {
        PointN([self.x().div_floor(&rhs), self.y().div_floor(&rhs)])
    }

    #[inline]
    pub fn l1_norm(&self) -> i32 {
        self.x().abs() + self.y().abs()
    }

    /// The 4 offsets to a pixel's edge-sharing neighbours.
    pub fn von_neumann_offsets() -> [Self; 4] {
        [
            PointN([-1, 0]),
            PointN([1, 0]),
            PointN([0, -1]),
            PointN([0, 1]),
        ]
    }
}

impl Point2f {
    #[inline]
    pub fn floor(&self) -> Self {
        self.map_components(|c| c.floor())
    }

    #[inline]
    pub fn signum(&self) -> Self {
        self.map_components(|c| c.signum())
    }

    #[inline]
    pub fn as_2i(&self) -> Point2i {
        PointN([self.x() as i32, self.y() as i32])
    }

    /// The lattice cell containing this point.
    #[inline]
    pub fn in_pixel(&self) -> Point2i {
        self.floor().as_2i()
    }

    /// Component-wise division.
    #[inline]
    pub fn vector_div(&self, rhs: &Self) -> Self {
        PointN([self.x() / rhs.x(), self.y() / rhs.y()])
    }
}

impl From<Point2i> for Point2f {
    #[inline]
    fn from(p: Point2i) -> Self {
        PointN([p.x() as f32, p.y() as f32])
    }
}

impl<T> Add for Point2<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        PointN([self.x() + rhs.x(), self.y() + rhs.y()])
    }
}

impl<T> Sub for Point2<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        PointN([self.x() - rhs.x(), self.y() - rhs.y()])
    }
}

impl<T> Mul<T> for Point2<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        PointN([self.x() * rhs, self.y() * rhs])
    }
}

impl<T> Neg for Point2<T>
where
    T: Copy + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        PointN([-self.x(), -self.y()])
    }
}

// This particular partial order allows us to say that an `Extent2i` e contains a `Point2i` p iff p is GEQ the minimum of e
// and p is LT the least upper bound of e.
impl<T> PartialOrd for Point2<T>
where
    T: Copy + PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self < other {
            Some(Ordering::Less)
        } else if self > other {
            Some(Ordering::Greater)
        } else if self.x() == other.x() && self.y() == other.y() {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.x() < other.x() && self.y() < other.y()
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.x() > other.x() && self.y() > other.y()
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.x() <= other.x() && self.y() <= other.y()
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.x() >= other.x() && self.y() >= other.y()
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
