use crate::{Point2i, PointN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Either the X (west-east) or Y (north-south) axis.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Axis2 {
    X = 0,
    Y = 1,
}

impl Axis2 {
    /// The index for a point's component on this axis.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    #[inline]
    pub fn get_unit_vector(&self) -> Point2i {
        match self {
            Axis2::X => PointN([1, 0]),
            Axis2::Y => PointN([0, 1]),
        }
    }
}

/// An axis together with the sign of travel along it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct SignedAxis2 {
    pub sign: i32,
    pub axis: Axis2,
}

impl SignedAxis2 {
    #[inline]
    pub fn new(sign: i32, axis: Axis2) -> Self {
        Self { sign, axis }
    }

    #[inline]
    pub fn get_vector(&self) -> Point2i {
        self.axis.get_unit_vector() * self.sign
    }

    pub fn from_vector(v: Point2i) -> Option<Self> {
        match v {
            PointN([x, 0]) if x != 0 => Some(SignedAxis2::new(x.signum(), Axis2::X)),
            PointN([0, y]) if y != 0 => Some(SignedAxis2::new(y.signum(), Axis2::Y)),
            _ => None,
        }
    }
}
