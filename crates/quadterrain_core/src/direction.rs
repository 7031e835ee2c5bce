use crate::{Point2i, PointN, SignedAxis2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the eight compass directions. North points towards `-y` and West towards `-x`, matching the row-major layout
/// of heightmaps where row 0 is the northern edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The unit step on the lattice. Each component is -1, 0 or 1.
    #[inline]
    pub fn offset(&self) -> Point2i {
        match self {
            Direction::North => PointN([0, -1]),
            Direction::NorthEast => PointN([1, -1]),
            Direction::East => PointN([1, 0]),
            Direction::SouthEast => PointN([1, 1]),
            Direction::South => PointN([0, 1]),
            Direction::SouthWest => PointN([-1, 1]),
            Direction::West => PointN([-1, 0]),
            Direction::NorthWest => PointN([-1, -1]),
        }
    }

    /// Inverse of `offset`. Components are clamped to their sign first.
    pub fn from_offset(offset: Point2i) -> Option<Self> {
        let dir = match offset.map_components(i32::signum) {
            PointN([0, -1]) => Direction::North,
            PointN([1, -1]) => Direction::NorthEast,
            PointN([1, 0]) => Direction::East,
            PointN([1, 1]) => Direction::SouthEast,
            PointN([0, 1]) => Direction::South,
            PointN([-1, 1]) => Direction::SouthWest,
            PointN([-1, 0]) => Direction::West,
            PointN([-1, -1]) => Direction::NorthWest,
            _ => return None,
        };

        Some(dir)
    }

    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    #[inline]
    pub fn is_cardinal(&self) -> bool {
        self.offset().l1_norm() == 1
    }

    /// The signed axis of travel, only defined for cardinal directions.
    #[inline]
    pub fn signed_axis(&self) -> Option<SignedAxis2> {
        SignedAxis2::from_vector(self.offset())
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
