use crate::{check_power_of_2, Extent2i, Point2i, PointN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A square extent whose edge length is a power of 2. Equivalently, this is the region covered by a single quadtree
/// node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Quadrant {
    minimum: Point2i,
    edge_length: i32,
}

impl Quadrant {
    /// Panics if `edge_length` is not a power of 2.
    #[inline]
    pub fn new(minimum: Point2i, edge_length: i32) -> Self {
        check_power_of_2(edge_length);

        Self::new_unchecked(minimum, edge_length)
    }

    #[inline]
    pub fn new_unchecked(minimum: Point2i, edge_length: i32) -> Self {
        Self {
            minimum,
            edge_length,
        }
    }

    #[inline]
    pub fn minimum(&self) -> Point2i {
        self.minimum
    }

    #[inline]
    pub fn edge_length(&self) -> i32 {
        self.edge_length
    }

    #[inline]
    pub fn is_single_cell(&self) -> bool {
        self.edge_length == 1
    }

    /// The exponent P such that `edge_length = 2 ^ P`.
    #[inline]
    pub fn exponent(&self) -> u8 {
        self.edge_length.trailing_zeros() as u8
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        (self.edge_length * self.edge_length) as usize
    }

    #[inline]
    pub fn extent(&self) -> Extent2i {
        Extent2i::from(*self)
    }

    #[inline]
    pub fn contains(&self, p: Point2i) -> bool {
        self.extent().contains(p)
    }

    /// The child quadrant occupying `corner`. Not meaningful for single cells.
    #[inline]
    pub fn child(&self, corner: Corner) -> Quadrant {
        debug_assert!(self.edge_length > 1);
        let half = self.edge_length >> 1;

        Quadrant::new_unchecked(self.minimum + corner.offset(half), half)
    }

    /// The corner whose child quadrant contains `p`. `p` must be contained in `self`.
    #[inline]
    pub fn corner_containing(&self, p: Point2i) -> Corner {
        debug_assert!(self.contains(p));
        let half = self.edge_length >> 1;
        let local = p - self.minimum;

        Corner::from_bits((local.x() >= half) as u8, (local.y() >= half) as u8)
    }
}

impl From<Quadrant> for Extent2i {
    #[inline]
    fn from(quad: Quadrant) -> Self {
        Extent2i::from_min_and_shape(quad.minimum, Point2i::fill(quad.edge_length))
    }
}

/// The slot a child occupies within its parent quadrant.
///
/// The discriminant is the child index: bit 0 selects the eastern half and bit 1 selects the southern half.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Corner {
    NorthWest = 0,
    NorthEast = 1,
    SouthWest = 2,
    SouthEast = 3,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::NorthWest,
        Corner::NorthEast,
        Corner::SouthWest,
        Corner::SouthEast,
    ];

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    #[inline]
    pub fn from_bits(x_bit: u8, y_bit: u8) -> Self {
        Self::from_index(((y_bit << 1) | x_bit) as usize)
    }

    /// 0 for the western half, 1 for the eastern half.
    #[inline]
    pub fn x_bit(&self) -> u8 {
        (*self as u8) & 1
    }

    /// 0 for the northern half, 1 for the southern half.
    #[inline]
    pub fn y_bit(&self) -> u8 {
        (*self as u8) >> 1
    }

    /// Mirror across the north-south line.
    #[inline]
    pub fn flip_x(&self) -> Self {
        Self::from_bits(self.x_bit() ^ 1, self.y_bit())
    }

    /// Mirror across the west-east line.
    #[inline]
    pub fn flip_y(&self) -> Self {
        Self::from_bits(self.x_bit(), self.y_bit() ^ 1)
    }

    /// Offset of this corner's child minimum from the parent minimum, for children of edge length `half`.
    #[inline]
    pub fn offset(&self, half: i32) -> Point2i {
        PointN([self.x_bit() as i32 * half, self.y_bit() as i32 * half])
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
