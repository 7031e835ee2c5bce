//! A dense, row-major buffer of elevations over some `Extent2i`.
//!
//! `Heightmap` is both the payload of a dense quadtree node and the exchange format for bulk import and export of a
//! whole terrain. Its extent need not be aligned with any quadtree node, so every transfer is done in global lattice
//! coordinates and translated by the buffer's own minimum.
//!
//! ```
//! use quadterrain_core::prelude::*;
//! use quadterrain_storage::Heightmap;
//!
//! let extent = Extent2i::from_min_and_shape(PointN([10, 10]), PointN([4, 4]));
//! let mut map = Heightmap::fill(extent, 3);
//! map.fill_extent(&Extent2i::from_min_and_shape(PointN([12, 12]), PointN([8, 8])), 7);
//!
//! assert_eq!(map[PointN([11, 11])], 3);
//! assert_eq!(map[PointN([13, 13])], 7);
//! assert_eq!(map.get(PointN([14, 14])), None);
//! ```

use crate::Height;

use quadterrain_core::prelude::*;

use core::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Heightmap {
    extent: Extent2i,
    values: Vec<Height>,
}

impl Heightmap {
    /// Panics if `values` does not hold exactly one height per point of `extent`.
    pub fn from_vec(extent: Extent2i, values: Vec<Height>) -> Self {
        assert_eq!(
            values.len(),
            extent.num_points(),
            "heightmap buffer of {} values cannot cover {:?}",
            values.len(),
            extent
        );

        Self { extent, values }
    }

    pub fn fill(extent: Extent2i, height: Height) -> Self {
        Self {
            extent,
            values: vec![height; extent.num_points()],
        }
    }

    pub fn fill_with(extent: Extent2i, mut filler: impl FnMut(Point2i) -> Height) -> Self {
        Self {
            extent,
            values: extent.iter_points().map(|p| filler(p)).collect(),
        }
    }

    #[inline]
    pub fn extent(&self) -> &Extent2i {
        &self.extent
    }

    #[inline]
    pub fn values(&self) -> &[Height] {
        &self.values
    }

    #[inline]
    pub fn values_mut(&mut self) -> &mut [Height] {
        &mut self.values
    }

    /// The raw bytes of the buffer, in native endianness, ready for upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.values)
    }

    /// Linear index of the global point `p`. `p` must be contained in the extent.
    #[inline]
    pub fn stride(&self, p: Point2i) -> usize {
        debug_assert!(self.extent.contains(p));
        let local = p - self.extent.minimum;

        (local.y() * self.extent.shape.x() + local.x()) as usize
    }

    #[inline]
    pub fn get(&self, p: Point2i) -> Option<Height> {
        if self.extent.contains(p) {
            Some(self.values[self.stride(p)])
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, p: Point2i) -> Option<&mut Height> {
        if self.extent.contains(p) {
            let stride = self.stride(p);

            Some(&mut self.values[stride])
        } else {
            None
        }
    }

    /// The rows of `extent` (clipped to this buffer), as mutable slices.
    fn for_each_row_mut(&mut self, extent: &Extent2i, mut f: impl FnMut(Point2i, &mut [Height])) {
        let clipped = extent.intersection(&self.extent);
        if clipped.is_empty() {
            return;
        }
        let row_len = clipped.shape.x() as usize;
        for y in clipped.minimum.y()..clipped.least_upper_bound().y() {
            let row_min = PointN([clipped.minimum.x(), y]);
            let start = self.stride(row_min);
            f(row_min, &mut self.values[start..start + row_len]);
        }
    }

    /// Sets every point of `extent` that lies inside this buffer to `height`.
    pub fn fill_extent(&mut self, extent: &Extent2i, height: Height) {
        self.for_each_row_mut(extent, |_, row| {
            for value in row.iter_mut() {
                *value = height;
            }
        });
    }

    /// Copies the points of `extent` from `src` into `self`. Both buffers must contain `extent`.
    pub fn copy_extent_from(&mut self, src: &Heightmap, extent: &Extent2i) {
        assert!(
            extent.is_subset_of(src.extent()) && extent.is_subset_of(&self.extent),
            "copy of {:?} from {:?} into {:?} would access out-of-bounds",
            extent,
            src.extent(),
            self.extent
        );

        let row_len = extent.shape.x() as usize;
        self.for_each_row_mut(extent, |row_min, dst_row| {
            let start = src.stride(row_min);
            dst_row.copy_from_slice(&src.values[start..start + row_len]);
        });
    }

    /// Returns the common height of all points in `extent` (clipped to this buffer), or `None` if they differ.
    pub fn uniform_height_in(&self, extent: &Extent2i) -> Option<Height> {
        let clipped = extent.intersection(&self.extent);
        if clipped.is_empty() {
            return None;
        }

        let first = self[clipped.minimum];
        let row_len = clipped.shape.x() as usize;
        for y in clipped.minimum.y()..clipped.least_upper_bound().y() {
            let start = self.stride(PointN([clipped.minimum.x(), y]));
            if self.values[start..start + row_len].iter().any(|h| *h != first) {
                return None;
            }
        }

        Some(first)
    }

    /// The average of all heights, rounded half up.
    pub fn mean(&self) -> Height {
        let n = self.values.len() as u64;
        if n == 0 {
            return 0;
        }
        let total: u64 = self.values.iter().map(|h| *h as u64).sum();

        ((total + n / 2) / n) as Height
    }
}

impl Index<Point2i> for Heightmap {
    type Output = Height;

    #[inline]
    fn index(&self, p: Point2i) -> &Height {
        assert!(
            self.extent.contains(p),
            "{:?} is outside of heightmap {:?}",
            p,
            self.extent
        );

        &self.values[self.stride(p)]
    }
}

impl IndexMut<Point2i> for Heightmap {
    #[inline]
    fn index_mut(&mut self, p: Point2i) -> &mut Height {
        assert!(
            self.extent.contains(p),
            "{:?} is outside of heightmap {:?}",
            p,
            self.extent
        );
        let stride = self.stride(p);

        &mut self.values[stride]
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
