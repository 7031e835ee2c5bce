//! An adaptive heightfield for 2D terrain, stored as a quadtree over an integer lattice.
//!
//! This library is organized into several crates:
//! - **core**: lattice points, extents, quadrants and compass directions
//! - **storage**: the `QuadTree` heightfield, dense `Heightmap` buffers and the `QuadTerrain` owner
//! - **search**: ray casting against a heightfield
//!
//! A typical frame edits the terrain in a batch, runs one cleanup pass, and then lets the renderer pick up what changed:
//!
//! ```
//! use quadterrain::prelude::*;
//!
//! let mut terrain = QuadTerrain::new(QuadTerrainConfig { max_subdivisions: 8, initial_height: 0 });
//! terrain.set_height_rect(Extent2i::from_min_and_shape(PointN([10, 20]), PointN([30, 5])), 12);
//! terrain.cleanup();
//!
//! let mut dirty_regions = Vec::new();
//! terrain.tree().visit_changed(&mut |_id: NodeId, node: &QuadNode| {
//!     if node.changed() {
//!         dirty_regions.push(node.quadrant());
//!     }
//!     VisitStatus::Continue
//! });
//! assert!(!dirty_regions.is_empty());
//!
//! // Seams between chunks are stitched from line samples along their shared edge.
//! let seam = terrain.sample_line(PointN([10, 0]), Direction::South, 32);
//! assert_eq!(seam.first().map(|s| s.height), Some(0));
//! ```

pub use quadterrain_core as core;
pub use quadterrain_storage as storage;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::storage::prelude::*;

    #[cfg(feature = "search")]
    pub use super::search::{cast_ray_at_terrain, Ray, TerrainRayImpact};
}

#[cfg(feature = "search")]
pub use quadterrain_search as search;
