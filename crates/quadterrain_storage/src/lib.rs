//! Adaptive storage for 2D terrain elevation.
//!
//! The core type is the `QuadTree`, a heightfield whose nodes cover power-of-2 squares of the lattice at varying
//! resolution. Every node is in exactly one of three states:
//!   - `NodeKind::Leaf`: the whole square has a single height
//!   - `NodeKind::Internal`: the square is split into four child quadrants
//!   - `NodeKind::Dense`: the square stores one height per cell in a `Heightmap`
//!
//! Mutations like `QuadTree::set_height_rect` only touch the nodes they cover and leave the representative heights of
//! ancestors stale. A single `QuadTree::cleanup` pass after a batch of edits recomputes those averages bottom-up and
//! sets the `changed` and `subtree_changed` flags that renderers consume (see `QuadTree::visit_changed`).
//!
//! For structural queries there is `QuadTree::find_node_at`, equal-size neighbour lookup with `QuadTree::neighbour`,
//! and seam sampling along node edges with `QuadTree::sample_line`.
//!
//! `QuadTerrain` owns a root-aligned `QuadTree` and is the usual entry point.

pub mod heightmap;
pub mod quadtree;
pub mod terrain;

pub use heightmap::Heightmap;
pub use quadtree::{
    LineSample, NodeId, NodeKind, QuadNode, QuadTree, QuadTreeVisitor, VisitStatus,
};
pub use terrain::{QuadTerrain, QuadTerrainConfig, MAX_SUBDIVISIONS};

/// Quantized elevation of a single lattice cell, or the representative elevation of a node.
pub type Height = u16;

pub mod prelude {
    pub use super::{
        Height, Heightmap, LineSample, NodeId, NodeKind, QuadNode, QuadTerrain,
        QuadTerrainConfig, QuadTree, QuadTreeVisitor, VisitStatus,
    };
}
