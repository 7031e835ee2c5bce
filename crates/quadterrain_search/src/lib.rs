//! Searches over quadtree heightfields.
//!
//! The main entry point is `cast_ray_at_terrain`, which treats every lattice cell as a column rising to its height and
//! finds the first column hit by a ray. Cells are visited in ray order with a 2D `GridRayTraversal2`.

pub mod grid_ray_traversal;
pub mod ray_cast;

pub use grid_ray_traversal::GridRayTraversal2;
pub use ray_cast::{cast_ray_at_terrain, Ray, TerrainRayImpact};
