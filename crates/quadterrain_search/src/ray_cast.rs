use crate::GridRayTraversal2;

use quadterrain_core::prelude::*;
use quadterrain_storage::{Height, QuadTree};

use tracing::trace;

/// A ray in terrain space: `x` and `y` in lattice units, `z` in height units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub start: Point3f,
    pub velocity: Point3f,
}

impl Ray {
    #[inline]
    pub fn new(start: Point3f, velocity: Point3f) -> Self {
        Self { start, velocity }
    }

    #[inline]
    pub fn at(&self, toi: f32) -> Point3f {
        self.start + self.velocity * toi
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainRayImpact {
    /// The cell whose column was hit.
    pub pixel: Point2i,
    /// The height of that cell.
    pub height: Height,
    /// Time of impact, in units of the ray's velocity.
    pub toi: f32,
}

/// Finds the first cell column hit by `ray` within `max_toi`, treating each cell of `tree` as a solid column from
/// `-inf` up to its height. A ray that starts inside a column hits it at time 0.
pub fn cast_ray_at_terrain(tree: &QuadTree, ray: &Ray, max_toi: f32) -> Option<TerrainRayImpact> {
    let bounds = tree.root_quadrant().extent();
    let start = ray.start.xy();
    let velocity = ray.velocity.xy();

    // Clip the ray to the terrain's footprint.
    let mut t_enter = 0.0f32;
    let mut t_exit = max_toi;
    for i in 0..2 {
        let s = start.at(i);
        let v = velocity.at(i);
        let min = bounds.minimum.at(i) as f32;
        let lub = bounds.least_upper_bound().at(i) as f32;
        if v == 0.0 {
            if s < min || s >= lub {
                return None;
            }
        } else {
            let t0 = (min - s) / v;
            let t1 = (lub - s) / v;
            t_enter = t_enter.max(t0.min(t1));
            t_exit = t_exit.min(t0.max(t1));
        }
    }
    if t_enter > t_exit {
        return None;
    }
    trace!(t_enter, t_exit, "ray overlaps terrain");

    if velocity == Point2f::fill(0.0) {
        let pixel = start.in_pixel();
        return tree
            .sample_int(pixel)
            .and_then(|height| column_impact(ray, pixel, height, t_enter, t_exit));
    }

    let mut traversal = GridRayTraversal2::new(ray.at(t_enter).xy(), velocity);
    let mut cell_enter = t_enter;
    loop {
        let pixel = traversal.current_pixel();
        let cell_exit = (t_enter + traversal.exit_time()).min(t_exit);
        match tree.sample_int(pixel) {
            Some(height) => {
                if let Some(impact) = column_impact(ray, pixel, height, cell_enter, cell_exit) {
                    return Some(impact);
                }
            }
            // Rounding can put the clipped entry point just outside of the terrain.
            None if cell_enter > t_enter => return None,
            None => {}
        }
        if cell_exit >= t_exit {
            return None;
        }
        cell_enter = cell_exit;
        traversal.step();
    }
}

/// Tests the part of the ray inside the column of `pixel`, between times `t0` and `t1`.
fn column_impact(ray: &Ray, pixel: Point2i, height: Height, t0: f32, t1: f32) -> Option<TerrainRayImpact> {
    let top = height as f32;
    let z0 = ray.at(t0).z();
    let z1 = ray.at(t1).z();

    let toi = if z0 <= top {
        t0
    } else if z1 <= top {
        // Only reachable while descending.
        ((top - ray.start.z()) / ray.velocity.z()).max(t0).min(t1)
    } else {
        return None;
    };

    Some(TerrainRayImpact { pixel, height, toi })
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
