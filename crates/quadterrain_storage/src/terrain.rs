use crate::{Height, Heightmap, LineSample, NodeId, QuadTree};

use quadterrain_core::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest supported `QuadTerrainConfig::max_subdivisions`, giving a 32768 x 32768 terrain.
pub const MAX_SUBDIVISIONS: u8 = 15;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct QuadTerrainConfig {
    /// The terrain is a square with edge length `2 ^ max_subdivisions`.
    pub max_subdivisions: u8,
    pub initial_height: Height,
}

impl Default for QuadTerrainConfig {
    fn default() -> Self {
        Self {
            max_subdivisions: 10,
            initial_height: 0,
        }
    }
}

impl QuadTerrainConfig {
    #[inline]
    pub fn size(&self) -> i32 {
        1 << self.max_subdivisions
    }

    #[inline]
    pub fn extent(&self) -> Extent2i {
        Extent2i::from_min_and_shape(Point2i::ZERO, Point2i::fill(self.size()))
    }
}

/// A square terrain with its minimum at the origin, stored as a `QuadTree`.
///
/// The root-level operations are forwarded here. Node-level work like `heightmapify` goes through `tree_mut`.
pub struct QuadTerrain {
    config: QuadTerrainConfig,
    tree: QuadTree,
}

impl QuadTerrain {
    /// Panics if `config.max_subdivisions` exceeds `MAX_SUBDIVISIONS`.
    pub fn new(config: QuadTerrainConfig) -> Self {
        assert!(
            config.max_subdivisions <= MAX_SUBDIVISIONS,
            "max_subdivisions ({}) exceeds the limit of {}",
            config.max_subdivisions,
            MAX_SUBDIVISIONS
        );

        Self {
            config,
            tree: QuadTree::new(
                Quadrant::new(Point2i::ZERO, config.size()),
                config.initial_height,
            ),
        }
    }

    #[inline]
    pub fn config(&self) -> &QuadTerrainConfig {
        &self.config
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.config.size()
    }

    #[inline]
    pub fn extent(&self) -> Extent2i {
        self.config.extent()
    }

    #[inline]
    pub fn tree(&self) -> &QuadTree {
        &self.tree
    }

    #[inline]
    pub fn tree_mut(&mut self) -> &mut QuadTree {
        &mut self.tree
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn set_height_rect(&mut self, rect: Extent2i, height: Height) {
        self.tree.set_height_rect(rect, height)
    }

    pub fn cleanup(&mut self) {
        self.tree.cleanup()
    }

    pub fn sample_int(&self, p: Point2i) -> Option<Height> {
        self.tree.sample_int(p)
    }

    pub fn sample(&self, p: Point2f) -> Option<Height> {
        self.tree.sample(p)
    }

    /// Searches from the root.
    pub fn find_node_at(&self, p: Point2i, min_size: i32) -> Option<NodeId> {
        self.tree.find_node_at(self.tree.root(), p, min_size)
    }

    pub fn neighbour(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        self.tree.neighbour(id, direction)
    }

    pub fn sample_line(&self, origin: Point2i, direction: Direction, length: i32) -> Vec<LineSample> {
        self.tree.sample_line(origin, direction, length)
    }

    /// Exports the whole terrain.
    pub fn to_heightmap(&self) -> Heightmap {
        let mut map = Heightmap::fill(self.extent(), self.config.initial_height);
        self.tree.to_heightmap(self.tree.root(), &mut map);

        map
    }

    /// Replaces the whole terrain with the cells of `src`, which must contain `self.extent()`.
    pub fn from_heightmap(&mut self, src: &Heightmap) {
        let root = self.tree.root();
        self.tree.from_heightmap(root, src);
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
