use super::{NodeId, NodeKind, QuadTree};

use crate::Heightmap;

use quadterrain_core::prelude::*;

use tracing::{debug_span, trace};

impl QuadTree {
    /// Writes every cell covered by `id` into `dst`, which may have any minimum as long as it contains the node's
    /// region. Cells of `dst` outside the node are untouched.
    ///
    /// Panics if the node's region is not contained in `dst`.
    pub fn to_heightmap(&self, id: NodeId, dst: &mut Heightmap) {
        let node = self.node(id);
        assert!(
            node.extent().is_subset_of(dst.extent()),
            "heightmap {:?} is too small to hold node at {:?}",
            dst.extent(),
            node.quadrant
        );
        let _span = debug_span!("to_heightmap", quadrant = ?node.quadrant).entered();

        self.write_subtree(id, dst);
    }

    fn write_subtree(&self, id: NodeId, dst: &mut Heightmap) {
        let node = self.node(id);
        match &node.kind {
            NodeKind::Leaf => dst.fill_extent(&node.extent(), node.height),
            NodeKind::Dense(map) => dst.copy_extent_from(map, &node.extent()),
            NodeKind::Internal(children) => {
                for child in children.iter() {
                    self.write_subtree(*child, dst);
                }
            }
        }
    }

    /// Replaces the subtree at `id` with the smallest subtree reproducing the cells of `src` in the node's region.
    ///
    /// Every rebuilt leaf is marked dirty, so the next `cleanup` reports the whole region as changed.
    ///
    /// Panics if the node's region is not contained in `src`.
    pub fn from_heightmap(&mut self, id: NodeId, src: &Heightmap) {
        let quadrant = self.node(id).quadrant;
        assert!(
            quadrant.extent().is_subset_of(src.extent()),
            "heightmap {:?} is too small to fill node at {:?}",
            src.extent(),
            quadrant
        );
        let _span = debug_span!("from_heightmap", ?quadrant).entered();

        self.clear_to_leaf(id);
        let nodes_before = self.num_nodes();
        self.rebuild_leaf(id, src);
        trace!(added = self.num_nodes() - nodes_before, "rebuilt subtree");
    }

    /// `id` must be a leaf.
    fn rebuild_leaf(&mut self, id: NodeId, src: &Heightmap) {
        let quadrant = self.node(id).quadrant;

        // A single cell is always uniform, so the recursion ends there.
        if let Some(height) = src.uniform_height_in(&quadrant.extent()) {
            let node = self.node_mut(id);
            node.height = height;
            node.dirty = true;
            return;
        }

        for child in self.subdivide(id).iter() {
            self.rebuild_leaf(*child, src);
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
