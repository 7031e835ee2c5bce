use super::{NodeId, NodeKind, QuadTree};

use crate::{Height, Heightmap};

use quadterrain_core::prelude::*;

impl QuadTree {
    /// Sets every cell of `rect` to `height`.
    ///
    /// Leaves that are only partially covered get subdivided, leaves that are fully covered just take the new height,
    /// and dense nodes are written cell by cell. Parts of `rect` outside of the tree are ignored. Representative heights
    /// of ancestors are not updated until `cleanup`.
    pub fn set_height_rect(&mut self, rect: Extent2i, height: Height) {
        let root = self.root;
        self.set_height_rect_in(root, rect, height);
    }

    fn set_height_rect_in(&mut self, id: NodeId, rect: Extent2i, height: Height) {
        let node = self.node_mut(id);
        let node_extent = node.extent();
        let rect = rect.intersection(&node_extent);
        if rect.is_empty() {
            return;
        }

        let children = match &mut node.kind {
            NodeKind::Leaf if rect == node_extent => {
                if node.height != height {
                    node.height = height;
                    node.dirty = true;
                }
                return;
            }
            NodeKind::Dense(map) => {
                map.fill_extent(&rect, height);
                node.dirty = true;
                return;
            }
            NodeKind::Internal(children) => Some(*children),
            NodeKind::Leaf => None,
        };
        let children = match children {
            Some(children) => children,
            None => self.subdivide(id),
        };

        for child in children.iter() {
            self.set_height_rect_in(*child, rect, height);
        }
    }

    /// Direct access to the cells of a dense node. Call `mark_heightmap_dirty` after writing so the next `cleanup`
    /// picks up the change.
    pub fn heightmap_mut(&mut self, id: NodeId) -> Option<&mut Heightmap> {
        match &mut self.node_mut(id).kind {
            NodeKind::Dense(map) => Some(map),
            _ => None,
        }
    }

    /// Flags a dense node whose cells were written through `heightmap_mut`.
    ///
    /// Panics if `id` is not dense.
    pub fn mark_heightmap_dirty(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        assert!(
            node.is_dense(),
            "{} node at {:?} has no heightmap",
            node.kind.name(),
            node.quadrant
        );
        node.dirty = true;
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
