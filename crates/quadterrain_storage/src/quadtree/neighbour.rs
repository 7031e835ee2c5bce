//! Equal-size neighbour search.
//!
//! The search climbs from the node towards the root, recording the corner of each ancestor it passes through, until it
//! reaches an ancestor that contains both the node and its neighbour. Then it descends again along the same corners,
//! mirrored on the axes that were still unresolved at each level.
//!
//! Each axis of a diagonal direction is resolved independently: it stays unresolved while the child we came from lies
//! on the side of its parent facing the direction of travel, and every level that was climbed while an axis was
//! unresolved gets that axis mirrored. This gives exactly one candidate region for every direction, namely the
//! equal-size square whose minimum is `node.minimum + direction * node.size`.

use super::{NodeId, NodeKind, QuadTree};

use quadterrain_core::prelude::*;

impl QuadTree {
    /// The node with the same size as `id` that borders it in `direction`.
    ///
    /// Returns `None` if that region lies outside of the tree, or if it is covered by a single coarser node.
    pub fn neighbour(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        match self.find_neighbour(id, direction)? {
            NeighbourSearch::EqualSize(n) => Some(n),
            NeighbourSearch::Coarser(_) => None,
        }
    }

    /// Like `neighbour`, but when the neighbouring region is covered by a larger leaf or dense node, returns that node.
    pub fn neighbour_or_coarser(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        match self.find_neighbour(id, direction)? {
            NeighbourSearch::EqualSize(n) | NeighbourSearch::Coarser(n) => Some(n),
        }
    }

    fn find_neighbour(&self, id: NodeId, direction: Direction) -> Option<NeighbourSearch> {
        let offset = direction.offset();
        let mut pending_x = offset.x() != 0;
        let mut pending_y = offset.y() != 0;

        let mut path = Vec::with_capacity(16);
        let mut current = id;
        while pending_x || pending_y {
            let corner = self.quadrant_in_parent(current)?;
            let mut mirrored = corner;
            if pending_x {
                mirrored = mirrored.flip_x();
                pending_x = (offset.x() > 0) == (corner.x_bit() == 1);
            }
            if pending_y {
                mirrored = mirrored.flip_y();
                pending_y = (offset.y() > 0) == (corner.y_bit() == 1);
            }
            path.push(mirrored);
            current = self.node(current).parent?;
        }

        for corner in path.iter().rev() {
            match &self.node(current).kind {
                NodeKind::Internal(children) => current = children[corner.index()],
                _ => return Some(NeighbourSearch::Coarser(current)),
            }
        }

        Some(NeighbourSearch::EqualSize(current))
    }
}

enum NeighbourSearch {
    EqualSize(NodeId),
    Coarser(NodeId),
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
