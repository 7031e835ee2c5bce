use super::{NodeId, NodeKind, QuadTree};

use crate::Height;

use quadterrain_core::prelude::*;

impl QuadTree {
    /// Descends from `start` towards `p` until reaching a node with `size <= min_size` or a node without children.
    ///
    /// Returns `None` if `p` is outside of `start`.
    pub fn find_node_at(&self, start: NodeId, p: Point2i, min_size: i32) -> Option<NodeId> {
        let mut id = start;
        let mut node = self.node(id);
        if !node.quadrant.contains(p) {
            return None;
        }

        while node.size() > min_size {
            match &node.kind {
                NodeKind::Internal(children) => {
                    id = children[node.quadrant.corner_containing(p).index()];
                    node = self.node(id);
                }
                _ => break,
            }
        }

        Some(id)
    }

    /// The height of the cell at `p`, or `None` if `p` is outside of the tree.
    pub fn sample_int(&self, p: Point2i) -> Option<Height> {
        let node = self.node(self.find_node_at(self.root, p, 1)?);

        match &node.kind {
            NodeKind::Dense(map) => map.get(p),
            _ => Some(node.height),
        }
    }

    /// The height of the cell containing the continuous point `p`.
    #[inline]
    pub fn sample(&self, p: Point2f) -> Option<Height> {
        self.sample_int(p.in_pixel())
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    fn extent(min: [i32; 2], shape: [i32; 2]) -> Extent2i {
        Extent2i::from_min_and_shape(PointN(min), PointN(shape))
    }

    #[test]
    fn fresh_leaf_samples_initial_height_everywhere() {
        for exponent in 0..6 {
            let size = 1 << exponent;
            let tree = QuadTree::new(Quadrant::new(PointN([-size, 0]), size), 77);
            for p in tree.root_quadrant().extent().iter_points() {
                assert_eq!(tree.sample_int(p), Some(77));
            }
        }
    }

    #[test]
    fn points_outside_are_none() {
        let tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 8), 1);

        assert_eq!(tree.sample_int(PointN([-1, 0])), None);
        assert_eq!(tree.sample_int(PointN([0, 8])), None);
        assert_eq!(tree.find_node_at(tree.root(), PointN([8, 8]), 1), None);
        assert_eq!(tree.sample(PointN([-0.5, 3.0])), None);
    }

    #[test]
    fn find_node_respects_min_size() {
        let mut tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 32), 0);
        tree.set_height_rect(extent([5, 5], [1, 1]), 1);

        let p = PointN([5, 5]);
        let finest = tree.find_node_at(tree.root(), p, 1).unwrap();
        assert_eq!(tree.node(finest).size(), 1);
        assert!(tree.node(finest).is_leaf());

        let bounded = tree.find_node_at(tree.root(), p, 8).unwrap();
        assert_eq!(tree.node(bounded).size(), 8);
        assert!(tree.node(bounded).is_internal());
        assert!(tree.node(bounded).quadrant().contains(p));

        // Coarse leaves stop the descent before min_size is reached.
        let coarse = tree.find_node_at(tree.root(), PointN([31, 31]), 1).unwrap();
        assert_eq!(tree.node(coarse).size(), 16);
    }

    #[test]
    fn dense_nodes_sample_their_cells() {
        let mut tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 8), 0);
        let root = tree.root();
        tree.heightmapify(root);
        tree.set_height_rect(extent([2, 3], [1, 1]), 5);

        assert_eq!(tree.find_node_at(root, PointN([2, 3]), 1), Some(root));
        assert_eq!(tree.sample_int(PointN([2, 3])), Some(5));
        assert_eq!(tree.sample_int(PointN([3, 2])), Some(0));
        assert_eq!(tree.sample(PointN([2.9, 3.1])), Some(5));
    }
}
