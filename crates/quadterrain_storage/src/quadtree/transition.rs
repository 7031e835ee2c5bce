use super::{NodeId, NodeKind, QuadTree};

use crate::Heightmap;

use quadterrain_core::prelude::*;

use tracing::{debug_span, trace};

impl QuadTree {
    /// Turns the leaf `id` into an internal node with four leaf children that inherit its height.
    ///
    /// Panics if `id` is not a leaf or covers a single cell.
    pub fn subdivide(&mut self, id: NodeId) -> [NodeId; 4] {
        let node = self.node(id);
        assert!(
            node.is_leaf(),
            "cannot subdivide {} node at {:?}",
            node.kind.name(),
            node.quadrant
        );
        assert!(
            !node.quadrant.is_single_cell(),
            "cannot subdivide single cell node at {:?}",
            node.quadrant
        );
        let quadrant = node.quadrant;
        let height = node.height;

        let children = Corner::ALL.map(|corner| self.insert_child(id, quadrant.child(corner), height));
        self.node_mut(id).kind = NodeKind::Internal(children);

        children
    }

    /// Removes the whole subtree under the internal node `id`, which becomes a leaf with its last computed height.
    ///
    /// Panics if `id` is not internal. The leaf is marked dirty unless every child was a leaf of that same height.
    pub fn merge(&mut self, id: NodeId) {
        let node = self.node(id);
        let children = match &node.kind {
            NodeKind::Internal(children) => *children,
            _ => panic!(
                "cannot merge {} node at {:?}",
                node.kind.name(),
                node.quadrant
            ),
        };
        let height = node.height;
        let lossy = children.iter().any(|child| {
            let child = self.node(*child);
            !child.is_leaf() || child.height != height
        });

        self.clear_to_leaf(id);
        if lossy {
            self.node_mut(id).dirty = true;
        }
    }

    /// Converts a leaf or internal node into a dense node whose heightmap reproduces every cell it covered.
    ///
    /// Panics if `id` is already dense.
    pub fn heightmapify(&mut self, id: NodeId) {
        let node = self.node(id);
        assert!(
            !node.is_dense(),
            "cannot heightmapify node at {:?}, it is already dense",
            node.quadrant
        );
        let _span = debug_span!("heightmapify", quadrant = ?node.quadrant).entered();

        let mut map = Heightmap::fill(node.extent(), node.height);
        if node.is_internal() {
            self.to_heightmap(id, &mut map);
            let nodes_before = self.num_nodes();
            self.clear_to_leaf(id);
            trace!(removed = nodes_before - self.num_nodes(), "flattened subtree");
            // The cells now belong to this node, so its average must be recomputed.
            self.node_mut(id).dirty = true;
        }
        self.node_mut(id).kind = NodeKind::Dense(map);
    }

    /// Converts a dense node back into the smallest subtree that reproduces its heightmap exactly.
    ///
    /// Panics if `id` is not dense.
    pub fn quadtreeify(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        let quadrant = node.quadrant;
        let map = match std::mem::replace(&mut node.kind, NodeKind::Leaf) {
            NodeKind::Dense(map) => map,
            other => {
                node.kind = other;
                panic!(
                    "cannot quadtreeify {} node at {:?}",
                    node.kind.name(),
                    quadrant
                );
            }
        };
        let _span = debug_span!("quadtreeify", ?quadrant).entered();

        self.from_heightmap(id, &map);
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

    use crate::{QuadNode, VisitStatus};

    use pretty_assertions::assert_eq;
    use rand::prelude::*;

    fn tree(size: i32, height: u16) -> QuadTree {
        QuadTree::new(Quadrant::new(PointN([0, 0]), size), height)
    }

    fn all_samples(tree: &QuadTree) -> Vec<Option<u16>> {
        tree.root_quadrant()
            .extent()
            .iter_points()
            .map(|p| tree.sample_int(p))
            .collect()
    }

    #[test]
    fn subdivide_then_merge_keeps_height() {
        let mut tree = tree(32, 41);
        let root = tree.root();

        tree.subdivide(root);
        assert_eq!(tree.num_nodes(), 5);
        for child in tree.node(root).children().unwrap().iter() {
            let child = tree.node(*child);
            assert!(child.is_leaf());
            assert_eq!(child.size(), 16);
            assert_eq!(child.height(), 41);
        }

        tree.merge(root);
        assert_eq!(tree.num_nodes(), 1);
        assert!(tree.node(root).is_leaf());
        assert_eq!(tree.node(root).height(), 41);
    }

    #[test]
    fn merge_frees_nested_subtrees() {
        let mut tree = tree(32, 0);
        let root = tree.root();
        tree.subdivide(root);
        let nw = tree.child(root, Corner::NorthWest).unwrap();
        tree.subdivide(nw);
        let nw_se = tree.child(nw, Corner::SouthEast).unwrap();
        tree.heightmapify(nw_se);
        assert_eq!(tree.num_nodes(), 9);

        tree.merge(root);
        assert_eq!(tree.num_nodes(), 1);
    }

    #[test]
    fn merging_equal_leaves_is_clean() {
        let mut tree = tree(8, 3);
        let root = tree.root();
        tree.subdivide(root);
        tree.cleanup();

        tree.merge(root);
        assert!(!tree.node(root).is_dirty());
        tree.cleanup();
        assert!(!tree.node(root).subtree_changed());
    }

    #[test]
    fn lossy_merge_is_reported_by_cleanup() {
        let mut tree = tree(4, 0);
        let root = tree.root();
        tree.set_height_rect(Extent2i::from_min_and_shape(PointN([2, 2]), PointN([2, 2])), 4);
        tree.cleanup();
        assert_eq!(tree.node(root).height(), 1);
        assert_eq!(tree.sample_int(PointN([0, 0])), Some(0));

        tree.merge(root);
        assert!(tree.node(root).is_dirty());
        tree.cleanup();

        assert_eq!(tree.sample_int(PointN([0, 0])), Some(1));
        assert!(tree.node(root).changed());
        assert!(tree.node(root).subtree_changed());
        let mut changed = Vec::new();
        tree.visit_changed(&mut |id: NodeId, _: &QuadNode| {
            changed.push(id);
            VisitStatus::Continue
        });
        assert_eq!(changed, vec![root]);
    }

    #[test]
    fn merging_over_dense_child_is_dirty() {
        let mut tree = tree(8, 2);
        let root = tree.root();
        let children = tree.subdivide(root);
        tree.heightmapify(children[Corner::SouthWest.index()]);
        tree.cleanup();

        tree.merge(root);
        assert!(tree.node(root).is_dirty());
    }

    #[test]
    #[should_panic(expected = "cannot subdivide internal node")]
    fn subdivide_internal_panics() {
        let mut tree = tree(4, 0);
        let root = tree.root();
        tree.subdivide(root);
        tree.subdivide(root);
    }

    #[test]
    #[should_panic(expected = "cannot subdivide single cell")]
    fn subdivide_single_cell_panics() {
        let mut tree = tree(1, 0);
        let root = tree.root();
        tree.subdivide(root);
    }

    #[test]
    #[should_panic(expected = "cannot merge leaf node")]
    fn merge_leaf_panics() {
        let mut tree = tree(4, 0);
        let root = tree.root();
        tree.merge(root);
    }

    #[test]
    #[should_panic(expected = "cannot quadtreeify leaf node")]
    fn quadtreeify_leaf_panics() {
        let mut tree = tree(4, 0);
        let root = tree.root();
        tree.quadtreeify(root);
    }

    #[test]
    fn heightmapify_leaf_fills_uniformly() {
        let mut tree = tree(8, 5);
        let root = tree.root();
        tree.heightmapify(root);

        let map = tree.node(root).heightmap().unwrap();
        assert_eq!(map.extent(), &tree.root_quadrant().extent());
        assert!(map.values().iter().all(|h| *h == 5));
        assert!(!tree.node(root).is_dirty());
    }

    #[test]
    fn heightmapify_then_quadtreeify_is_lossless() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut tree = tree(64, 0);
        for _ in 0..20 {
            let min = PointN([rng.gen_range(0..64), rng.gen_range(0..64)]);
            let shape = PointN([rng.gen_range(1..24), rng.gen_range(1..24)]);
            tree.set_height_rect(Extent2i::from_min_and_shape(min, shape), rng.gen_range(0..4));
        }
        tree.cleanup();
        let before = all_samples(&tree);

        let root = tree.root();
        tree.heightmapify(root);
        assert_eq!(tree.num_nodes(), 1);
        assert!(tree.node(root).is_dense());
        assert_eq!(all_samples(&tree), before);

        tree.quadtreeify(root);
        assert_eq!(all_samples(&tree), before);
    }

    #[test]
    fn quadtreeify_builds_minimal_tree() {
        let mut tree = tree(4, 0);
        let root = tree.root();
        tree.heightmapify(root);
        tree.quadtreeify(root);
        // Uniform content collapses back into the root leaf.
        assert_eq!(tree.num_nodes(), 1);
        assert!(tree.node(root).is_leaf());

        tree.set_height_rect(Extent2i::from_min_and_shape(PointN([3, 3]), PointN([1, 1])), 1);
        tree.heightmapify(root);
        tree.quadtreeify(root);
        // Root + 4 quadrants + 4 cells in the south-east quadrant.
        assert_eq!(tree.num_nodes(), 9);
        let se = tree.child(root, Corner::SouthEast).unwrap();
        let se_se = tree.child(se, Corner::SouthEast).unwrap();
        assert_eq!(tree.node(se_se).height(), 1);
        for corner in &[Corner::NorthWest, Corner::NorthEast, Corner::SouthWest] {
            let sibling = tree.child(root, *corner).unwrap();
            assert!(tree.node(sibling).is_leaf());
        }
    }
}
