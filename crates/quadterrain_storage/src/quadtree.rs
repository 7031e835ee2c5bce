//! The `QuadTree` heightfield.
//!
//! Nodes are stored in a `Slab` arena and addressed by `NodeId`. Children are owned by their parent through the
//! `NodeKind::Internal` payload, and each node keeps a non-owning `parent` id for upward traversal. Removing a node
//! always removes its whole subtree, so an id held by a parent is never stale.
//!
//! # Example
//!
//! ```
//! use quadterrain_core::prelude::*;
//! use quadterrain_storage::prelude::*;
//!
//! let mut tree = QuadTree::new(Quadrant::new(Point2i::ZERO, 16), 0);
//!
//! tree.set_height_rect(Extent2i::from_min_and_shape(PointN([0, 0]), PointN([8, 8])), 12);
//! tree.cleanup();
//!
//! assert_eq!(tree.sample_int(PointN([3, 3])), Some(12));
//! assert_eq!(tree.sample_int(PointN([8, 8])), Some(0));
//! // The root represents the average of its quadrants.
//! assert_eq!(tree.node(tree.root()).height(), 3);
//! assert!(tree.node(tree.root()).subtree_changed());
//! ```

mod cleanup;
mod edit;
mod line;
mod neighbour;
mod query;
mod transfer;
mod transition;
mod visit;

pub use line::LineSample;
pub use visit::{QuadTreeVisitor, VisitStatus};

use crate::{Height, Heightmap};

use quadterrain_core::prelude::*;

use slab::Slab;

/// A handle to a node in a `QuadTree`. Only valid for the tree that issued it, and only until the node is removed by
/// `merge`, `heightmapify` or a rebuild of one of its ancestors.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The representation of a node's region.
#[derive(Clone, Debug)]
pub enum NodeKind {
    /// The representative height is the height of every cell.
    Leaf,
    /// Four children of half size, indexed by `Corner`.
    Internal([NodeId; 4]),
    /// One height per cell. The heightmap extent equals the node's quadrant.
    Dense(Heightmap),
}

impl NodeKind {
    fn name(&self) -> &'static str {
        match self {
            NodeKind::Leaf => "leaf",
            NodeKind::Internal(_) => "internal",
            NodeKind::Dense(_) => "dense",
        }
    }
}

#[derive(Clone, Debug)]
pub struct QuadNode {
    quadrant: Quadrant,
    parent: Option<NodeId>,
    height: Height,
    kind: NodeKind,
    dirty: bool,
    changed: bool,
    child_changed: bool,
}

impl QuadNode {
    fn new(quadrant: Quadrant, parent: Option<NodeId>, height: Height) -> Self {
        Self {
            quadrant,
            parent,
            height,
            kind: NodeKind::Leaf,
            dirty: false,
            changed: false,
            child_changed: false,
        }
    }

    #[inline]
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    #[inline]
    pub fn extent(&self) -> Extent2i {
        self.quadrant.extent()
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.quadrant.edge_length()
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The representative height. For internal and dense nodes this is the average computed by the last `cleanup`.
    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf)
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self.kind, NodeKind::Internal(_))
    }

    #[inline]
    pub fn is_dense(&self) -> bool {
        matches!(self.kind, NodeKind::Dense(_))
    }

    #[inline]
    pub fn children(&self) -> Option<&[NodeId; 4]> {
        match &self.kind {
            NodeKind::Internal(children) => Some(children),
            _ => None,
        }
    }

    #[inline]
    pub fn heightmap(&self) -> Option<&Heightmap> {
        match &self.kind {
            NodeKind::Dense(map) => Some(map),
            _ => None,
        }
    }

    /// `true` if this node's data was modified since the last `cleanup`.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// `true` if the last `cleanup` changed this node's own representative height or cells.
    #[inline]
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// `true` if the last `cleanup` found a change in this node or any of its descendants.
    #[inline]
    pub fn subtree_changed(&self) -> bool {
        self.changed || self.child_changed
    }
}

pub struct QuadTree {
    nodes: Slab<QuadNode>,
    root: NodeId,
}

impl QuadTree {
    /// A tree with a single leaf covering `root` at `initial_height`.
    pub fn new(root: Quadrant, initial_height: Height) -> Self {
        let mut nodes = Slab::new();
        let root = NodeId(nodes.insert(QuadNode::new(root, None, initial_height)));

        Self { nodes, root }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn root_quadrant(&self) -> Quadrant {
        self.node(self.root).quadrant
    }

    /// The number of live nodes, including the root.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&QuadNode> {
        self.nodes.get(id.0)
    }

    /// Panics if `id` does not refer to a live node.
    #[inline]
    pub fn node(&self, id: NodeId) -> &QuadNode {
        match self.nodes.get(id.0) {
            Some(node) => node,
            None => panic!("{:?} does not refer to a live node", id),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut QuadNode {
        match self.nodes.get_mut(id.0) {
            Some(node) => node,
            None => panic!("{:?} does not refer to a live node", id),
        }
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The child of `id` at `corner`, if `id` is internal.
    #[inline]
    pub fn child(&self, id: NodeId, corner: Corner) -> Option<NodeId> {
        self.node(id).children().map(|c| c[corner.index()])
    }

    /// The number of ancestors of `id`. The root has depth 0.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut node = self.node(id);
        while let Some(parent) = node.parent {
            depth += 1;
            node = self.node(parent);
        }

        depth
    }

    /// Which corner of its parent `id` occupies. `None` for the root.
    pub fn quadrant_in_parent(&self, id: NodeId) -> Option<Corner> {
        let node = self.node(id);
        let parent = self.node(node.parent?);

        Some(parent.quadrant.corner_containing(node.quadrant.minimum()))
    }

    fn insert_child(&mut self, parent: NodeId, quadrant: Quadrant, height: Height) -> NodeId {
        NodeId(
            self.nodes
                .insert(QuadNode::new(quadrant, Some(parent), height)),
        )
    }

    /// Removes `id` and all of its descendants from the arena.
    fn remove_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let node = self.nodes.remove(id.0);
            if let NodeKind::Internal(children) = node.kind {
                stack.extend_from_slice(&children);
            }
        }
    }

    /// Removes all descendants of `id` and drops any dense buffer, leaving `id` as a leaf.
    fn clear_to_leaf(&mut self, id: NodeId) {
        let old_kind = std::mem::replace(&mut self.node_mut(id).kind, NodeKind::Leaf);
        if let NodeKind::Internal(children) = old_kind {
            for child in children.iter() {
                self.remove_subtree(*child);
            }
        }
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

    #[test]
    fn new_tree_is_a_single_leaf() {
        let tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 64), 7);
        let root = tree.node(tree.root());

        assert_eq!(tree.num_nodes(), 1);
        assert!(root.is_leaf());
        assert_eq!(root.height(), 7);
        assert_eq!(root.parent(), None);
        assert!(!root.is_dirty());
        assert!(!root.subtree_changed());
        assert_eq!(tree.depth(tree.root()), 0);
        assert_eq!(tree.quadrant_in_parent(tree.root()), None);
    }

    #[test]
    fn children_know_their_corner() {
        let mut tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 8), 0);
        let root = tree.root();
        tree.subdivide(root);

        for corner in Corner::ALL.iter() {
            let child = tree.child(root, *corner).unwrap();
            assert_eq!(tree.quadrant_in_parent(child), Some(*corner));
            assert_eq!(tree.parent(child), Some(root));
            assert_eq!(tree.depth(child), 1);
        }
    }

    #[test]
    fn removed_ids_are_not_live() {
        let mut tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 8), 0);
        let root = tree.root();
        tree.subdivide(root);
        let child = tree.child(root, Corner::SouthWest).unwrap();
        tree.merge(root);

        assert!(tree.get(child).is_none());
        assert_eq!(tree.num_nodes(), 1);
    }

    #[test]
    #[should_panic(expected = "does not refer to a live node")]
    fn stale_id_panics() {
        let mut tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 8), 0);
        let root = tree.root();
        tree.subdivide(root);
        let child = tree.child(root, Corner::NorthEast).unwrap();
        tree.merge(root);

        tree.node(child);
    }
}
