use super::{NodeId, NodeKind, QuadTree};

use crate::Height;

use tracing::{debug_span, trace};

impl QuadTree {
    /// Recomputes representative heights bottom-up after a batch of edits and publishes the change flags.
    ///
    /// An internal node takes the rounded average of its children when any child subtree changed. A dirty dense node
    /// takes the rounded average of its cells. Afterwards every node's `changed` flag says whether its own data
    /// changed in this batch, `subtree_changed` says whether anything under it did, and all dirty flags are clear.
    pub fn cleanup(&mut self) {
        let _span = debug_span!("cleanup").entered();

        let root = self.root;
        let changed = self.cleanup_node(root);
        trace!(changed, num_nodes = self.num_nodes(), "cleanup done");
    }

    /// Returns the node's `subtree_changed` flag.
    fn cleanup_node(&mut self, id: NodeId) -> bool {
        let mut child_changed = false;
        if let Some(children) = self.node(id).children().copied() {
            let mut sum = 0u32;
            for child in children.iter() {
                child_changed |= self.cleanup_node(*child);
                sum += self.node(*child).height as u32;
            }
            if child_changed {
                let average = ((sum + 2) / 4) as Height;
                let node = self.node_mut(id);
                if node.height != average {
                    node.height = average;
                    node.dirty = true;
                }
            }
        }

        let node = self.node_mut(id);
        if node.dirty {
            if let NodeKind::Dense(map) = &node.kind {
                node.height = map.mean();
            }
        }
        node.changed = node.dirty;
        node.dirty = false;
        node.child_changed = child_changed;

        node.subtree_changed()
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
