use super::{NodeId, QuadNode, QuadTree};

pub trait QuadTreeVisitor {
    fn visit_node(&mut self, id: NodeId, node: &QuadNode) -> VisitStatus;
}

impl<F> QuadTreeVisitor for F
where
    F: FnMut(NodeId, &QuadNode) -> VisitStatus,
{
    #[inline]
    fn visit_node(&mut self, id: NodeId, node: &QuadNode) -> VisitStatus {
        (self)(id, node)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisitStatus {
    /// Continue traversing this branch.
    Continue,
    /// Stop traversing this branch.
    Stop,
    /// Stop traversing the entire tree. No further nodes will be visited.
    ExitEarly,
}

impl QuadTree {
    /// Visit `start` and all of its descendants in preorder, children in `Corner` order.
    pub fn visit(&self, start: NodeId, visitor: &mut impl QuadTreeVisitor) -> VisitStatus {
        let node = self.node(start);
        match visitor.visit_node(start, node) {
            VisitStatus::ExitEarly => return VisitStatus::ExitEarly,
            VisitStatus::Stop => return VisitStatus::Continue,
            VisitStatus::Continue => {}
        }

        if let Some(children) = node.children() {
            for child in children.iter() {
                if self.visit(*child, visitor) == VisitStatus::ExitEarly {
                    return VisitStatus::ExitEarly;
                }
            }
        }

        VisitStatus::Continue
    }

    /// Same as `visit` from the root, but skips every subtree in which the last `cleanup` found no change.
    ///
    /// This is the set of regions a renderer has to synchronize after a batch of edits.
    pub fn visit_changed(&self, visitor: &mut impl QuadTreeVisitor) -> VisitStatus {
        self.visit(self.root, &mut |id: NodeId, node: &QuadNode| {
            if !node.subtree_changed() {
                return VisitStatus::Stop;
            }

            visitor.visit_node(id, node)
        })
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

    use quadterrain_core::prelude::*;

    use pretty_assertions::assert_eq;

    fn extent(min: [i32; 2], shape: [i32; 2]) -> Extent2i {
        Extent2i::from_min_and_shape(PointN(min), PointN(shape))
    }

    #[test]
    fn preorder_visits_parents_first() {
        let mut tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 4), 0);
        tree.set_height_rect(extent([0, 0], [1, 1]), 1);

        let mut visited = Vec::new();
        tree.visit(tree.root(), &mut |_id: NodeId, node: &QuadNode| {
            visited.push((node.quadrant().minimum(), node.size()));
            VisitStatus::Continue
        });

        assert_eq!(
            visited,
            vec![
                (PointN([0, 0]), 4),
                (PointN([0, 0]), 2),
                (PointN([0, 0]), 1),
                (PointN([1, 0]), 1),
                (PointN([0, 1]), 1),
                (PointN([1, 1]), 1),
                (PointN([2, 0]), 2),
                (PointN([0, 2]), 2),
                (PointN([2, 2]), 2),
            ]
        );
    }

    #[test]
    fn stop_prunes_and_exit_early_halts() {
        let mut tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 4), 0);
        tree.set_height_rect(extent([0, 0], [1, 1]), 1);

        let mut count = 0;
        tree.visit(tree.root(), &mut |_id: NodeId, node: &QuadNode| {
            count += 1;
            if node.size() == 2 {
                VisitStatus::Stop
            } else {
                VisitStatus::Continue
            }
        });
        assert_eq!(count, 5);

        let mut count = 0;
        let status = tree.visit(tree.root(), &mut |_id: NodeId, _node: &QuadNode| {
            count += 1;
            if count == 3 {
                VisitStatus::ExitEarly
            } else {
                VisitStatus::Continue
            }
        });
        assert_eq!(status, VisitStatus::ExitEarly);
        assert_eq!(count, 3);
    }

    #[test]
    fn visit_changed_reports_edited_region_only() {
        let mut tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 32), 0);
        tree.set_height_rect(extent([0, 0], [32, 32]), 3);
        tree.set_height_rect(extent([20, 20], [1, 1]), 7);
        tree.cleanup();

        // Only the path down to the spike is edited in the second batch.
        tree.set_height_rect(extent([20, 20], [1, 1]), 8);
        tree.cleanup();

        let mut changed = Vec::new();
        tree.visit_changed(&mut |_id: NodeId, node: &QuadNode| {
            if node.changed() {
                changed.push(node.quadrant());
            }
            VisitStatus::Continue
        });

        assert_eq!(changed, vec![Quadrant::new(PointN([20, 20]), 1)]);
    }
}
