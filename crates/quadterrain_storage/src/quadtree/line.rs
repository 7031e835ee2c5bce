use super::{NodeKind, QuadTree};

use crate::Height;

use quadterrain_core::prelude::*;

/// A breakpoint of a sampled line: the height at `position`, with heights between consecutive breakpoints following
/// from the node spans they bound.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LineSample {
    pub position: Point2i,
    pub height: Height,
}

impl LineSample {
    #[inline]
    pub fn new(position: Point2i, height: Height) -> Self {
        Self { position, height }
    }
}

impl QuadTree {
    /// Samples `length` lattice positions starting at `origin` and stepping in the cardinal `direction`, returning only
    /// the breakpoints where the covering node or height changes.
    ///
    /// Every span of positions covered by a single leaf contributes its first and last position. Dense nodes contribute
    /// the first and last position of every run of equal cells. The walk stops early when it leaves the tree. A
    /// non-empty line always yields at least two breakpoints, so a single position is reported twice.
    ///
    /// Panics if `direction` is diagonal.
    pub fn sample_line(&self, origin: Point2i, direction: Direction, length: i32) -> Vec<LineSample> {
        let mut samples = Vec::new();
        self.sample_line_into(origin, direction, length, &mut samples);

        samples
    }

    /// Same as `sample_line`, but appends to `samples` so the buffer can be reused across lines.
    pub fn sample_line_into(
        &self,
        origin: Point2i,
        direction: Direction,
        length: i32,
        samples: &mut Vec<LineSample>,
    ) {
        let axis = match direction.signed_axis() {
            Some(axis) => axis,
            None => panic!("cannot sample a line in diagonal direction {:?}", direction),
        };
        let step = axis.get_vector();
        let first_sample = samples.len();

        let mut p = origin;
        let mut remaining = length;
        while remaining > 0 {
            let id = match self.find_node_at(self.root, p, 1) {
                Some(id) => id,
                None => break,
            };
            let node = self.node(id);
            let span = span_to_exit(&node.extent(), p, axis).min(remaining);
            let last = p + step * (span - 1);

            match &node.kind {
                NodeKind::Dense(map) => {
                    let mut run_start = LineSample::new(p, map[p]);
                    let mut run_end = run_start;
                    for i in 1..span {
                        let q = p + step * i;
                        let height = map[q];
                        if height != run_start.height {
                            push_span(samples, run_start, run_end);
                            run_start = LineSample::new(q, height);
                        }
                        run_end = LineSample::new(q, height);
                    }
                    push_span(samples, run_start, run_end);
                }
                _ => push_span(
                    samples,
                    LineSample::new(p, node.height),
                    LineSample::new(last, node.height),
                ),
            }

            p = last + step;
            remaining -= span;
        }

        if samples.len() == first_sample + 1 {
            let only = samples[first_sample];
            samples.push(only);
        }
    }
}

fn push_span(samples: &mut Vec<LineSample>, start: LineSample, end: LineSample) {
    samples.push(start);
    if end.position != start.position {
        samples.push(end);
    }
}

/// The number of positions from `p` (inclusive) to the boundary of `extent` when stepping along `axis`.
fn span_to_exit(extent: &Extent2i, p: Point2i, axis: SignedAxis2) -> i32 {
    let i = axis.axis.index();
    if axis.sign > 0 {
        extent.least_upper_bound().at(i) - p.at(i)
    } else {
        p.at(i) - extent.minimum.at(i) + 1
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

    fn sample(x: i32, y: i32, height: Height) -> LineSample {
        LineSample::new(PointN([x, y]), height)
    }

    #[test]
    fn line_through_spike_breaks_at_every_level() {
        let mut tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 128), 0);
        tree.set_height_rect(extent([63, 63], [1, 1]), 1);
        tree.cleanup();

        assert_eq!(tree.sample_int(PointN([63, 63])), Some(1));
        assert_eq!(tree.sample_int(PointN([63, 64])), Some(0));

        let samples = tree.sample_line(PointN([63, 0]), Direction::South, 65);
        assert_eq!(
            samples,
            vec![
                sample(63, 0, 0),
                sample(63, 31, 0),
                sample(63, 32, 0),
                sample(63, 47, 0),
                sample(63, 48, 0),
                sample(63, 55, 0),
                sample(63, 56, 0),
                sample(63, 59, 0),
                sample(63, 60, 0),
                sample(63, 61, 0),
                sample(63, 62, 0),
                sample(63, 63, 1),
                sample(63, 64, 0),
            ]
        );
    }

    #[test]
    fn line_inside_one_leaf_has_two_breakpoints() {
        let tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 32), 4);

        assert_eq!(
            tree.sample_line(PointN([31, 5]), Direction::West, 32),
            vec![sample(31, 5, 4), sample(0, 5, 4)]
        );
        assert_eq!(
            tree.sample_line(PointN([7, 7]), Direction::North, 1),
            vec![sample(7, 7, 4), sample(7, 7, 4)]
        );
        assert!(tree.sample_line(PointN([7, 7]), Direction::North, 0).is_empty());
    }

    #[test]
    fn every_cardinal_direction_walks_the_same_way() {
        let mut tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 16), 4);
        tree.set_height_rect(extent([8, 8], [1, 1]), 9);

        for dir in Direction::CARDINAL.iter() {
            let end = PointN([8, 8]) + dir.offset() * 4;
            let samples = tree.sample_line(PointN([8, 8]), *dir, 5);
            assert_eq!(samples.first(), Some(&sample(8, 8, 9)), "{:?}", dir);
            assert_eq!(samples.last(), Some(&sample(end.x(), end.y(), 4)), "{:?}", dir);
            assert!(samples[1..].iter().all(|s| s.height == 4), "{:?}", dir);
        }
    }

    #[test]
    fn line_stops_at_tree_boundary() {
        let tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 16), 2);

        assert_eq!(
            tree.sample_line(PointN([3, 10]), Direction::East, 100),
            vec![sample(3, 10, 2), sample(15, 10, 2)]
        );
        assert!(tree.sample_line(PointN([-1, 0]), Direction::East, 4).is_empty());
    }

    #[test]
    fn dense_runs_are_collapsed() {
        let mut tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 8), 0);
        let root = tree.root();
        tree.heightmapify(root);
        tree.set_height_rect(extent([3, 0], [2, 8]), 5);
        tree.set_height_rect(extent([7, 2], [1, 1]), 9);

        assert_eq!(
            tree.sample_line(PointN([0, 2]), Direction::East, 8),
            vec![
                sample(0, 2, 0),
                sample(2, 2, 0),
                sample(3, 2, 5),
                sample(4, 2, 5),
                sample(5, 2, 0),
                sample(6, 2, 0),
                sample(7, 2, 9),
            ]
        );
    }

    #[test]
    fn reused_buffer_is_appended_to() {
        let tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 8), 1);
        let mut samples = vec![sample(-1, -1, 0)];
        tree.sample_line_into(PointN([0, 0]), Direction::South, 1, &mut samples);

        assert_eq!(samples, vec![sample(-1, -1, 0), sample(0, 0, 1), sample(0, 0, 1)]);
    }

    #[test]
    #[should_panic(expected = "diagonal direction")]
    fn diagonal_line_panics() {
        let tree = QuadTree::new(Quadrant::new(PointN([0, 0]), 8), 1);
        tree.sample_line(PointN([0, 0]), Direction::SouthEast, 4);
    }
}
