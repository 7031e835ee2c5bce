use quadterrain_core::prelude::*;

/// Grid traversal algorithm by Amanatides and Woo. Visits every pixel intersecting the given 2D ray, in order.
///
/// Times are measured in units of `velocity`, starting from 0 at the `start` position.
pub struct GridRayTraversal2 {
    // The current pixel position.
    current_pixel: Point2i,
    // Either -1, 0 or +1 in each axis. The direction we step along each axis.
    step: Point2i,
    // The amount of time it takes to move 1 unit along each axis. Infinite for axes we don't move along.
    t_delta: Point2f,
    // The next time when each axis will cross a pixel boundary.
    t_max: Point2f,
}

impl GridRayTraversal2 {
    /// Initialize the traversal, beginning at the `start` position and moving along the `velocity` vector.
    #[inline]
    pub fn new(start: Point2f, velocity: Point2f) -> Self {
        let current_pixel = start.in_pixel();
        let step = PointN([axis_step(velocity.x()), axis_step(velocity.y())]);
        let t_delta = Point2f::fill(1.0).vector_div(&velocity.map_components(f32::abs));

        // For each axis, calculate the time delta we need to reach a pixel boundary on that axis. For a positive velocity,
        // this is just the next pixel, but for negative, it's the current pixel. A zero velocity never gets there.
        let bound_offset = PointN([
            (velocity.x() >= 0.0) as i32,
            (velocity.y() >= 0.0) as i32,
        ]);
        let next_bounds = Point2f::from(current_pixel + bound_offset);
        let t_max = (next_bounds - start).vector_div(&velocity);

        Self {
            current_pixel,
            step,
            t_delta,
            t_max,
        }
    }

    /// Move to the next closest pixel along the ray.
    #[inline]
    pub fn step(&mut self) {
        if self.t_max.x() < self.t_max.y() {
            *self.current_pixel.x_mut() += self.step.x();
            *self.t_max.x_mut() += self.t_delta.x();
        } else {
            *self.current_pixel.y_mut() += self.step.y();
            *self.t_max.y_mut() += self.t_delta.y();
        }
    }

    /// The current pixel position. Changes on every call of `step`.
    #[inline]
    pub fn current_pixel(&self) -> Point2i {
        self.current_pixel
    }

    /// The time at which the ray leaves the current pixel.
    #[inline]
    pub fn exit_time(&self) -> f32 {
        self.t_max.x().min(self.t_max.y())
    }
}

#[inline]
fn axis_step(v: f32) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn walk(traversal: &mut GridRayTraversal2, n: usize) -> Vec<Point2i> {
        let mut pixels = Vec::new();
        for _ in 0..n {
            pixels.push(traversal.current_pixel());
            traversal.step();
        }

        pixels
    }

    #[test]
    fn move_along_x_axis() {
        let mut traversal = GridRayTraversal2::new(PointN([0.5, 0.5]), PointN([1.0, 0.0]));

        assert_eq!(traversal.exit_time(), 0.5);
        assert_eq!(
            walk(&mut traversal, 4),
            vec![
                PointN([0, 0]),
                PointN([1, 0]),
                PointN([2, 0]),
                PointN([3, 0]),
            ]
        );
    }

    #[test]
    fn move_along_both_axes_some_negative() {
        let mut traversal = GridRayTraversal2::new(PointN([0.5, 0.5]), PointN([1.0, -2.0]));

        assert_eq!(
            walk(&mut traversal, 6),
            vec![
                PointN([0, 0]),
                PointN([0, -1]),
                PointN([1, -1]),
                PointN([1, -2]),
                PointN([1, -3]),
                PointN([2, -3]),
            ]
        );
    }

    #[test]
    fn exit_times_increase_monotonically() {
        let mut traversal = GridRayTraversal2::new(PointN([3.25, -1.75]), PointN([-0.3, 0.7]));

        let mut last = 0.0;
        for _ in 0..20 {
            let t = traversal.exit_time();
            assert!(t >= last);
            last = t;
            traversal.step();
        }
    }
}
