//! The core data types for addressing a 2D terrain lattice:
//! - `PointN`: a point, most importantly `Point2i` for lattice cells and `Point2f`/`Point3f` for continuous queries
//! - `ExtentN`: a half-open rectangle of lattice cells, most importantly `Extent2i`
//! - `Quadrant`: a power-of-2 square region, the footprint of a single quadtree node
//! - `Corner` and `Direction`: labels for child slots and compass neighbours

pub mod axis;
pub mod direction;
pub mod extent;
pub mod int_math;
pub mod point;
pub mod point2;
pub mod point3;
pub mod quadrant;

pub use axis::{Axis2, SignedAxis2};
pub use direction::Direction;
pub use extent::{bounding_extent, Extent2i, ExtentN};
pub use int_math::{check_power_of_2, is_power_of_2};
pub use point::PointN;
pub use point2::{Point2, Point2f, Point2i};
pub use point3::{Point3, Point3f};
pub use quadrant::{Corner, Quadrant};

pub use num;

pub mod prelude {
    pub use super::{
        Axis2, Corner, Direction, Extent2i, ExtentN, Point2, Point2f, Point2i, Point3, Point3f,
        PointN, Quadrant, SignedAxis2,
    };
}
