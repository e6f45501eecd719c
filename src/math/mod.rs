pub mod point;
pub mod quadratic;

pub use point::PointExt;
pub use quadratic::{solve_quadratic, QuadraticRoots};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Integer destination coordinate on the output canvas.
pub type GridPoint = nalgebra::Point2<i64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
