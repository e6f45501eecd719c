mod cylinder;
mod quadric;

pub use cylinder::Cylinder;
pub use quadric::Quadric;

use crate::math::Point3;

use super::Ray;

/// Intersections of a [`Ray`] with a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hits {
    /// The ray does not meet the surface.
    Miss,
    /// The ray touches the surface at a single point.
    Tangent(Point3),
    /// The ray crosses the surface twice. The first point comes from the `+sqrt` root.
    Secant(Point3, Point3),
}

impl Hits {
    /// Returns the first reported intersection, if any.
    #[must_use]
    pub fn first(&self) -> Option<Point3> {
        match *self {
            Self::Miss => None,
            Self::Tangent(p) | Self::Secant(p, _) => Some(p),
        }
    }

    /// Number of intersection points (0, 1 or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Miss => 0,
            Self::Tangent(_) => 1,
            Self::Secant(..) => 2,
        }
    }

    /// Returns `true` if the ray misses the surface.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Miss)
    }

    /// Returns the intersection points in reported order.
    #[must_use]
    pub fn points(&self) -> Vec<Point3> {
        match *self {
            Self::Miss => vec![],
            Self::Tangent(p) => vec![p],
            Self::Secant(p, q) => vec![p, q],
        }
    }
}

/// An implicit surface that rays can be intersected with.
pub trait Surface {
    /// Evaluates the implicit function at `point`; zero on the surface.
    fn implicit(&self, point: &Point3) -> f64;

    /// Intersects the infinite line through `ray` with the surface.
    fn intersect(&self, ray: &Ray) -> Hits;

    /// Returns `true` if `point` lies on the surface within `tolerance`.
    fn contains(&self, point: &Point3, tolerance: f64) -> bool {
        self.implicit(point).abs() <= tolerance
    }
}
