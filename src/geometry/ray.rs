use crate::math::{Point3, Vector3};

/// A line through two points, parametrized as `P(u) = origin + u * (target - origin)`.
///
/// `u = 0` is the origin and `u = 1` the target. The direction is deliberately
/// not normalized so that roots keep their meaning along the segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point3,
    target: Point3,
}

impl Ray {
    /// Creates a ray from `origin` towards `target`.
    #[must_use]
    pub fn new(origin: Point3, target: Point3) -> Self {
        Self { origin, target }
    }

    /// Returns the point at `u = 0`.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the point at `u = 1`.
    #[must_use]
    pub fn target(&self) -> &Point3 {
        &self.target
    }

    /// Returns `target - origin`.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.target - self.origin
    }

    /// Evaluates the ray at parameter `u`.
    #[must_use]
    pub fn at(&self, u: f64) -> Point3 {
        self.origin + self.direction() * u
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_midpoint() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 4.0), Point3::new(100.0, 0.0, 4.0));
        assert_eq!(ray.at(0.0), *ray.origin());
        assert_eq!(ray.at(1.0), *ray.target());
        assert_eq!(ray.at(0.5), Point3::new(50.0, 0.0, 4.0));
        assert_eq!(ray.direction(), Vector3::new(100.0, 0.0, 0.0));
    }
}
