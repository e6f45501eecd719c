use crate::math::{solve_quadratic, Point3, QuadraticRoots};

use super::{Hits, Ray, Surface};

/// An axis-aligned quadric surface.
///
/// `a * (x - x0)^2 + b * (y - y0)^2 + c * (z - z0)^2 + d = 0`
#[derive(Debug, Clone, PartialEq)]
pub struct Quadric {
    center: Point3,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Quadric {
    /// Creates a quadric from its center and coefficients.
    #[must_use]
    pub fn new(center: Point3, a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            center,
            a,
            b,
            c,
            d,
        }
    }

    /// Returns the center `(x0, y0, z0)`.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the quadratic coefficients `(a, b, c)`.
    #[must_use]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Returns the constant term `d`.
    #[must_use]
    pub fn constant(&self) -> f64 {
        self.d
    }
}

impl Surface for Quadric {
    fn implicit(&self, point: &Point3) -> f64 {
        let dp = point - self.center;
        self.a * dp.x * dp.x + self.b * dp.y * dp.y + self.c * dp.z * dp.z + self.d
    }

    fn intersect(&self, ray: &Ray) -> Hits {
        let p = ray.origin();
        let dir = ray.direction();
        let dp = p - self.center;

        // Substitute P(u) = p + u * dir into the implicit equation.
        let qa = self.a * dir.x * dir.x + self.b * dir.y * dir.y + self.c * dir.z * dir.z;
        let qb = 2.0 * self.a * dp.x * dir.x
            + 2.0 * self.b * dp.y * dir.y
            + 2.0 * self.c * dp.z * dir.z;
        let qc = self.implicit(p);

        match solve_quadratic(qa, qb, qc) {
            QuadraticRoots::None => Hits::Miss,
            QuadraticRoots::One(u) => Hits::Tangent(ray.at(u)),
            QuadraticRoots::Two(u0, u1) => Hits::Secant(ray.at(u0), ray.at(u1)),
        }
    }
}
