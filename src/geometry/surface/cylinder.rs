use crate::error::{ConfigError, Result};
use crate::math::{Point3, TOLERANCE};

use super::{Hits, Quadric, Ray, Surface};

/// An infinite right circular cylinder whose axis is the vertical (z) axis
/// through the origin.
///
/// Stored as the quadric `x^2 + y^2 - r^2 = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    radius: f64,
    quadric: Quadric,
}

impl Cylinder {
    /// Creates a new cylinder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRadius`] if the radius is not a positive finite number.
    pub fn new(radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(ConfigError::InvalidRadius(radius).into());
        }
        Ok(Self {
            radius,
            quadric: Quadric::new(Point3::origin(), 1.0, 1.0, 0.0, -radius * radius),
        })
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the underlying quadric.
    #[must_use]
    pub fn quadric(&self) -> &Quadric {
        &self.quadric
    }
}

impl Surface for Cylinder {
    fn implicit(&self, point: &Point3) -> f64 {
        self.quadric.implicit(point)
    }

    fn intersect(&self, ray: &Ray) -> Hits {
        self.quadric.intersect(ray)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn coefficients_from_radius() {
        let c = Cylinder::new(3.0).unwrap();
        assert_eq!(c.quadric().coefficients(), (1.0, 1.0, 0.0));
        assert_relative_eq!(c.quadric().constant(), -9.0);
        assert_eq!(*c.quadric().center(), Point3::origin());
        assert_relative_eq!(c.radius(), 3.0);
    }

    #[test]
    fn invalid_radius() {
        assert!(Cylinder::new(0.0).is_err());
        assert!(Cylinder::new(-1.0).is_err());
        assert!(Cylinder::new(f64::NAN).is_err());
        assert!(Cylinder::new(f64::INFINITY).is_err());
    }

    #[test]
    fn horizontal_ray_hits_toward_eye_first() {
        let r = 10.0;
        let c = Cylinder::new(r).unwrap();
        let ray = Ray::new(Point3::new(0.0, 0.0, 4.0), Point3::new(100.0, 0.0, 4.0));
        let hits = c.intersect(&ray);
        assert_eq!(hits.len(), 2);
        let first = hits.first().unwrap();
        assert_relative_eq!(first.x, r, epsilon = 1e-12);
        assert_relative_eq!(first.z, 4.0);
        assert_relative_eq!(hits.points()[1].x, -r, epsilon = 1e-12);
    }

    #[test]
    fn hits_satisfy_surface_equation() {
        let c = Cylinder::new(20.0).unwrap();
        let eye = Point3::new(200.0, 0.0, 550.0);
        for y in -5..5 {
            for z in 0..10 {
                let p = Point3::new(0.0, f64::from(y), f64::from(z));
                for hit in c.intersect(&Ray::new(p, eye)).points() {
                    assert!(
                        c.implicit(&hit).abs() <= 1e-9 * 400.0,
                        "hit {hit:?} off the surface"
                    );
                }
            }
        }
    }

    #[test]
    fn near_vertical_ray_hits_both_walls() {
        let c = Cylinder::new(10.0).unwrap();
        let ray = Ray::new(Point3::new(5.0, 0.0, 0.0), Point3::new(5.0 + 1e-6, 0.0, 100.0));
        let Hits::Secant(p, q) = c.intersect(&ray) else {
            panic!("expected two hits");
        };
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-6);
        assert_relative_eq!(q.x, -10.0, epsilon = 1e-6);
        assert!(c.contains(&p, 1e-6));
        assert!(c.contains(&q, 1e-6));
    }

    #[test]
    fn vertical_ray_never_reaches_the_wall() {
        let c = Cylinder::new(5.0).unwrap();
        let ray = Ray::new(Point3::new(1.0, 1.0, 0.0), Point3::new(1.0, 1.0, 10.0));
        assert!(c.intersect(&ray).is_empty());
    }

    #[test]
    fn ray_outside_misses() {
        let c = Cylinder::new(5.0).unwrap();
        let ray = Ray::new(Point3::new(-10.0, 6.0, 0.0), Point3::new(10.0, 6.0, 3.0));
        assert!(c.intersect(&ray).is_empty());
    }
}
