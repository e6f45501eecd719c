//! Mirror reflection off a surface onto the ground plane `z = 0`.

mod mirror;

pub use mirror::MirrorReflector;

use crate::geometry::{Cylinder, Ray, Surface};
use crate::math::Point3;

/// A strategy mapping a source point, seen from an eye, to its reflection on the
/// ground plane.
pub trait Reflector {
    /// Returns the ground-plane point (`z = 0`) where the eye sees `source`
    /// reflected in `surface`, or `None` if no such point exists.
    fn reflect(&self, surface: &dyn Surface, source: &Point3, eye: &Point3) -> Option<Point3>;
}

/// Returns the 0, 1 or 2 intersections of the line from `source` to `eye` with
/// the cylinder, `+sqrt` root first.
#[must_use]
pub fn intersections(cylinder: &Cylinder, source: &Point3, eye: &Point3) -> Vec<Point3> {
    cylinder.intersect(&Ray::new(*source, *eye)).points()
}

/// Reflects `source` off `cylinder` as seen from `eye` using [`MirrorReflector`].
#[must_use]
pub fn reflect(cylinder: &Cylinder, source: &Point3, eye: &Point3) -> Option<Point3> {
    MirrorReflector.reflect(cylinder, source, eye)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn intersection_counts_follow_discriminant() {
        let c = Cylinder::new(10.0).unwrap();
        let eye = Point3::new(100.0, 0.0, 4.0);
        assert_eq!(intersections(&c, &Point3::new(0.0, 0.0, 4.0), &eye).len(), 2);
        assert_eq!(
            intersections(&c, &Point3::new(0.0, 10.0, 4.0), &Point3::new(100.0, 10.0, 4.0)).len(),
            1
        );
        assert!(intersections(&c, &Point3::new(0.0, 11.0, 4.0), &Point3::new(100.0, 11.0, 4.0))
            .is_empty());
    }

    #[test]
    fn first_intersection_faces_the_eye() {
        let c = Cylinder::new(10.0).unwrap();
        let hits = intersections(&c, &Point3::new(0.0, 0.0, 4.0), &Point3::new(100.0, 0.0, 4.0));
        assert_relative_eq!(hits[0].x, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn reflect_lands_on_ground() {
        let c = Cylinder::new(20.0).unwrap();
        let p = reflect(&c, &Point3::new(0.0, -4.0, 7.0), &Point3::new(200.0, 0.0, 550.0)).unwrap();
        assert_relative_eq!(p.z, 0.0);
    }
}
