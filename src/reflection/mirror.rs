use crate::geometry::{Hits, Ray, Surface};
use crate::math::{Point3, PointExt, Vector3, TOLERANCE};

use super::Reflector;

/// Reflection model used for cylindrical anamorphosis.
///
/// 1. The line from the source point to the eye is intersected with the surface and
///    the first (`+sqrt` root) intersection is taken as the mirror point.
/// 2. The incoming vector `eye - source` is mirrored about the source point's
///    horizontal projection, which stands in for the surface normal.
/// 3. The reflected ray leaving the mirror point is followed down to `z = 0`.
///
/// A grazing (tangent) line yields no reflection.
#[derive(Debug, Clone, Copy, Default)]
pub struct MirrorReflector;

impl MirrorReflector {
    /// Mirrors `eye - source` about the horizontal projection of `source`.
    ///
    /// Returns `None` when `source` lies on the vertical axis, where the
    /// approximate normal has zero length.
    #[must_use]
    pub fn reflection_vector(source: &Point3, eye: &Point3) -> Option<Vector3> {
        let n = source.coords.with_z(0.0);
        let nn = n.dot(&n);
        if nn < TOLERANCE {
            return None;
        }
        let v = eye - source;
        let a = n * (n.dot(&v) / nn) - v;
        (v + a * 2.0).solved()
    }

    /// Follows the ray `mirror - t * dir` to the ground plane `z = 0`.
    ///
    /// Returns `None` if the ray is parallel to the ground.
    #[must_use]
    pub fn project_to_ground(mirror: &Point3, dir: &Vector3) -> Option<Point3> {
        if dir.z.abs() < TOLERANCE {
            return None;
        }
        let t = mirror.z / dir.z;
        Point3::new(mirror.x - t * dir.x, mirror.y - t * dir.y, 0.0).solved()
    }
}

impl Reflector for MirrorReflector {
    fn reflect(&self, surface: &dyn Surface, source: &Point3, eye: &Point3) -> Option<Point3> {
        let mirror = match surface.intersect(&Ray::new(*source, *eye)) {
            Hits::Secant(first, _) => first.solved()?,
            Hits::Tangent(_) | Hits::Miss => return None,
        };
        let dir = Self::reflection_vector(source, eye)?;
        Self::project_to_ground(&mirror, &dir)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Cylinder;
    use approx::assert_relative_eq;

    #[test]
    fn reflection_keeps_normal_component() {
        let r = MirrorReflector::reflection_vector(
            &Point3::new(0.0, 5.0, 0.0),
            &Point3::new(100.0, 0.0, 10.0),
        )
        .unwrap();
        assert_relative_eq!(r, Vector3::new(-100.0, -5.0, -10.0));
    }

    #[test]
    fn reflected_z_opposes_incoming_z() {
        let source = Point3::new(0.0, 3.0, 2.0);
        let eye = Point3::new(200.0, 0.0, 550.0);
        let r = MirrorReflector::reflection_vector(&source, &eye).unwrap();
        assert_relative_eq!(r.z, source.z - eye.z);
    }

    #[test]
    fn source_on_axis_has_no_normal() {
        let r = MirrorReflector::reflection_vector(
            &Point3::new(0.0, 0.0, 7.0),
            &Point3::new(100.0, 0.0, 10.0),
        );
        assert!(r.is_none());
    }

    #[test]
    fn reflect_near_the_cylinder() {
        let c = Cylinder::new(20.0).unwrap();
        let p = MirrorReflector
            .reflect(&c, &Point3::new(0.0, 3.0, 2.0), &Point3::new(200.0, 0.0, 550.0))
            .unwrap();
        assert_relative_eq!(p.x, -0.729_927_007_299_267, max_relative = 1e-9);
        assert_relative_eq!(p.y, 2.394_554_990_009_27, max_relative = 1e-9);
        assert_relative_eq!(p.z, 0.0);
    }

    #[test]
    fn reflect_steep_view() {
        let c = Cylinder::new(10.0).unwrap();
        let p = MirrorReflector
            .reflect(&c, &Point3::new(0.0, 9.0, 99.0), &Point3::new(100.0, 0.0, 100.0))
            .unwrap();
        assert_relative_eq!(p.x, -9900.0, max_relative = 1e-9);
        assert_relative_eq!(p.y, -882.939_342_992_792_1, max_relative = 1e-9);
    }

    #[test]
    fn eye_level_source_is_parallel_to_ground() {
        let c = Cylinder::new(20.0).unwrap();
        let p = MirrorReflector.reflect(&c, &Point3::new(0.0, 3.0, 5.0), &Point3::new(200.0, 0.0, 5.0));
        assert!(p.is_none());
    }

    #[test]
    fn tangent_line_is_unmapped() {
        let c = Cylinder::new(20.0).unwrap();
        let p = MirrorReflector.reflect(
            &c,
            &Point3::new(0.0, 20.0, 5.0),
            &Point3::new(100.0, 20.0, 5.0),
        );
        assert!(p.is_none());
    }

    #[test]
    fn missing_line_is_unmapped() {
        let c = Cylinder::new(20.0).unwrap();
        let p = MirrorReflector.reflect(
            &c,
            &Point3::new(0.0, 30.0, 0.0),
            &Point3::new(200.0, 100.0, 0.0),
        );
        assert!(p.is_none());
    }

    #[test]
    fn ground_projection_parallel_ray() {
        let p = MirrorReflector::project_to_ground(
            &Point3::new(1.0, 2.0, 3.0),
            &Vector3::new(1.0, 1.0, 0.0),
        );
        assert!(p.is_none());
    }
}
