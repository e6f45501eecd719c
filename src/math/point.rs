use super::{Point3, Vector3};

/// Value-semantics helpers shared by points and vectors.
///
/// Arithmetic (`+`, `-`, scalar `*`, `dot`) comes from nalgebra; this trait adds
/// single-coordinate replacement and the "unsolvable" predicate that turns NaN or
/// infinite coordinates into an absent result.
pub trait PointExt: Sized {
    /// Returns a copy with the x coordinate replaced.
    #[must_use]
    fn with_x(&self, x: f64) -> Self;

    /// Returns a copy with the y coordinate replaced.
    #[must_use]
    fn with_y(&self, y: f64) -> Self;

    /// Returns a copy with the z coordinate replaced.
    #[must_use]
    fn with_z(&self, z: f64) -> Self;

    /// Returns `true` if any coordinate is NaN or infinite.
    fn is_unsolvable(&self) -> bool;

    /// Returns `Some(self)` unless the value is unsolvable.
    fn solved(self) -> Option<Self> {
        if self.is_unsolvable() {
            None
        } else {
            Some(self)
        }
    }
}

impl PointExt for Point3 {
    fn with_x(&self, x: f64) -> Self {
        Point3::new(x, self.y, self.z)
    }

    fn with_y(&self, y: f64) -> Self {
        Point3::new(self.x, y, self.z)
    }

    fn with_z(&self, z: f64) -> Self {
        Point3::new(self.x, self.y, z)
    }

    fn is_unsolvable(&self) -> bool {
        !(self.x.is_finite() && self.y.is_finite() && self.z.is_finite())
    }
}

impl PointExt for Vector3 {
    fn with_x(&self, x: f64) -> Self {
        Vector3::new(x, self.y, self.z)
    }

    fn with_y(&self, y: f64) -> Self {
        Vector3::new(self.x, y, self.z)
    }

    fn with_z(&self, z: f64) -> Self {
        Vector3::new(self.x, self.y, z)
    }

    fn is_unsolvable(&self) -> bool {
        !(self.x.is_finite() && self.y.is_finite() && self.z.is_finite())
    }
}
