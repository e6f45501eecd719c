/// Real roots of `a*u^2 + b*u + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    /// Negative discriminant, or a degenerate equation with no solution.
    None,
    /// Zero discriminant, or a linear equation.
    One(f64),
    /// Positive discriminant. The `+sqrt` root comes first.
    Two(f64, f64),
}

impl QuadraticRoots {
    /// Number of roots (0, 1 or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Two(..) => 2,
        }
    }

    /// Returns `true` if there are no roots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Solves `a*u^2 + b*u + c = 0`.
///
/// Roots are reported in the order `(-b + sqrt(disc)) / 2a`, `(-b - sqrt(disc)) / 2a`,
/// not sorted by value. Only an exactly zero `a` makes the equation linear; a tiny
/// but nonzero `a` still has two roots, one of them very large.
#[must_use]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadraticRoots {
    if a == 0.0 {
        if b == 0.0 {
            return QuadraticRoots::None;
        }
        return QuadraticRoots::One(-c / b);
    }

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 || disc.is_nan() {
        return QuadraticRoots::None;
    }
    if disc > 0.0 {
        let sqrt = disc.sqrt();
        QuadraticRoots::Two((-b + sqrt) / (2.0 * a), (-b - sqrt) / (2.0 * a))
    } else {
        QuadraticRoots::One(-b / (2.0 * a))
    }
}
