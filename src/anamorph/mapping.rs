use crate::math::{GridPoint, Point3};

/// Per-source-pixel destination coordinates on the output canvas.
///
/// Indexed by the lifted `(col, row)` of the source pixel, row-major. A cell is
/// `None` when the pixel has no reflection on the ground plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<GridPoint>>,
}

/// Inclusive bounding box of every mapped destination coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasBounds {
    pub min: GridPoint,
    pub max: GridPoint,
}

impl CanvasBounds {
    /// Canvas width, `max.x - min.x + 1`.
    #[must_use]
    pub fn width(&self) -> u64 {
        span(self.min.x, self.max.x)
    }

    /// Canvas height, `max.y - min.y + 1`.
    #[must_use]
    pub fn height(&self) -> u64 {
        span(self.min.y, self.max.y)
    }
}

fn span(min: i64, max: i64) -> u64 {
    u64::try_from(i128::from(max) - i128::from(min) + 1).unwrap_or(u64::MAX)
}

/// Rounds a ground-plane point to the nearest canvas cell, halves rounding up.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_grid(point: &Point3) -> Option<GridPoint> {
    if !(point.x.is_finite() && point.y.is_finite()) {
        return None;
    }
    let x = (point.x + 0.5).floor() as i64;
    let y = (point.y + 0.5).floor() as i64;
    Some(GridPoint::new(x, y))
}

impl MappingGrid {
    /// Creates a grid with every cell unmapped.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Width of the source image the grid was built for.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the source image the grid was built for.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the destination of source pixel `(col, row)`, if mapped.
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<GridPoint> {
        self.index(col, row).and_then(|i| self.cells[i])
    }

    /// Sets (or clears) the destination of source pixel `(col, row)`.
    pub fn set(&mut self, col: usize, row: usize, target: Option<GridPoint>) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = target;
        }
    }

    /// Number of mapped cells.
    #[must_use]
    pub fn mapped_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Iterates over mapped destinations.
    pub fn mapped(&self) -> impl Iterator<Item = &GridPoint> {
        self.cells.iter().flatten()
    }

    /// Bounding box of all mapped cells, or `None` if nothing is mapped.
    #[must_use]
    pub fn bounds(&self) -> Option<CanvasBounds> {
        let mut it = self.mapped();
        let first = *it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), p| {
            (
                GridPoint::new(lo.x.min(p.x), lo.y.min(p.y)),
                GridPoint::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some(CanvasBounds { min, max })
    }

    /// Moves every mapped cell by `(dx, dy)`. Unmapped cells stay unmapped.
    ///
    /// Arithmetic wraps, so translating by `min.wrapping_neg()` moves a bounding box
    /// starting at `min` to the origin even when `min` is `i64::MIN`.
    pub fn translate(&mut self, dx: i64, dy: i64) {
        for p in self.cells.iter_mut().flatten() {
            *p = GridPoint::new(p.x.wrapping_add(dx), p.y.wrapping_add(dy));
        }
    }

    /// Destinations of the 2x2 block whose top-left source pixel is `(col, row)`,
    /// in the order `(col, row)`, `(col+1, row)`, `(col+1, row+1)`, `(col, row+1)`.
    ///
    /// Returns `None` if any corner is unmapped or outside the grid.
    #[must_use]
    pub fn quad(&self, col: usize, row: usize) -> Option<[GridPoint; 4]> {
        Some([
            self.get(col, row)?,
            self.get(col + 1, row)?,
            self.get(col + 1, row + 1)?,
            self.get(col, row + 1)?,
        ])
    }

    fn index(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.width && row < self.height).then(|| row * self.width + col)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_to_grid(&Point3::new(1.5, -1.5, 0.0)), Some(GridPoint::new(2, -1)));
        assert_eq!(round_to_grid(&Point3::new(-0.6, 2.49, 0.0)), Some(GridPoint::new(-1, 2)));
        assert_eq!(round_to_grid(&Point3::new(f64::NAN, 0.0, 0.0)), None);
    }

    #[test]
    fn new_grid_is_unmapped() {
        let m = MappingGrid::new(3, 2);
        assert_eq!(m.mapped_count(), 0);
        assert!(m.bounds().is_none());
        assert_eq!(m.get(0, 0), None);
    }

    #[test]
    fn bounds_track_true_extremes() {
        let mut m = MappingGrid::new(3, 1);
        // ascending then descending values must still update both ends
        m.set(0, 0, Some(GridPoint::new(5, -2)));
        m.set(1, 0, Some(GridPoint::new(-3, 7)));
        m.set(2, 0, Some(GridPoint::new(9, 1)));
        let b = m.bounds().unwrap();
        assert_eq!(b.min, GridPoint::new(-3, -2));
        assert_eq!(b.max, GridPoint::new(9, 7));
        assert_eq!((b.width(), b.height()), (13, 10));
    }

    #[test]
    fn single_point_bounds_are_one_cell() {
        let mut m = MappingGrid::new(2, 2);
        m.set(1, 1, Some(GridPoint::new(-4, 4)));
        let b = m.bounds().unwrap();
        assert_eq!((b.width(), b.height()), (1, 1));
    }

    #[test]
    fn extreme_bounds_saturate() {
        let b = CanvasBounds {
            min: GridPoint::new(i64::MIN, 0),
            max: GridPoint::new(i64::MAX, 0),
        };
        assert_eq!(b.width(), u64::MAX);
    }

    #[test]
    fn translate_leaves_unmapped_cells() {
        let mut m = MappingGrid::new(2, 1);
        m.set(0, 0, Some(GridPoint::new(-3, 10)));
        m.translate(3, -10);
        assert_eq!(m.get(0, 0), Some(GridPoint::new(0, 0)));
        assert_eq!(m.get(1, 0), None);
    }

    #[test]
    fn translate_from_i64_min_reaches_origin() {
        let mut m = MappingGrid::new(2, 1);
        m.set(0, 0, Some(GridPoint::new(i64::MIN, i64::MIN + 2)));
        m.set(1, 0, Some(GridPoint::new(i64::MIN + 3, i64::MIN)));
        let min = m.bounds().unwrap().min;
        m.translate(min.x.wrapping_neg(), min.y.wrapping_neg());
        assert_eq!(m.get(0, 0), Some(GridPoint::new(0, 2)));
        assert_eq!(m.get(1, 0), Some(GridPoint::new(3, 0)));
    }

    #[test]
    fn quad_requires_all_corners() {
        let mut m = MappingGrid::new(2, 2);
        m.set(0, 0, Some(GridPoint::new(0, 0)));
        m.set(1, 0, Some(GridPoint::new(1, 0)));
        m.set(1, 1, Some(GridPoint::new(1, 1)));
        assert!(m.quad(0, 0).is_none());
        m.set(0, 1, Some(GridPoint::new(0, 1)));
        assert_eq!(
            m.quad(0, 0),
            Some([
                GridPoint::new(0, 0),
                GridPoint::new(1, 0),
                GridPoint::new(1, 1),
                GridPoint::new(0, 1),
            ])
        );
        assert!(m.quad(1, 0).is_none());
    }
}
