use crate::math::GridPoint;

use super::{PixelGrid, Rgb};

impl PixelGrid {
    /// Plots a single pixel given signed coordinates. Off-grid pixels are dropped.
    pub fn plot(&mut self, x: i64, y: i64, color: Rgb) {
        if let (Ok(col), Ok(row)) = (usize::try_from(x), usize::try_from(y)) {
            self.set(col, row, color);
        }
    }

    /// Draws a horizontal span `[x0, x1]` on row `y`, clipped to the grid.
    pub fn hline(&mut self, x0: i64, x1: i64, y: i64, color: Rgb) {
        let Ok(row) = usize::try_from(y) else {
            return;
        };
        if row >= self.height() || x1 < 0 {
            return;
        }
        let first = usize::try_from(x0.max(0)).unwrap_or(0);
        let last = usize::try_from(x1).map_or(0, |x| x.min(self.width() - 1));
        for col in first..=last {
            self.set(col, row, color);
        }
    }

    /// Draws a line with Bresenham's algorithm, both endpoints included.
    ///
    /// Any `i64` endpoints are accepted; the error term is kept in `i128` and
    /// `x`, `y` never step past `to`. Cost is linear in the line's length even
    /// when most of it lies off the grid.
    pub fn draw_line(&mut self, from: GridPoint, to: GridPoint, color: Rgb) {
        let dx = (i128::from(to.x) - i128::from(from.x)).abs();
        let dy = -(i128::from(to.y) - i128::from(from.y)).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);

        loop {
            self.plot(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fills the interior of a closed polygon with the even-odd rule.
    ///
    /// A pixel is inside when its centre `(col + 0.5, row + 0.5)` is.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn fill_polygon(&mut self, vertices: &[GridPoint], color: Rgb) {
        let n = vertices.len();
        if n < 3 {
            return;
        }

        let (mut min_y, mut max_y) = (i64::MAX, i64::MIN);
        for v in vertices {
            min_y = min_y.min(v.y);
            max_y = max_y.max(v.y);
        }
        let last_row = i64::try_from(self.height() - 1).unwrap_or(i64::MAX);
        let min_y = min_y.max(0);
        let max_y = max_y.min(last_row);

        let mut crossings = Vec::with_capacity(n);
        for y in min_y..=max_y {
            crossings.clear();
            let yc = y as f64 + 0.5;

            for (i, a) in vertices.iter().enumerate() {
                let b = &vertices[(i + 1) % n];
                let (ay, by) = (a.y as f64, b.y as f64);
                if (ay <= yc && by > yc) || (by <= yc && ay > yc) {
                    let (ax, bx) = (a.x as f64, b.x as f64);
                    crossings.push(ax + (yc - ay) / (by - ay) * (bx - ax));
                }
            }

            crossings.sort_by(f64::total_cmp);
            for pair in crossings.chunks_exact(2) {
                let first = (pair[0] - 0.5).ceil() as i64;
                let last = (pair[1] - 0.5).ceil() as i64 - 1;
                if first <= last {
                    self.hline(first, last, y, color);
                }
            }
        }
    }

    /// Paints a closed polygon's outline and interior in one flat colour.
    pub fn paint_polygon(&mut self, vertices: &[GridPoint], color: Rgb) {
        self.fill_polygon(vertices, color);
        for (i, &a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            self.draw_line(a, b, color);
        }
    }
}
