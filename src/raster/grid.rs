use crate::error::{RasterError, Result};

use super::Rgb;

/// A rectangular grid of packed colours, stored row-major and addressed by
/// `(col, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Creates a grid with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Empty`] if either dimension is zero, or
    /// [`RasterError::TooLarge`] if the cell count overflows `usize`.
    pub fn new(width: usize, height: usize, fill: Rgb) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![fill; len],
        })
    }

    /// Wraps an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty or `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self> {
        let expected = checked_len(width, height)?;
        if pixels.len() != expected {
            return Err(RasterError::DimensionMismatch {
                expected,
                actual: pixels.len(),
            }
            .into());
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a grid by evaluating `f(col, row)` for every cell.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> Rgb,
    ) -> Result<Self> {
        let len = checked_len(width, height)?;
        let mut pixels = Vec::with_capacity(len);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(col, row));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the row-major pixel buffer.
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Returns the colour at `(col, row)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<Rgb> {
        self.index(col, row).map(|i| self.pixels[i])
    }

    /// Sets the colour at `(col, row)`. Writes outside the grid are ignored.
    pub fn set(&mut self, col: usize, row: usize, color: Rgb) {
        if let Some(i) = self.index(col, row) {
            self.pixels[i] = color;
        }
    }

    fn index(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.width && row < self.height).then(|| row * self.width + col)
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(RasterError::Empty { width, height }.into());
    }
    width
        .checked_mul(height)
        .ok_or_else(|| RasterError::TooLarge { width, height }.into())
}
