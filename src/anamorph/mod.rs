//! The anamorphosis pipeline.
//!
//! ```text
//! source pixels -> lifted 3D points -> reflector -> MappingGrid
//!               -> bounding-box normalization -> flat quad shading -> canvas
//! ```

mod mapping;
mod params;

pub use mapping::{round_to_grid, CanvasBounds, MappingGrid};
pub use params::{AnamorphParams, DEFAULT_MAX_CANVAS_PIXELS};

use crate::error::{GeometryError, Result};
use crate::geometry::Cylinder;
use crate::math::Point3;
use crate::raster::{PixelGrid, Rgb};
use crate::reflection::{MirrorReflector, Reflector};

/// Computes the cylindrical anamorph of a source image.
#[derive(Debug, Clone)]
pub struct Anamorpher<R = MirrorReflector> {
    cylinder: Cylinder,
    eye: Point3,
    background: Rgb,
    max_canvas_pixels: u64,
    reflector: R,
}

impl Anamorpher<MirrorReflector> {
    /// Creates a pipeline using the [`MirrorReflector`].
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `params` fail validation.
    pub fn new(params: &AnamorphParams) -> Result<Self> {
        let cylinder = params.validate()?;
        Ok(Self {
            cylinder,
            eye: params.eye,
            background: params.background,
            max_canvas_pixels: params.max_canvas_pixels,
            reflector: MirrorReflector,
        })
    }
}

impl<R: Reflector> Anamorpher<R> {
    /// Replaces the reflection strategy.
    #[must_use]
    pub fn with_reflector<S: Reflector>(self, reflector: S) -> Anamorpher<S> {
        Anamorpher {
            cylinder: self.cylinder,
            eye: self.eye,
            background: self.background,
            max_canvas_pixels: self.max_canvas_pixels,
            reflector,
        }
    }

    /// Returns the validated mirror cylinder.
    #[must_use]
    pub fn cylinder(&self) -> &Cylinder {
        &self.cylinder
    }

    /// Returns the eye position the reflections are computed for.
    #[must_use]
    pub fn eye(&self) -> &Point3 {
        &self.eye
    }

    /// Places lifted source pixel `(col, row)` on the vertical plane `x = 0`,
    /// centred horizontally on the cylinder axis.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn lift(width: usize, col: usize, row: usize) -> Point3 {
        Point3::new(0.0, col as f64 - (width / 2) as f64, row as f64)
    }

    /// Runs the whole pipeline and returns the output canvas.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyMapping`] if no pixel has a reflection, or
    /// [`GeometryError::CanvasTooLarge`] if the output would exceed the limit.
    pub fn execute(&self, source: &PixelGrid) -> Result<PixelGrid> {
        let mut mapping = self.map(source);
        let (width, height) = self.normalize(&mut mapping)?;
        tracing::info!(
            "anamorph canvas {width}x{height} from {}x{} source",
            source.width(),
            source.height()
        );
        self.shade(source, &mapping, width, height)
    }

    /// Reflects every lifted source pixel onto the ground plane.
    pub fn map(&self, source: &PixelGrid) -> MappingGrid {
        let (width, height) = (source.width(), source.height());
        let mut mapping = MappingGrid::new(width, height);

        for col in 0..width {
            for row in 0..height {
                let p = Self::lift(width, col, row);
                let target = self
                    .reflector
                    .reflect(&self.cylinder, &p, &self.eye)
                    .and_then(|q| round_to_grid(&q));
                mapping.set(col, row, target);
            }
        }

        tracing::debug!(
            mapped = mapping.mapped_count(),
            total = width * height,
            "reflected source pixels onto the ground plane"
        );
        mapping
    }

    /// Translates mapped cells so the bounding box starts at the origin and
    /// returns the canvas `(width, height)`.
    ///
    /// # Errors
    ///
    /// Fails if nothing is mapped or the canvas exceeds the configured limit.
    pub fn normalize(&self, mapping: &mut MappingGrid) -> Result<(usize, usize)> {
        let Some(bounds) = mapping.bounds() else {
            let pixels = mapping.width() * mapping.height();
            tracing::warn!(pixels, "no source pixel reflects onto the ground plane");
            return Err(GeometryError::EmptyMapping { pixels }.into());
        };

        let (w, h) = (bounds.width(), bounds.height());
        let limit = self.max_canvas_pixels;
        let too_large = || GeometryError::CanvasTooLarge {
            width: w,
            height: h,
            limit,
        };
        w.checked_mul(h)
            .filter(|&cells| cells <= limit)
            .ok_or_else(too_large)?;
        let width = usize::try_from(w).map_err(|_| too_large())?;
        let height = usize::try_from(h).map_err(|_| too_large())?;

        mapping.translate(bounds.min.x.wrapping_neg(), bounds.min.y.wrapping_neg());
        Ok((width, height))
    }

    /// Paints each 2x2 source block as a flat quad of its average colour.
    ///
    /// Blocks are visited column by column, rows ascending within a column, so
    /// where quads overlap the later block wins. Blocks with an unmapped corner
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas dimensions are zero.
    pub fn shade(
        &self,
        source: &PixelGrid,
        mapping: &MappingGrid,
        width: usize,
        height: usize,
    ) -> Result<PixelGrid> {
        let mut canvas = PixelGrid::new(width, height, self.background)?;
        let mut skipped = 0usize;

        for col in 0..source.width().saturating_sub(1) {
            for row in 0..source.height().saturating_sub(1) {
                let (Some(quad), Some(color)) =
                    (mapping.quad(col, row), block_color(source, col, row))
                else {
                    skipped += 1;
                    continue;
                };
                canvas.paint_polygon(&quad, color);
            }
        }

        tracing::debug!(skipped, "blocks with unmapped corners");
        Ok(canvas)
    }
}

/// Source colour behind lifted pixel `(col, row)`; the image is sampled
/// mirrored along both axes.
fn sample(source: &PixelGrid, col: usize, row: usize) -> Option<Rgb> {
    let src_col = source.width().checked_sub(col + 1)?;
    let src_row = source.height().checked_sub(row + 1)?;
    source.get(src_col, src_row)
}

fn block_color(source: &PixelGrid, col: usize, row: usize) -> Option<Rgb> {
    Some(Rgb::average([
        sample(source, col, row)?,
        sample(source, col + 1, row)?,
        sample(source, col, row + 1)?,
        sample(source, col + 1, row + 1)?,
    ]))
}
