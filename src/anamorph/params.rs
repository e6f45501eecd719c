use crate::error::{ConfigError, Result};
use crate::geometry::{Cylinder, Surface};
use crate::math::{Point3, PointExt, TOLERANCE};
use crate::raster::Rgb;

/// Upper bound on output canvas cells unless overridden.
pub const DEFAULT_MAX_CANVAS_PIXELS: u64 = 1 << 27;

/// Parameters controlling an anamorphosis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnamorphParams {
    /// Radius of the mirror cylinder, in pixel units.
    pub radius: f64,
    /// Position of the eye.
    pub eye: Point3,
    /// Colour of canvas cells no quad covers.
    pub background: Rgb,
    /// Largest output canvas (in cells) the pipeline may allocate.
    pub max_canvas_pixels: u64,
}

impl AnamorphParams {
    /// Creates parameters with the eye at `(eye_distance, 0, eye_height)`.
    #[must_use]
    pub fn new(radius: f64, eye_distance: f64, eye_height: f64) -> Self {
        Self {
            radius,
            eye: Point3::new(eye_distance, 0.0, eye_height),
            background: Rgb::WHITE,
            max_canvas_pixels: DEFAULT_MAX_CANVAS_PIXELS,
        }
    }

    /// Sets the colour of canvas cells no quad covers.
    #[must_use]
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Sets the largest canvas, in cells, the pipeline may allocate.
    #[must_use]
    pub fn with_max_canvas_pixels(mut self, limit: u64) -> Self {
        self.max_canvas_pixels = limit;
        self
    }

    /// Returns `ceil(source_width / radius)`, or 1 if the ratio is not a finite
    /// number of at least 1.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn upscale_ratio(&self, source_width: usize) -> u32 {
        let ratio = (source_width as f64 / self.radius).ceil();
        if ratio.is_finite() && ratio >= 1.0 {
            ratio.min(f64::from(u32::MAX)) as u32
        } else {
            1
        }
    }

    /// Scales radius and eye position uniformly so the cylinder is at least as
    /// wide as the source image.
    #[must_use]
    pub fn upscaled_for(self, source_width: usize) -> Self {
        let ratio = self.upscale_ratio(source_width);
        if ratio <= 1 {
            return self;
        }
        let k = f64::from(ratio);
        Self {
            radius: self.radius * k,
            eye: Point3::from(self.eye.coords * k),
            ..self
        }
    }

    /// Checks the parameters and builds the mirror cylinder.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the radius is not positive, the eye is not
    /// finite or lies on the cylinder, or the canvas limit is zero.
    pub fn validate(&self) -> Result<Cylinder> {
        let cylinder = Cylinder::new(self.radius)?;
        let (x, y, z) = (self.eye.x, self.eye.y, self.eye.z);
        if self.eye.is_unsolvable() {
            return Err(ConfigError::NonFiniteEye { x, y, z }.into());
        }
        let scale = self.radius.max(1.0);
        if cylinder.contains(&self.eye, TOLERANCE * scale * scale) {
            return Err(ConfigError::EyeOnSurface { x, y, z }.into());
        }
        if self.max_canvas_pixels == 0 {
            return Err(ConfigError::ZeroCanvasLimit.into());
        }
        Ok(cylinder)
    }
}
