use thiserror::Error;

/// Top-level error type for the anamorphosis engine.
#[derive(Debug, Error)]
pub enum AnamorphError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Whole-run failures caused by the computed geometry.
///
/// Per-pixel "no solution" outcomes are not errors; they surface as unmapped cells.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("no source pixel has a reflection on the ground plane ({pixels} pixels tried)")]
    EmptyMapping { pixels: usize },

    #[error("output canvas {width}x{height} exceeds the limit of {limit} pixels")]
    CanvasTooLarge { width: u64, height: u64, limit: u64 },
}

/// Invalid run configuration, rejected before any per-pixel work.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cylinder radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("eye position ({x}, {y}, {z}) is not finite")]
    NonFiniteEye { x: f64, y: f64, z: f64 },

    #[error("eye position ({x}, {y}, {z}) lies on the cylinder surface")]
    EyeOnSurface { x: f64, y: f64, z: f64 },

    #[error("canvas pixel limit must be non-zero")]
    ZeroCanvasLimit,
}

/// Errors related to pixel grids and their codecs.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("pixel grid must have non-zero dimensions, got {width}x{height}")]
    Empty { width: usize, height: usize },

    #[error("pixel buffer holds {actual} pixels, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("pixel grid {width}x{height} is too large to encode")]
    TooLarge { width: usize, height: usize },

    #[error(transparent)]
    Codec(#[from] image::ImageError),
}

/// Convenience type alias for results using [`AnamorphError`].
pub type Result<T> = std::result::Result<T, AnamorphError>;
