pub mod anamorph;
pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod raster;
pub mod reflection;

pub use anamorph::{AnamorphParams, Anamorpher};
pub use error::{AnamorphError, Result};
