mod color;
mod grid;
mod paint;

pub use color::Rgb;
pub use grid::PixelGrid;
