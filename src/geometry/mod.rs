pub mod ray;
pub mod surface;

pub use ray::Ray;
pub use surface::{Cylinder, Hits, Quadric, Surface};
