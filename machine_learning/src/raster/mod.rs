mod grid;
mod shape;

pub use grid::Grid;
pub use shape::{Shape, rasterize_circle, rasterize_square};
