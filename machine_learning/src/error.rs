use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::raster::Shape;

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MlErr {
    /// Some part of `shape` would land outside of a `side`x`side` grid.
    OutOfBounds { shape: Shape, side: usize },
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::OutOfBounds { shape, side } => {
                write!(f, "{shape} does not fit in a {side}x{side} grid")
            }
        }
    }
}

impl Error for MlErr {}
