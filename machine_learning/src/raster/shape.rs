use std::fmt::{self, Display};

use super::Grid;
use crate::{
    arch::Label,
    error::{MlErr, Result},
};

/// The parameters of a synthetic sample, in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A filled rectangle whose top-left cell is `(row, col)`.
    Square {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    /// A filled disc, `center_x` is a column and `center_y` a row.
    Circle {
        center_x: usize,
        center_y: usize,
        radius: usize,
    },
}

impl Shape {
    /// Returns the class this shape belongs to.
    pub fn label(&self) -> Label {
        match self {
            Shape::Square { .. } => Label::Square,
            Shape::Circle { .. } => Label::Circle,
        }
    }

    /// Whether every cell covered by the shape lies within `[0, side)` on both axes.
    pub fn fits(&self, side: usize) -> bool {
        match *self {
            Shape::Square {
                row,
                col,
                width,
                height,
            } => ends_within(row, height, side) && ends_within(col, width, side),
            Shape::Circle {
                center_x,
                center_y,
                radius,
            } => spans_within(center_x, radius, side) && spans_within(center_y, radius, side),
        }
    }

    /// Rasterizes the shape into a new `side`x`side` grid.
    ///
    /// # Errors
    /// `MlErr::OutOfBounds` if the shape does not fit in the grid.
    pub fn rasterize(&self, side: usize) -> Result<Grid> {
        match *self {
            Shape::Square {
                row,
                col,
                width,
                height,
            } => rasterize_square(side, row, col, width, height),
            Shape::Circle {
                center_x,
                center_y,
                radius,
            } => rasterize_circle(side, center_x, center_y, radius),
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Square {
                row,
                col,
                width,
                height,
            } => write!(f, "square {width}x{height} at ({row}, {col})"),
            Shape::Circle {
                center_x,
                center_y,
                radius,
            } => write!(f, "circle r={radius} at ({center_x}, {center_y})"),
        }
    }
}

/// `[start, start + len)` lies within `[0, side)`.
fn ends_within(start: usize, len: usize, side: usize) -> bool {
    start.checked_add(len).is_some_and(|end| end <= side)
}

/// `[center - radius, center + radius]` lies within `[0, side)`.
fn spans_within(center: usize, radius: usize, side: usize) -> bool {
    center >= radius && center.checked_add(radius).is_some_and(|end| end < side)
}

/// Fills the cells `[row, row + height) x [col, col + width)` of a new `side`x`side` grid.
///
/// # Errors
/// `MlErr::OutOfBounds` if the rectangle extends past the grid on either axis.
pub fn rasterize_square(
    side: usize,
    row: usize,
    col: usize,
    width: usize,
    height: usize,
) -> Result<Grid> {
    let shape = Shape::Square {
        row,
        col,
        width,
        height,
    };

    if !shape.fits(side) {
        return Err(MlErr::OutOfBounds { shape, side });
    }

    let rows = row..row + height;
    let cols = col..col + width;
    Ok(Grid::from_fn(side, |r, c| rows.contains(&r) && cols.contains(&c)))
}

/// Fills every cell of a new `side`x`side` grid whose coordinate `(col, row)` is at most
/// `radius` away from `(center_x, center_y)`.
///
/// # Errors
/// `MlErr::OutOfBounds` if the circle's bounding box extends past the grid on either axis.
pub fn rasterize_circle(
    side: usize,
    center_x: usize,
    center_y: usize,
    radius: usize,
) -> Result<Grid> {
    let shape = Shape::Circle {
        center_x,
        center_y,
        radius,
    };

    if !shape.fits(side) {
        return Err(MlErr::OutOfBounds { shape, side });
    }

    // Exact in integers, every coordinate is below `side`.
    let (cx, cy, r) = (center_x as i64, center_y as i64, radius as i64);
    Ok(Grid::from_fn(side, |row, col| {
        let (dx, dy) = (col as i64 - cx, row as i64 - cy);
        dx * dx + dy * dy <= r * r
    }))
}
