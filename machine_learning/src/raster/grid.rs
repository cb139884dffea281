use std::fmt::{self, Display};

use ndarray::Array2;

/// A square binary image, every cell holds either 0 or 1.
///
/// Cells are addressed as `(row, col)` and iterated in row-major order, which is the order the
/// perceptron's weights are laid out in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<u8>,
}

impl Grid {
    /// Builds a brand new `side`x`side` grid where a cell is set iff `filled(row, col)` holds.
    pub(crate) fn from_fn<F>(side: usize, filled: F) -> Self
    where
        F: Fn(usize, usize) -> bool,
    {
        let cells = Array2::from_shape_fn((side, side), |(row, col)| filled(row, col) as u8);
        Self { cells }
    }

    /// Returns the amount of rows (and columns) of the grid.
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Returns the total amount of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the value at `(row, col)`, or `None` if it lies outside of the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get((row, col)).copied()
    }

    /// Returns the amount of filled cells.
    pub fn ones(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }

    /// Iterates the cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().copied()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: String = row
                .iter()
                .map(|&cell| if cell == 1 { '#' } else { '.' })
                .collect();

            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}
