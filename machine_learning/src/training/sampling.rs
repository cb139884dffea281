/// The half-open ranges shape parameters are drawn from.
///
/// Draws are truncated toward zero into cell coordinates, so `position: (2., 17.)` yields
/// coordinates in `[2, 16]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSampling {
    /// Range for a square's top-left corner and a circle's center.
    pub position: (f32, f32),
    /// Range for a square's width and height and a circle's radius.
    pub size: (f32, f32),
}

impl ShapeSampling {
    /// Returns the default ranges scaled to a `side`x`side` grid.
    ///
    /// For the reference side of 20 this is a position in `[2, 17)` and a size in `[2, 6)`.
    /// Grids smaller than 6 cells yield empty ranges.
    pub fn for_side(side: usize) -> Self {
        let side = side as f32;

        Self {
            position: (2., (side - 3.).max(2.)),
            size: (2., 2. + (side / 5.).floor()),
        }
    }
}

impl Default for ShapeSampling {
    fn default() -> Self {
        Self::for_side(20)
    }
}
