use ndarray::{Array1, ArrayView1};

use super::Label;
use crate::{initialization::RandomSource, raster::Grid};

/// A single layer linear classifier over `side`x`side` binary images.
///
/// The weight vector is index aligned with the row-major flattening of the grids it classifies.
/// It is created once and from then on only modified in place by `update`.
#[derive(Debug, Clone)]
pub struct Perceptron {
    side: usize,
    weights: Array1<f32>,
}

impl Perceptron {
    /// Creates a new `Perceptron` with every weight drawn from `[0, 1)`.
    ///
    /// # Arguments
    /// * `side` - The side of the grids to classify.
    /// * `source` - The random source to draw the initial weights from, in index order.
    pub fn new<S: RandomSource + ?Sized>(side: usize, source: &mut S) -> Self {
        let weights = (0..side * side).map(|_| source.uniform01()).collect();
        Self { side, weights }
    }

    /// Creates a new `Perceptron` with the given weights.
    ///
    /// # Returns
    /// `None` if there aren't exactly `side * side` weights.
    pub fn from_weights(side: usize, weights: Vec<f32>) -> Option<Self> {
        if weights.len() != side * side {
            return None;
        }

        Some(Self {
            side,
            weights: Array1::from(weights),
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn weights(&self) -> ArrayView1<'_, f32> {
        self.weights.view()
    }

    /// Computes the dot product between the weights and the flattened grid.
    ///
    /// `grid` must have the same side as the perceptron. A larger or smaller grid is only caught
    /// by a debug assertion, release builds would pair up the overlapping prefix only.
    pub fn predict(&self, grid: &Grid) -> f32 {
        debug_assert_eq!(grid.len(), self.weights.len());

        self.weights
            .iter()
            .zip(grid.iter())
            .map(|(w, x)| w * x as f32)
            .sum()
    }

    /// Applies the perceptron learning rule with a learning rate of 1.
    ///
    /// `grid` must have the same side as the perceptron, same as for `predict`.
    ///
    /// A circle predicted as a square adds the grid onto the weights, a square predicted as a
    /// circle subtracts it. Correct predictions leave the weights untouched.
    ///
    /// # Arguments
    /// * `grid` - The sample that was classified.
    /// * `label` - The sample's true class.
    /// * `prediction` - The output of `predict` for `grid`.
    ///
    /// # Returns
    /// Whether the weights were modified.
    pub fn update(&mut self, grid: &Grid, label: Label, prediction: f32) -> bool {
        debug_assert_eq!(grid.len(), self.weights.len());

        let delta = match (label, Label::from_prediction(prediction)) {
            (Label::Circle, Label::Square) => 1.,
            (Label::Square, Label::Circle) => -1.,
            _ => return false,
        };

        for (w, x) in self.weights.iter_mut().zip(grid.iter()) {
            if x == 1 {
                *w += delta;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        initialization::{RngSource, ScriptedSource},
        raster::{rasterize_circle, rasterize_square},
    };

    const SIDE: usize = 20;

    fn zeros() -> Perceptron {
        Perceptron::from_weights(SIDE, vec![0.; SIDE * SIDE]).unwrap()
    }

    fn block() -> Grid {
        rasterize_square(SIDE, 2, 2, 3, 3).unwrap()
    }

    fn covered(grid: &Grid) -> Vec<usize> {
        grid.iter()
            .enumerate()
            .filter(|&(_, x)| x == 1)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn new_draws_unit_weights() {
        let mut source = RngSource::seeded(42);
        let perceptron = Perceptron::new(SIDE, &mut source);

        assert_eq!(perceptron.weights().len(), SIDE * SIDE);
        assert!(perceptron.weights().iter().all(|w| (0.0..1.0).contains(w)));
    }

    #[test]
    fn new_draws_in_index_order() {
        let mut source = ScriptedSource::new([0.25, 0.5, 0.75]);
        let perceptron = Perceptron::new(2, &mut source);

        assert_eq!(perceptron.weights().to_vec(), [0.25, 0.5, 0.75, 0.25]);
        assert_eq!(source.taken(), 4);
    }

    #[test]
    fn from_weights_checks_len() {
        assert!(Perceptron::from_weights(SIDE, vec![0.; 10]).is_none());
        assert!(Perceptron::from_weights(2, vec![0.; 4]).is_some());
    }

    #[test]
    fn predict_matches_reference() {
        let mut source = RngSource::seeded(3);
        let perceptron = Perceptron::new(SIDE, &mut source);
        let grid = rasterize_circle(SIDE, 8, 11, 5).unwrap();

        let weights = perceptron.weights().to_vec();
        let cells: Vec<u8> = grid.iter().collect();
        let mut expected = 0.;
        for i in 0..SIDE * SIDE {
            expected += weights[i] * cells[i] as f32;
        }

        assert_eq!(perceptron.predict(&grid), expected);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn predict_rejects_a_grid_of_another_side() {
        let grid = rasterize_square(10, 0, 0, 2, 2).unwrap();
        zeros().predict(&grid);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn update_rejects_a_grid_of_another_side() {
        let grid = rasterize_square(10, 0, 0, 2, 2).unwrap();
        zeros().update(&grid, Label::Square, 0.);
    }

    #[test]
    fn zero_weights_predict_zero() {
        assert_eq!(zeros().predict(&block()), 0.);
    }

    #[test]
    fn false_positive_at_zero_subtracts_the_grid() {
        let mut perceptron = zeros();
        let grid = block();

        let prediction = perceptron.predict(&grid);
        assert!(perceptron.update(&grid, Label::Square, prediction));

        let cells = covered(&grid);
        assert_eq!(cells.len(), 9);
        for (i, &w) in perceptron.weights().iter().enumerate() {
            let expected = if cells.contains(&i) { -1. } else { 0. };
            assert_eq!(w, expected, "weight {i}");
        }
    }

    #[test]
    fn circle_at_zero_is_not_a_mistake() {
        let mut perceptron = zeros();
        let grid = block();

        let prediction = perceptron.predict(&grid);
        assert_eq!(prediction, 0.);
        assert!(!perceptron.update(&grid, Label::Circle, prediction));
        assert!(perceptron.weights().iter().all(|&w| w == 0.));
    }

    #[test]
    fn false_negative_adds_the_grid() {
        let mut source = RngSource::seeded(11);
        let mut perceptron = Perceptron::new(SIDE, &mut source);
        let grid = rasterize_circle(SIDE, 10, 10, 3).unwrap();
        let before = perceptron.weights().to_owned();

        assert!(perceptron.update(&grid, Label::Circle, -0.5));

        for ((i, &w), x) in perceptron.weights().iter().enumerate().zip(grid.iter()) {
            if x == 1 {
                assert_eq!(w, before[i] + 1., "weight {i}");
            } else {
                assert_eq!(w, before[i], "weight {i}");
            }
        }
    }

    #[test]
    fn false_positive_subtracts_the_grid() {
        let mut source = RngSource::seeded(12);
        let mut perceptron = Perceptron::new(SIDE, &mut source);
        let grid = rasterize_square(SIDE, 4, 6, 5, 2).unwrap();
        let before = perceptron.weights().to_owned();

        assert!(perceptron.update(&grid, Label::Square, 0.7));

        for ((i, &w), x) in perceptron.weights().iter().enumerate().zip(grid.iter()) {
            if x == 1 {
                assert_eq!(w, before[i] - 1., "weight {i}");
            } else {
                assert_eq!(w, before[i], "weight {i}");
            }
        }
    }

    #[test]
    fn correct_predictions_leave_weights_untouched() {
        let mut source = RngSource::seeded(13);
        let mut perceptron = Perceptron::new(SIDE, &mut source);
        let grid = block();
        let before = perceptron.weights().to_owned();

        assert!(!perceptron.update(&grid, Label::Circle, 2.));
        assert!(!perceptron.update(&grid, Label::Square, -2.));
        assert_eq!(perceptron.weights(), before.view());
    }
}
