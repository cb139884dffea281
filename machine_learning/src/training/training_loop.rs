use log::{Level, debug, log_enabled, trace};
use ndarray::ArrayView1;

use super::{ShapeSampling, StepResult, TrainingMetrics};
use crate::{
    arch::{Label, Perceptron},
    initialization::RandomSource,
    presenter::{Frame, Presenter},
    raster::{Grid, Shape},
};

/// Drives the online training of a perceptron on synthetic circles and squares.
///
/// Each call to `step` samples one shape, rasterizes it, classifies it and applies the learning
/// rule. The loop has no notion of time, it's up to the caller to decide when to step.
pub struct TrainingLoop<S: RandomSource> {
    source: S,
    sampling: ShapeSampling,
    perceptron: Perceptron,
    grid: Option<Grid>,
    metrics: TrainingMetrics,
}

impl<S: RandomSource> TrainingLoop<S> {
    /// Creates a new `TrainingLoop` whose perceptron is initialized from `source`.
    ///
    /// # Arguments
    /// * `side` - The side of the generated images.
    /// * `sampling` - The ranges shape parameters are drawn from.
    /// * `source` - The random source for weights, classes and shape parameters.
    pub fn new(side: usize, sampling: ShapeSampling, mut source: S) -> Self {
        let perceptron = Perceptron::new(side, &mut source);
        Self::with_perceptron(perceptron, sampling, source)
    }

    /// Creates a new `TrainingLoop` around an existing perceptron.
    pub fn with_perceptron(perceptron: Perceptron, sampling: ShapeSampling, source: S) -> Self {
        Self {
            source,
            sampling,
            perceptron,
            grid: None,
            metrics: TrainingMetrics::default(),
        }
    }

    pub fn side(&self) -> usize {
        self.perceptron.side()
    }

    pub fn weights(&self) -> ArrayView1<'_, f32> {
        self.perceptron.weights()
    }

    /// Returns the image of the last completed step.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn metrics(&self) -> &TrainingMetrics {
        &self.metrics
    }

    /// Runs a single training step.
    ///
    /// # Returns
    /// The step's outcome, or `None` if the sampled shape didn't fit the grid, in which case
    /// nothing was predicted nor updated.
    pub fn step(&mut self) -> Option<StepResult> {
        let step = self.metrics.ticks;
        self.metrics.bump_tick();

        let shape = self.sample_shape();
        let grid = match shape.rasterize(self.side()) {
            Ok(grid) => grid,
            Err(e) => {
                debug!(step = step; "skipping step: {e}");
                self.metrics.bump_skipped();
                return None;
            }
        };

        if log_enabled!(Level::Trace) {
            trace!("step {step}, {shape}:\n{grid}");
        }

        let label = shape.label();
        let prediction = self.perceptron.predict(&grid);
        let predicted = Label::from_prediction(prediction);
        let updated = self.perceptron.update(&grid, label, prediction);

        let result = StepResult {
            step,
            shape,
            prediction,
            label,
            predicted,
            updated,
        };

        debug!(
            step = step,
            label = label.value(),
            predicted = predicted.value(),
            prediction = prediction,
            updated = updated;
            "trained on {shape}"
        );

        self.metrics.record(&result);
        self.grid = Some(grid);
        Some(result)
    }

    /// Runs a single training step and hands the outcome to `presenter`.
    ///
    /// Skipped steps are not presented.
    pub fn tick<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> Option<StepResult> {
        let result = self.step()?;

        if let Some(grid) = &self.grid {
            presenter.present(Frame {
                grid,
                weights: self.perceptron.weights(),
                result: &result,
                metrics: &self.metrics,
            });
        }

        Some(result)
    }

    /// Picks a class with a fair coin and draws its parameters.
    ///
    /// Draws are taken in this order: the coin, then `center_x`, `center_y`, `radius` for a
    /// circle or `row`, `col`, `width`, `height` for a square.
    fn sample_shape(&mut self) -> Shape {
        let ShapeSampling { position, size } = self.sampling;

        if self.source.uniform01() > 0.5 {
            let center_x = self.draw(position);
            let center_y = self.draw(position);
            let radius = self.draw(size);

            Shape::Circle {
                center_x,
                center_y,
                radius,
            }
        } else {
            let row = self.draw(position);
            let col = self.draw(position);
            let width = self.draw(size);
            let height = self.draw(size);

            Shape::Square {
                row,
                col,
                width,
                height,
            }
        }
    }

    fn draw(&mut self, (lower, upper): (f32, f32)) -> usize {
        // Saturates negative draws at 0.
        self.source.uniform(lower, upper) as usize
    }
}
