use ndarray::ArrayView1;

use crate::{
    raster::Grid,
    training::{StepResult, TrainingMetrics},
};

/// Everything a presenter may display after a completed step.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// The image the perceptron was just trained on.
    pub grid: &'a Grid,
    /// The weights after the update.
    pub weights: ArrayView1<'a, f32>,
    pub result: &'a StepResult,
    pub metrics: &'a TrainingMetrics,
}

/// The display side of the training loop.
///
/// A presenter owns the clock: it decides when `TrainingLoop::tick` is called and when to stop
/// calling it. The loop only hands it a `Frame` for every completed step.
pub trait Presenter {
    fn present(&mut self, frame: Frame<'_>);
}
