use crate::{arch::Label, raster::Shape};

/// The outcome of a completed training step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    /// Index of the step, skipped steps included.
    pub step: u64,
    pub shape: Shape,
    /// The dot product between the weights and the sample, before the update.
    pub prediction: f32,
    pub label: Label,
    pub predicted: Label,
    /// Whether the weights were modified.
    pub updated: bool,
}

impl StepResult {
    pub fn is_correct(&self) -> bool {
        self.label == self.predicted
    }
}
