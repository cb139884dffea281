mod metrics;
mod sampling;
mod step;
mod training_loop;

pub use metrics::TrainingMetrics;
pub use sampling::ShapeSampling;
pub use step::StepResult;
pub use training_loop::TrainingLoop;
