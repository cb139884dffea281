pub mod arch;
pub mod display;
pub mod error;
pub mod initialization;
pub mod presenter;
pub mod raster;
pub mod training;

pub use arch::{Label, Perceptron};
pub use error::{MlErr, Result};
pub use initialization::{RandomSource, RngSource, ScriptedSource};
pub use presenter::{Frame, Presenter};
pub use raster::{Grid, Shape};
pub use training::{ShapeSampling, StepResult, TrainingLoop, TrainingMetrics};
