mod label;
mod perceptron;

pub use label::Label;
pub use perceptron::Perceptron;
