mod random_source;
mod rng;
mod scripted;

pub use random_source::RandomSource;
pub use rng::RngSource;
pub use scripted::ScriptedSource;
