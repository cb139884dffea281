use super::RandomSource;

/// A random source that replays a fixed sequence of unit draws, starting over once the
/// sequence is exhausted.
///
/// Every draw is a value in `[0, 1)`. `uniform(lower, upper)` scales the next draw `u` to
/// `lower + u * (upper - lower)`, so a script fully determines every sampled parameter.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<f32>,
    curr: usize,
}

impl ScriptedSource {
    /// Creates a new `ScriptedSource` random source.
    ///
    /// # Arguments
    /// * `draws` - The unit draws to replay, values are clamped into `[0, 1)`.
    pub fn new(draws: impl IntoIterator<Item = f32>) -> Self {
        let draws = draws
            .into_iter()
            .map(|u| u.clamp(0., 1. - f32::EPSILON))
            .collect();

        Self { draws, curr: 0 }
    }

    /// Returns how many draws have been taken so far.
    pub fn taken(&self) -> usize {
        self.curr
    }

    fn next(&mut self) -> f32 {
        if self.draws.is_empty() {
            return 0.;
        }

        let u = self.draws[self.curr % self.draws.len()];
        self.curr += 1;
        u
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, lower: f32, upper: f32) -> f32 {
        let u = self.next();

        if upper <= lower {
            return lower;
        }

        lower + u * (upper - lower)
    }

    fn uniform01(&mut self) -> f32 {
        self.next()
    }
}
