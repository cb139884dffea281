/// A `RandomSource` supplies the uniform draws used to initialize weights, pick the class of each
/// sample and sample the shape parameters.
pub trait RandomSource {
    /// Draws a value uniformly from `[lower, upper)`.
    ///
    /// # Arguments
    /// * `lower` - The inclusive lower limit.
    /// * `upper` - The exclusive upper limit.
    ///
    /// # Returns
    /// The drawn value, or `lower` if the range is empty.
    fn uniform(&mut self, lower: f32, upper: f32) -> f32;

    /// Draws a value uniformly from `[0, 1)`.
    fn uniform01(&mut self) -> f32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn uniform(&mut self, lower: f32, upper: f32) -> f32 {
        (**self).uniform(lower, upper)
    }

    fn uniform01(&mut self) -> f32 {
        (**self).uniform01()
    }
}
