use ndarray::{Array1, ArrayView1};

/// Upper end of the display range.
pub const MAX_INTENSITY: f32 = 255.;

/// Rescales `weights` into `[0, 255]` with min-max normalization.
///
/// The smallest weight maps to 0 and the largest to 255. If every weight is the same (or there
/// are none) the result is all zeros.
pub fn normalize(weights: ArrayView1<f32>) -> Array1<f32> {
    let min = weights.fold(f32::INFINITY, |acc, &w| acc.min(w));
    let max = weights.fold(f32::NEG_INFINITY, |acc, &w| acc.max(w));
    let range = max - min;

    if !(range > 0.) || !range.is_finite() {
        return Array1::zeros(weights.len());
    }

    weights.mapv(|w| MAX_INTENSITY * (w - min) / range)
}
