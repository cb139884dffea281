use log::{Level, info, log_enabled, trace};
use machine_learning::{Frame, Presenter, TrainingMetrics, display::normalize};
use ndarray::ArrayView1;

/// Characters for increasing weight intensity.
const RAMP: &[u8] = b" .:-=+*#%@";

/// A presenter that writes every step to the log instead of a window.
///
/// Results go out at `info`, the image and the weight map at `trace`.
pub struct LogPresenter {
    report_every: u64,
}

impl LogPresenter {
    /// Creates a new `LogPresenter`.
    ///
    /// # Arguments
    /// * `report_every` - Completed steps between accuracy reports.
    pub fn new(report_every: usize) -> Self {
        Self {
            report_every: report_every.max(1) as u64,
        }
    }

    /// Whether a report is due, counting completed steps and not skipped ones.
    fn report_due(&self, metrics: &TrainingMetrics) -> bool {
        metrics.trained > 0 && metrics.trained % self.report_every == 0
    }

    /// Logs the accuracy so far.
    pub fn report(&self, metrics: &TrainingMetrics) {
        info!(
            ticks = metrics.ticks,
            trained = metrics.trained,
            skipped = metrics.skipped,
            mistakes = metrics.mistakes;
            "accuracy {} overall, {} recently",
            percent(metrics.accuracy()),
            percent(metrics.recent_accuracy()),
        );
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: Frame<'_>) {
        let Frame {
            grid,
            weights,
            result,
            metrics,
        } = frame;

        info!(
            step = result.step,
            label = result.label.value(),
            predicted = result.predicted.value(),
            prediction = result.prediction,
            updated = result.updated;
            "{} classified as {}",
            result.shape,
            result.predicted,
        );

        if log_enabled!(Level::Trace) {
            trace!("image:\n{grid}");
            trace!("weights:\n{}", heatmap(weights, grid.side()));
        }

        if self.report_due(metrics) {
            self.report(metrics);
        }
    }
}

/// Renders the weights as rows of characters, darker for larger weights.
fn heatmap(weights: ArrayView1<f32>, side: usize) -> String {
    let intensities = normalize(weights);
    let mut out = String::with_capacity(intensities.len() + side);

    for (i, x) in intensities.iter().enumerate() {
        let level = (x / 256. * RAMP.len() as f32) as usize;
        out.push(RAMP[level.min(RAMP.len() - 1)] as char);

        if side > 0 && (i + 1) % side == 0 {
            out.push('\n');
        }
    }

    out
}

fn percent(ratio: Option<f32>) -> String {
    match ratio {
        Some(ratio) => format!("{:.1}%", ratio * 100.),
        None => "n/a".to_string(),
    }
}
