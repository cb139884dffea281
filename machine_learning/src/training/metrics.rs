use std::collections::VecDeque;

use super::StepResult;

/// Amount of trailing steps `recent_accuracy` is computed over.
pub const RECENT_WINDOW: usize = 100;

/// Running counters over the steps of a `TrainingLoop`.
#[derive(Debug, Default, Clone)]
pub struct TrainingMetrics {
    /// Every invocation of `step`.
    pub ticks: u64,
    /// Steps whose shape did not fit the grid.
    pub skipped: u64,
    /// Steps that went through prediction.
    pub trained: u64,
    /// Steps that triggered a weight update.
    pub mistakes: u64,

    recent: VecDeque<bool>,
}

impl TrainingMetrics {
    #[inline]
    pub fn bump_tick(&mut self) {
        self.ticks += 1;
    }

    #[inline]
    pub fn bump_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Accounts for a completed step.
    pub fn record(&mut self, result: &StepResult) {
        self.trained += 1;

        if result.updated {
            self.mistakes += 1;
        }

        if self.recent.len() == RECENT_WINDOW {
            self.recent.pop_front();
        }

        self.recent.push_back(result.is_correct());
    }

    /// Returns the share of completed steps that were classified correctly.
    pub fn accuracy(&self) -> Option<f32> {
        if self.trained == 0 {
            return None;
        }

        Some(1. - self.mistakes as f32 / self.trained as f32)
    }

    /// Returns the share of the last `RECENT_WINDOW` completed steps that were classified
    /// correctly.
    pub fn recent_accuracy(&self) -> Option<f32> {
        if self.recent.is_empty() {
            return None;
        }

        let correct = self.recent.iter().filter(|&&ok| ok).count();
        Some(correct as f32 / self.recent.len() as f32)
    }
}
