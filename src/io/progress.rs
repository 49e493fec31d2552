//! Terminal progress display for stepping runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::algorithm::snapshot::StepSnapshot;
use crate::algorithm::runner::{FinalResult, Outcome};

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix} step {pos} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner that ticks once per published step
///
/// The step count of a run is not known in advance, so this shows a
/// spinner with a running step counter and the latest counters rather than
/// a bar with a length.
pub struct StepProgress {
    bar: ProgressBar,
}

impl StepProgress {
    /// Create a spinner labelled with the algorithm name
    pub fn new(algorithm: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(STEP_STYLE.clone());
        bar.set_prefix(algorithm.to_string());
        Self { bar }
    }

    /// Spinner that draws nothing, for quiet runs and tests
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Advance to the given snapshot
    pub fn update(&self, snapshot: &StepSnapshot) {
        self.bar.set_position(snapshot.step as u64);
        let counters = snapshot.counters;
        self.bar.set_message(format!(
            "cmp {} swp {} sft {} plc {}",
            counters.comparisons, counters.swaps, counters.shifts, counters.placements
        ));
    }

    /// Steps shown so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Stop the spinner with a closing message
    pub fn finish(&self, result: &FinalResult) {
        let message = match result.outcome {
            Outcome::Completed => "completed",
            Outcome::Cancelled => "cancelled",
        };
        self.bar.finish_with_message(message);
    }
}
