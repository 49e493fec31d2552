//! Step publication, counter bookkeeping and the cancellation checkpoint
//!
//! Algorithms never sleep or poll cancellation themselves. They describe
//! each unit of work to a [`Stepper`], which records it, publishes a
//! snapshot, waits out the pace delay and reports whether to keep going.
//! Returning [`ControlFlow::Break`] lets `?` unwind recursive algorithms at
//! the first checkpoint after cancellation.

use std::ops::ControlFlow;

use crate::algorithm::pacing::{CancellationToken, Pace};
use crate::algorithm::snapshot::{Counters, Detail, Highlight, StepKind, StepSnapshot};
use crate::model::Keyed;

/// Outcome of a checkpoint: `Break` once cancellation was observed
pub type Flow<T = ()> = ControlFlow<(), T>;

/// Publishes snapshots and enforces pacing for one run
pub struct Stepper<'a> {
    pace: &'a Pace,
    token: &'a CancellationToken,
    observer: &'a mut dyn FnMut(&StepSnapshot),
    counters: Counters,
    steps: usize,
}

impl<'a> Stepper<'a> {
    /// Create a stepper with zeroed counters
    pub fn new(
        pace: &'a Pace,
        token: &'a CancellationToken,
        observer: &'a mut dyn FnMut(&StepSnapshot),
    ) -> Self {
        Self {
            pace,
            token,
            observer,
            counters: Counters::default(),
            steps: 0,
        }
    }

    /// Counters accumulated so far
    pub const fn counters(&self) -> Counters {
        self.counters
    }

    /// Number of steps published so far
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Stop here if cancellation has been requested
    pub fn checkpoint(&self) -> Flow {
        if self.token.is_cancelled() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    /// Record and publish one step, then wait for the pace delay
    ///
    /// `items` is the working sequence after the step has been applied.
    /// Traversals pass an empty slice.
    pub fn step<T: Keyed>(
        &mut self,
        kind: StepKind,
        items: &[T],
        highlights: Vec<Highlight>,
        detail: Detail,
    ) -> Flow {
        self.counters.record(kind);
        self.steps += 1;

        let snapshot = StepSnapshot {
            step: self.steps,
            kind,
            sequence: items.iter().map(Keyed::key).collect(),
            highlights,
            counters: self.counters,
            detail,
        };
        tracing::trace!(step = self.steps, ?kind, "step published");
        (self.observer)(&snapshot);

        self.pause()
    }

    fn pause(&self) -> Flow {
        self.checkpoint()?;

        let delay = self.pace.delay();
        if !delay.is_zero() && self.token.wait(delay) {
            return ControlFlow::Break(());
        }

        self.checkpoint()
    }
}
