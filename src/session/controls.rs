//! One interactive page: data, run lifecycle and controls
//!
//! The session owns the page's sequence or graph, the current snapshot and
//! the run state. Controls go through [`RunState::apply`], which enforces
//! that at most one run is active. Starting a run hands out a
//! [`RunHandle`] owning a working copy of the input, so the run can execute
//! on whichever thread drives the animation while the session stays
//! available for pause and speed changes.

use crate::algorithm::generation::InputGenerator;
use crate::algorithm::pacing::{CancellationToken, Pace};
use crate::algorithm::runner::{Algorithm, FinalResult, RunInput, Runner};
use crate::algorithm::snapshot::StepSnapshot;
use crate::io::configuration::{
    DEFAULT_NODE_COUNT, DEFAULT_SIZE, DEFAULT_SPEED, MAX_NODE_COUNT, MAX_SIZE, MAX_SPEED, MAX_VALUE,
    MIN_SIZE, MIN_SPEED, TRAVERSAL_ROOT,
};
use crate::io::error::{AlgoVizError, Result, invalid_parameter};
use crate::io::parse::{InputLimits, parse_custom_sequence, parse_target};
use crate::model::{Graph, Sequence};
use crate::session::state::{ControlAvailability, RunEvent, RunState};

/// Everything a started run needs, detached from the session
#[derive(Debug, Clone)]
pub struct RunHandle {
    run_id: u64,
    runner: Runner,
    input: RunInput,
    pace: Pace,
    token: CancellationToken,
}

impl RunHandle {
    /// Identifier matching this run to [`Session::finish`]
    pub const fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Token that cancels this run
    pub const fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Input snapshot the run operates on
    pub const fn input(&self) -> &RunInput {
        &self.input
    }

    /// Execute the run to completion or cancellation
    ///
    /// # Errors
    ///
    /// Propagates runner pre-condition errors.
    pub fn execute<F>(&self, on_step: F) -> Result<FinalResult>
    where
        F: FnMut(&StepSnapshot),
    {
        self.runner.run(&self.input, &self.pace, on_step, &self.token)
    }
}

/// Page-level state for one algorithm
pub struct Session {
    algorithm: Algorithm,
    state: RunState,
    sequence: Sequence,
    graph: Graph,
    target: Option<u32>,
    size: usize,
    speed: u32,
    pace: Pace,
    generator: InputGenerator,
    limits: InputLimits,
    token: Option<CancellationToken>,
    snapshot: Option<StepSnapshot>,
    result: Option<FinalResult>,
    run_id: u64,
}

impl Session {
    /// Open a page for `algorithm` with freshly generated data
    ///
    /// # Errors
    ///
    /// Returns an error if the initial graph cannot be generated.
    pub fn new(algorithm: Algorithm, seed: u64) -> Result<Self> {
        let size = if algorithm.uses_graph() {
            DEFAULT_NODE_COUNT
        } else {
            DEFAULT_SIZE
        };

        let mut session = Self {
            algorithm,
            state: RunState::Idle,
            sequence: Sequence::empty(),
            graph: Graph::new(Vec::new(), &[])?,
            target: None,
            size,
            speed: DEFAULT_SPEED,
            pace: Pace::from_speed(DEFAULT_SPEED),
            generator: InputGenerator::new(seed),
            limits: InputLimits::default(),
            token: None,
            snapshot: None,
            result: None,
            run_id: 0,
        };
        session.regenerate()?;
        Ok(session)
    }

    /// Algorithm shown on this page
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Current lifecycle phase
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Controls enabled right now
    pub const fn controls(&self) -> ControlAvailability {
        self.state.controls()
    }

    /// Current sequence (empty on traversal pages)
    pub const fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Current graph (empty on sequence pages)
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Search target, if this is a search page
    pub const fn target(&self) -> Option<u32> {
        self.target
    }

    /// Element count used for generated data
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Current speed setting
    pub const fn speed(&self) -> u32 {
        self.speed
    }

    /// Shared pace read by active runs
    pub const fn pace(&self) -> &Pace {
        &self.pace
    }

    /// Latest snapshot of the active or last run
    pub const fn snapshot(&self) -> Option<&StepSnapshot> {
        self.snapshot.as_ref()
    }

    /// Result of the last finished run
    pub const fn result(&self) -> Option<&FinalResult> {
        self.result.as_ref()
    }

    /// Replace the input validation limits
    ///
    /// The accepted maximum is capped at [`MAX_VALUE`], the largest value
    /// every algorithm on a page can take.
    pub fn set_limits(&mut self, limits: InputLimits) {
        self.limits = InputLimits {
            max_value: limits.max_value.min(MAX_VALUE),
            ..limits
        };
    }

    /// Start a run over the current data
    ///
    /// # Errors
    ///
    /// Rejected while a run is active or after completion.
    pub fn start(&mut self) -> Result<RunHandle> {
        let next = self.transition(RunEvent::Start)?;

        self.run_id += 1;
        let token = CancellationToken::new();
        self.token = Some(token.clone());
        self.snapshot = None;
        self.result = None;
        self.state = next;
        tracing::info!(run_id = self.run_id, algorithm = self.algorithm.name(), "start");

        Ok(RunHandle {
            run_id: self.run_id,
            runner: Runner::new(self.algorithm),
            input: self.run_input(),
            pace: self.pace.clone(),
            token,
        })
    }

    /// Record the latest snapshot for renderers
    pub fn observe(&mut self, snapshot: &StepSnapshot) {
        self.snapshot = Some(snapshot.clone());
    }

    /// Apply a run's final result
    ///
    /// Results from a run superseded by a reset are ignored. A completed
    /// or cancelled sort leaves its working sequence in place, so a
    /// cancelled run resumes from where it stopped.
    ///
    /// # Errors
    ///
    /// Rejected if no run was in progress.
    pub fn finish(&mut self, run_id: u64, result: FinalResult) -> Result<()> {
        if run_id != self.run_id || self.state == RunState::Idle {
            tracing::debug!(run_id, "ignoring result of a superseded run");
            return Ok(());
        }

        self.state = self.transition(RunEvent::Finish(result.outcome))?;
        self.token = None;
        if matches!(self.algorithm, Algorithm::Sort(_)) {
            self.sequence = result.final_sequence.clone();
        }
        self.result = Some(result);
        Ok(())
    }

    /// Start a run and execute it on the current thread
    ///
    /// # Errors
    ///
    /// Propagates start rejections and runner pre-condition errors.
    pub fn run_to_end<F>(&mut self, mut on_step: F) -> Result<FinalResult>
    where
        F: FnMut(&StepSnapshot),
    {
        let handle = self.start()?;
        let outcome = handle.execute(|snapshot| {
            self.snapshot = Some(snapshot.clone());
            on_step(snapshot);
        });

        match outcome {
            Ok(result) => {
                self.finish(handle.run_id(), result.clone())?;
                Ok(result)
            }
            Err(error) => {
                self.state = RunState::Idle;
                self.token = None;
                Err(error)
            }
        }
    }

    /// Pause the active run
    ///
    /// A sort page keeps the partially sorted sequence of the latest
    /// snapshot, so a Start issued before the cancelled run reports back
    /// still resumes from where the bars stopped.
    ///
    /// # Errors
    ///
    /// Rejected when no run is active.
    pub fn pause(&mut self) -> Result<()> {
        self.state = self.transition(RunEvent::Pause)?;
        if let Some(token) = self.token.take() {
            token.cancel();
        }
        if let (Algorithm::Sort(_), Some(snapshot)) = (self.algorithm, self.snapshot.as_ref()) {
            self.sequence = Sequence::new(snapshot.sequence.clone());
        }
        Ok(())
    }

    /// Cancel any run and return to Idle with fresh data
    ///
    /// # Errors
    ///
    /// Returns an error only if graph generation fails.
    pub fn reset(&mut self) -> Result<()> {
        self.state = self.transition(RunEvent::Reset)?;
        if let Some(token) = self.token.take() {
            token.cancel();
        }
        self.regenerate()
    }

    /// Replace the data with new random values
    ///
    /// # Errors
    ///
    /// Rejected while a run is active.
    pub fn randomize(&mut self) -> Result<()> {
        self.state = self.transition(RunEvent::Regenerate)?;
        self.regenerate()
    }

    /// Change the number of generated elements and regenerate
    ///
    /// # Errors
    ///
    /// Rejected while a run is active or when `size` is outside the
    /// slider range.
    pub fn set_size(&mut self, size: usize) -> Result<()> {
        let (min, max) = if self.algorithm.uses_graph() {
            (1, MAX_NODE_COUNT)
        } else {
            (MIN_SIZE, MAX_SIZE)
        };
        if !(min..=max).contains(&size) {
            return Err(invalid_parameter(
                "size",
                &size,
                &format!("must be between {min} and {max}"),
            ));
        }

        let next = self.transition(RunEvent::Regenerate)?;
        self.size = size;
        self.state = next;
        self.regenerate()
    }

    /// Change the speed setting; applies to the next step of an active run
    ///
    /// # Errors
    ///
    /// Returns an error when `speed` is outside the slider range.
    pub fn set_speed(&mut self, speed: u32) -> Result<()> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(invalid_parameter(
                "speed",
                &speed,
                &format!("must be between {MIN_SPEED} and {MAX_SPEED}"),
            ));
        }
        self.speed = speed;
        self.pace.set_speed(speed);
        Ok(())
    }

    /// Replace the sequence (and target) with user supplied values
    ///
    /// Searches that need sorted input get their values sorted. On any
    /// error the session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed input, or a rejection
    /// while a run is active or on a traversal page.
    pub fn apply_custom_input(&mut self, values: &str, target: Option<&str>) -> Result<()> {
        if self.algorithm.uses_graph() {
            return Err(AlgoVizError::ControlRejected {
                control: "custom input",
                state: "showing a graph",
            });
        }
        let next = self.transition(RunEvent::Regenerate)?;

        let mut sequence = parse_custom_sequence(values, &self.limits)?;
        let parsed_target = if self.algorithm.needs_target() {
            Some(parse_target(target.unwrap_or_default(), &self.limits)?)
        } else {
            None
        };
        if self.algorithm.requires_sorted_input() {
            sequence = sequence.sorted();
        }

        self.sequence = sequence;
        self.target = parsed_target;
        self.state = next;
        self.clear_run();
        Ok(())
    }

    /// Replace only the search target, keeping the current values
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed target, or a rejection
    /// while a run is active or on a page without a target.
    pub fn set_target(&mut self, target: &str) -> Result<()> {
        if !self.algorithm.needs_target() {
            return Err(AlgoVizError::ControlRejected {
                control: "target",
                state: "not searching",
            });
        }
        let next = self.transition(RunEvent::Regenerate)?;

        self.target = Some(parse_target(target, &self.limits)?);
        self.state = next;
        self.clear_run();
        Ok(())
    }

    fn transition(&self, event: RunEvent) -> Result<RunState> {
        self.state
            .apply(event)
            .inspect(|next| {
                tracing::debug!(
                    event = event.name(),
                    from = self.state.name(),
                    to = next.name(),
                    "transition"
                );
            })
            .inspect_err(|error| {
                tracing::warn!(%error, "control rejected");
            })
    }

    fn clear_run(&mut self) {
        self.token = None;
        self.snapshot = None;
        self.result = None;
    }

    fn regenerate(&mut self) -> Result<()> {
        self.clear_run();

        if self.algorithm.uses_graph() {
            self.graph = self.generator.random_graph(self.size)?;
            self.sequence = Sequence::empty();
            self.target = None;
            return Ok(());
        }

        self.sequence = if self.algorithm.requires_sorted_input() {
            self.generator.random_sorted_sequence(self.size)
        } else {
            self.generator.random_sequence(self.size)
        };
        self.target = self
            .algorithm
            .needs_target()
            .then(|| self.generator.random_target(&self.sequence));
        Ok(())
    }

    fn run_input(&self) -> RunInput {
        if self.algorithm.uses_graph() {
            RunInput::Graph {
                graph: self.graph.clone(),
                root: TRAVERSAL_ROOT,
            }
        } else {
            RunInput::Sequence {
                values: self.sequence.clone(),
                target: self.target,
            }
        }
    }
}
