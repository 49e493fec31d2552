//! Stepwise algorithm runner
//!
//! One runner covers every supported algorithm. It checks pre-conditions,
//! takes an exclusive working copy of the input, drives the selected
//! algorithm through a [`Stepper`], and reports how the run ended. Once the
//! first step has been taken the runner has no failure path: an empty
//! input, an absent target or an unreachable node are all normal endings.

use std::ops::ControlFlow;

use crate::algorithm::pacing::{CancellationToken, Pace};
use crate::algorithm::searching::{self, SearchAlgorithm};
use crate::algorithm::snapshot::{Counters, StepSnapshot};
use crate::algorithm::sorting::{self, SortAlgorithm};
use crate::algorithm::stepper::Stepper;
use crate::algorithm::traversal;
use crate::io::configuration::MAX_COUNTING_VALUE;
use crate::io::error::{Result, invalid_input};
use crate::model::{Graph, Sequence};

/// Algorithm selected for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Sort a sequence
    Sort(SortAlgorithm),
    /// Search a sequence for a target
    Search(SearchAlgorithm),
    /// Depth-first traversal of a graph
    DepthFirst,
}

impl Algorithm {
    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sort(kind) => kind.name(),
            Self::Search(kind) => kind.name(),
            Self::DepthFirst => "depth-first search",
        }
    }

    /// Whether the algorithm operates on a graph rather than a sequence
    pub const fn uses_graph(self) -> bool {
        matches!(self, Self::DepthFirst)
    }

    /// Whether the algorithm needs a target value
    pub const fn needs_target(self) -> bool {
        matches!(self, Self::Search(_))
    }

    /// Whether input must be sorted before the run starts
    pub const fn requires_sorted_input(self) -> bool {
        match self {
            Self::Search(kind) => kind.requires_sorted(),
            Self::Sort(_) | Self::DepthFirst => false,
        }
    }
}

/// Data a run operates on
#[derive(Debug, Clone, PartialEq)]
pub enum RunInput {
    /// Sequence for sorts and searches
    Sequence {
        /// Values to sort or search
        values: Sequence,
        /// Value to locate, searches only
        target: Option<u32>,
    },
    /// Graph for traversals
    Graph {
        /// Graph to traverse
        graph: Graph,
        /// Node the traversal starts from
        root: usize,
    },
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The algorithm ran to its natural end
    Completed,
    /// Cancellation stopped the run at a checkpoint
    Cancelled,
}

/// Result of a search that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchVerdict {
    /// Target located at this index
    Found(usize),
    /// Search space exhausted without a match
    NotFound,
}

/// Final state of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalResult {
    /// How the run ended
    pub outcome: Outcome,
    /// Working sequence when the run stopped (empty for traversals)
    pub final_sequence: Sequence,
    /// Search verdict, present only for completed searches
    pub verdict: Option<SearchVerdict>,
    /// Nodes in visit order, traversals only
    pub visit_order: Vec<usize>,
    /// Counters after the last step
    pub counters: Counters,
    /// Number of steps published
    pub steps: usize,
}

impl FinalResult {
    /// Search result as an index, `-1` when not found
    ///
    /// `None` for sorts, traversals and cancelled searches.
    pub fn found_index(&self) -> Option<i64> {
        self.verdict.map(|verdict| match verdict {
            SearchVerdict::Found(index) => i64::try_from(index).unwrap_or(i64::MAX),
            SearchVerdict::NotFound => -1,
        })
    }

    /// Whether the run reached its natural end
    pub fn is_completed(&self) -> bool {
        self.outcome == Outcome::Completed
    }
}

/// Executes one algorithm step by step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runner {
    algorithm: Algorithm,
}

impl Runner {
    /// Create a runner for `algorithm`
    pub const fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// Algorithm this runner executes
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Run the algorithm over `input`
    ///
    /// `on_step` is called once per step, in order, with a snapshot taken
    /// after the step was applied. Between steps the runner waits for the
    /// current `pace` delay. `token` is checked before the first step and
    /// around every wait; once cancelled the run stops at the next
    /// checkpoint and reports [`Outcome::Cancelled`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::AlgoVizError::InvalidInput`] before any step runs if
    /// the input does not suit the algorithm: a sequence for a traversal, a
    /// graph for a sort or search, a search without target, unsorted input
    /// for a sorted-input search, or a root outside the graph.
    pub fn run<F>(
        &self,
        input: &RunInput,
        pace: &Pace,
        mut on_step: F,
        token: &CancellationToken,
    ) -> Result<FinalResult>
    where
        F: FnMut(&StepSnapshot),
    {
        self.validate(input)?;

        let span = tracing::info_span!("run", algorithm = self.algorithm.name());
        let _entered = span.enter();
        tracing::info!(delay_ms = pace.delay().as_millis() as u64, "run started");

        let mut stepper = Stepper::new(pace, token, &mut on_step);
        let mut verdict = None;
        let mut visit_order = Vec::new();

        let (flow, final_sequence) = match (self.algorithm, input) {
            (Algorithm::Sort(kind), RunInput::Sequence { values, .. }) => {
                let mut working = values.values().to_vec();
                let flow = sorting::sort(kind, &mut working, &mut stepper);
                (flow, Sequence::new(working))
            }
            (Algorithm::Search(kind), RunInput::Sequence { values, target }) => {
                let target = target.unwrap_or_default();
                let flow = searching::search(kind, values.values(), target, &mut stepper);
                let flow = match flow {
                    ControlFlow::Continue(found) => {
                        verdict = Some(found.map_or(SearchVerdict::NotFound, SearchVerdict::Found));
                        ControlFlow::Continue(())
                    }
                    ControlFlow::Break(()) => ControlFlow::Break(()),
                };
                (flow, values.clone())
            }
            (Algorithm::DepthFirst, RunInput::Graph { graph, root }) => {
                let flow = match traversal::depth_first(graph, *root, &mut stepper) {
                    ControlFlow::Continue(order) => {
                        visit_order = order;
                        ControlFlow::Continue(())
                    }
                    ControlFlow::Break(()) => ControlFlow::Break(()),
                };
                (flow, Sequence::empty())
            }
            _ => return Err(invalid_input(&"input does not match the algorithm")),
        };

        let outcome = if flow.is_break() {
            Outcome::Cancelled
        } else {
            Outcome::Completed
        };

        let result = FinalResult {
            outcome,
            final_sequence,
            verdict,
            visit_order,
            counters: stepper.counters(),
            steps: stepper.steps(),
        };
        tracing::info!(
            ?outcome,
            steps = result.steps,
            comparisons = result.counters.comparisons,
            "run finished"
        );
        Ok(result)
    }

    fn validate(&self, input: &RunInput) -> Result<()> {
        match (self.algorithm, input) {
            (Algorithm::Sort(SortAlgorithm::Counting), RunInput::Sequence { values, .. }) => {
                match values.max_value() {
                    Some(max) if max > MAX_COUNTING_VALUE => Err(invalid_input(&format!(
                        "counting sort needs values of at most {MAX_COUNTING_VALUE}, got {max}"
                    ))),
                    _ => Ok(()),
                }
            }
            (Algorithm::Sort(_), RunInput::Sequence { .. }) => Ok(()),
            (Algorithm::Search(kind), RunInput::Sequence { values, target }) => {
                if target.is_none() {
                    return Err(invalid_input(&format!("{} needs a target", kind.name())));
                }
                if kind.requires_sorted() && !values.is_sorted() {
                    return Err(invalid_input(&format!(
                        "{} needs input sorted in non-decreasing order",
                        kind.name()
                    )));
                }
                Ok(())
            }
            (Algorithm::DepthFirst, RunInput::Graph { graph, root }) => {
                if *root >= graph.node_count() && graph.node_count() > 0 {
                    return Err(invalid_input(&format!(
                        "root {root} is outside a graph of {} nodes",
                        graph.node_count()
                    )));
                }
                Ok(())
            }
            (Algorithm::DepthFirst, RunInput::Sequence { .. }) => {
                Err(invalid_input(&"depth-first search needs a graph"))
            }
            (Algorithm::Sort(_) | Algorithm::Search(_), RunInput::Graph { .. }) => Err(
                invalid_input(&format!("{} needs a sequence", self.algorithm.name())),
            ),
        }
    }
}
