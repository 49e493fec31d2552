//! Command-line interface running one algorithm end to end

use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::algorithm::runner::{Algorithm, FinalResult, Outcome};
use crate::algorithm::searching::SearchAlgorithm;
use crate::algorithm::sorting::{HeapMode, SortAlgorithm};
use crate::io::configuration::{DEFAULT_SEED, DEFAULT_SPEED, GIF_FRAME_DELAY_MS};
use crate::io::error::Result;
use crate::io::progress::StepProgress;
use crate::io::visualization::SnapshotCapture;
use crate::session::controls::Session;

/// Algorithm names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Bubble sort
    Bubble,
    /// Insertion sort
    Insertion,
    /// Selection sort
    Selection,
    /// Merge sort
    Merge,
    /// Quicksort (Lomuto)
    Quick,
    /// Heap sort, see `--heap-mode`
    Heap,
    /// Counting sort
    Counting,
    /// Radix sort (LSD, base 10)
    Radix,
    /// Linear search
    Linear,
    /// Binary search
    Binary,
    /// Jump search
    Jump,
    /// Exponential search
    Exponential,
    /// Ternary search
    Ternary,
    /// Fibonacci search
    Fibonacci,
    /// Depth-first search on a random graph
    Dfs,
}

impl AlgorithmChoice {
    /// Runner algorithm for this choice
    pub const fn resolve(self, heap_mode: HeapMode) -> Algorithm {
        match self {
            Self::Bubble => Algorithm::Sort(SortAlgorithm::Bubble),
            Self::Insertion => Algorithm::Sort(SortAlgorithm::Insertion),
            Self::Selection => Algorithm::Sort(SortAlgorithm::Selection),
            Self::Merge => Algorithm::Sort(SortAlgorithm::Merge),
            Self::Quick => Algorithm::Sort(SortAlgorithm::Quick),
            Self::Heap => Algorithm::Sort(SortAlgorithm::Heap(heap_mode)),
            Self::Counting => Algorithm::Sort(SortAlgorithm::Counting),
            Self::Radix => Algorithm::Sort(SortAlgorithm::Radix),
            Self::Linear => Algorithm::Search(SearchAlgorithm::Linear),
            Self::Binary => Algorithm::Search(SearchAlgorithm::Binary),
            Self::Jump => Algorithm::Search(SearchAlgorithm::Jump),
            Self::Exponential => Algorithm::Search(SearchAlgorithm::Exponential),
            Self::Ternary => Algorithm::Search(SearchAlgorithm::Ternary),
            Self::Fibonacci => Algorithm::Search(SearchAlgorithm::Fibonacci),
            Self::Dfs => Algorithm::DepthFirst,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "algoviz")]
#[command(
    author,
    version,
    about = "Step through classic sorting, searching and traversal algorithms"
)]
/// Command-line arguments for a single run
pub struct Cli {
    /// Algorithm to run
    #[arg(value_enum, value_name = "ALGORITHM")]
    pub algorithm: AlgorithmChoice,

    /// Comma separated values to use instead of random ones
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    pub values: Option<String>,

    /// Value to search for (searches only)
    #[arg(short, long, allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Number of generated values
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Number of generated graph nodes (dfs only)
    #[arg(long)]
    pub nodes: Option<usize>,

    /// Random seed for reproducible input
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Animation speed, 1 (slowest) to 100 (fastest)
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: u32,

    /// Heap orientation for heap sort
    #[arg(long, value_enum, default_value_t = HeapMode::Max)]
    pub heap_mode: HeapMode,

    /// Cancel the run after this many steps
    #[arg(long, value_name = "STEPS")]
    pub cancel_after: Option<usize>,

    /// Write the run as an animated GIF
    #[arg(long, value_name = "PATH")]
    pub visualize: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Runner algorithm selected by the arguments
    pub const fn selected_algorithm(&self) -> Algorithm {
        self.algorithm.resolve(self.heap_mode)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Summary printed after a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Algorithm display name
    pub algorithm: &'static str,
    /// Input as shown before the run
    pub input: String,
    /// Search target, if any
    pub target: Option<u32>,
    /// Final result of the run
    pub result: FinalResult,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self.result.outcome {
            Outcome::Completed => "completed",
            Outcome::Cancelled => "cancelled",
        };
        writeln!(f, "algorithm:   {}", self.algorithm)?;
        writeln!(f, "input:       {}", self.input)?;
        if let Some(target) = self.target {
            writeln!(f, "target:      {target}")?;
        }
        writeln!(f, "outcome:     {outcome}")?;

        if !self.result.final_sequence.is_empty() {
            writeln!(f, "sequence:    {}", self.result.final_sequence)?;
        }
        if let Some(index) = self.result.found_index() {
            writeln!(f, "found index: {index}")?;
        }
        if !self.result.visit_order.is_empty() {
            let order: Vec<String> = self
                .result
                .visit_order
                .iter()
                .map(ToString::to_string)
                .collect();
            writeln!(f, "visited:     {}", order.join(" -> "))?;
        }

        let counters = self.result.counters;
        write!(
            f,
            "steps:       {} (comparisons {}, swaps {}, shifts {}, placements {}, visits {})",
            self.result.steps,
            counters.comparisons,
            counters.swaps,
            counters.shifts,
            counters.placements,
            counters.visits
        )
    }
}

/// Runs the algorithm selected on the command line
pub struct RunCommand {
    cli: Cli,
}

impl RunCommand {
    /// Create a command from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the run and print its report
    ///
    /// # Errors
    ///
    /// Returns an error if the input is rejected or the GIF cannot be
    /// written.
    // Allow print for the final report, the tool's only output
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let report = self.execute()?;
        println!("{report}");
        Ok(())
    }

    /// Execute the run and return its report
    ///
    /// # Errors
    ///
    /// Returns an error if the input is rejected or the GIF cannot be
    /// written.
    pub fn execute(&self) -> Result<Report> {
        let algorithm = self.cli.selected_algorithm();
        let mut session = self.prepare_session(algorithm)?;

        let input = if algorithm.uses_graph() {
            format!(
                "{} nodes, {} edges",
                session.graph().node_count(),
                session.graph().edges().len()
            )
        } else {
            session.sequence().to_string()
        };
        let target = session.target();

        let mut capture = self.cli.visualize.as_ref().map(|_| {
            if algorithm.uses_graph() {
                SnapshotCapture::for_graph(session.graph())
            } else {
                SnapshotCapture::for_sequence(session.sequence())
            }
        });
        let progress = if self.cli.should_show_progress() {
            StepProgress::new(algorithm.name())
        } else {
            StepProgress::hidden()
        };

        let handle = session.start()?;
        let token = handle.token().clone();
        let cancel_after = self.cli.cancel_after;

        let result = handle.execute(|snapshot| {
            session.observe(snapshot);
            progress.update(snapshot);
            if let Some(capture) = capture.as_mut() {
                capture.record(snapshot);
            }
            if cancel_after.is_some_and(|limit| snapshot.step >= limit) {
                token.cancel();
            }
        })?;
        session.finish(handle.run_id(), result.clone())?;
        progress.finish(&result);

        if let (Some(capture), Some(path)) = (capture.as_mut(), self.cli.visualize.as_ref()) {
            capture.finish(&result);
            capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
        }

        Ok(Report {
            algorithm: algorithm.name(),
            input,
            target,
            result,
        })
    }

    fn prepare_session(&self, algorithm: Algorithm) -> Result<Session> {
        let mut session = Session::new(algorithm, self.cli.seed)?;
        session.set_speed(self.cli.speed)?;

        let size = if algorithm.uses_graph() {
            self.cli.nodes.or(self.cli.size)
        } else {
            self.cli.size
        };
        if let Some(size) = size {
            session.set_size(size)?;
        }

        match (&self.cli.values, &self.cli.target) {
            (Some(values), target) => session.apply_custom_input(values, target.as_deref())?,
            (None, Some(target)) => session.set_target(target)?,
            (None, None) => {}
        }
        Ok(session)
    }
}
