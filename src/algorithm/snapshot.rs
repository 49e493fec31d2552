//! Immutable step records published by the runner
//!
//! A [`StepSnapshot`] describes one paused instant of an algorithm. The
//! runner builds a fresh snapshot for every step and hands it to the
//! observer by reference; nothing mutates a snapshot once published.

/// What kind of unit of work a step represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Two values were compared
    Compare,
    /// Two positions exchanged their values
    Swap,
    /// A key was moved left past a block of larger values
    Shift,
    /// A merged run was written back into the sequence
    Merge,
    /// A counting sort tally was incremented
    Count,
    /// One prefix-sum step of counting sort
    Accumulate,
    /// A value was written to its output slot or bucket
    Place,
    /// One radix bucket was drained into the collected list
    Collect,
    /// The finished output replaced the working sequence
    Copy,
    /// A search probed one position
    Probe,
    /// A traversal popped and visited a node
    Visit,
}

/// Role of a highlighted position, used for colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Being compared
    Comparing,
    /// Being swapped or moved
    Swapping,
    /// Quicksort pivot
    Pivot,
    /// Current minimum candidate in selection sort
    Minimum,
    /// Being written to its final slot
    Placing,
    /// Search probe position
    Probe,
    /// Search interval boundary
    Bound,
    /// Search hit
    Found,
    /// Already in final sorted position
    Sorted,
    /// Node already visited
    Visited,
    /// Node currently being visited
    Current,
}

/// A position paired with its role in the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Highlight {
    /// Index into the sequence, or node id for traversals
    pub index: usize,
    /// Why the position is highlighted
    pub role: Role,
}

impl Highlight {
    /// Create a highlight
    pub const fn new(index: usize, role: Role) -> Self {
        Self { index, role }
    }
}

/// Monotonic per-run work counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Value comparisons, including search probes
    pub comparisons: u64,
    /// Two-position exchanges
    pub swaps: u64,
    /// Insertions that relocated a key
    pub shifts: u64,
    /// Writes into output arrays or buckets
    pub placements: u64,
    /// Graph nodes visited
    pub visits: u64,
}

impl Counters {
    /// Record one step of the given kind
    pub const fn record(&mut self, kind: StepKind) {
        match kind {
            StepKind::Compare | StepKind::Probe => self.comparisons += 1,
            StepKind::Swap => self.swaps += 1,
            StepKind::Shift => self.shifts += 1,
            StepKind::Place => self.placements += 1,
            StepKind::Visit => self.visits += 1,
            StepKind::Merge
            | StepKind::Count
            | StepKind::Accumulate
            | StepKind::Collect
            | StepKind::Copy => {}
        }
    }
}

/// One range visited by a divide-and-conquer sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionNode {
    /// First index of the range (inclusive)
    pub low: usize,
    /// Last index of the range (inclusive)
    pub high: usize,
    /// Recursion depth, zero for the whole sequence
    pub depth: usize,
    /// Range contents when the node was recorded
    pub values: Vec<u32>,
}

/// Algorithm-specific state shown next to the bars
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Detail {
    /// Nothing beyond the sequence and highlights
    #[default]
    None,

    /// Partition tree accumulated by merge sort or quicksort
    Partitions {
        /// Ranges in the order they were entered
        nodes: Vec<PartitionNode>,
        /// Range the current step works on
        active: Option<(usize, usize)>,
    },

    /// Counting sort tallies and output array
    Counting {
        /// Tally (or prefix sum) per value
        counts: Vec<usize>,
        /// Output slots, `None` until placed
        output: Vec<Option<u32>>,
    },

    /// Radix sort buckets for the current digit
    Radix {
        /// Place value of the digit being sorted on (1, 10, 100, ...)
        place: u32,
        /// Ten buckets, one per digit
        buckets: Vec<Vec<u32>>,
        /// Values drained from buckets so far in this pass
        collected: Vec<u32>,
    },

    /// Remaining search interval
    Search {
        /// Lowest index still under consideration
        low: usize,
        /// Highest index still under consideration, `None` once empty
        high: Option<usize>,
        /// Target value
        target: u32,
    },

    /// Depth-first traversal bookkeeping
    Traversal {
        /// Visited nodes in visit order
        visited: Vec<usize>,
        /// Explicit stack, bottom first
        stack: Vec<usize>,
    },
}

/// Immutable record of one paused instant of an algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSnapshot {
    /// 1-based step number within the run
    pub step: usize,
    /// Unit of work this step performed
    pub kind: StepKind,
    /// Working sequence after the step (empty for traversals)
    pub sequence: Vec<u32>,
    /// Positions involved in the step
    pub highlights: Vec<Highlight>,
    /// Counters after the step
    pub counters: Counters,
    /// Algorithm-specific state
    pub detail: Detail,
}

impl StepSnapshot {
    /// Role of `index` in this step, if highlighted
    ///
    /// When a position carries several roles the last one wins, matching
    /// the order algorithms push highlights (most specific last).
    pub fn role_of(&self, index: usize) -> Option<Role> {
        self.highlights
            .iter()
            .rev()
            .find(|h| h.index == index)
            .map(|h| h.role)
    }
}
