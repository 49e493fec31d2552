/// Seeded random sequences, search targets and graphs
pub mod generation;
/// Cancellation token and live-adjustable pacing
pub mod pacing;
/// Parameterised runner selecting among all algorithm variants
pub mod runner;
/// Sorted and unsorted search variants
pub mod searching;
/// Step records consumed by renderers
pub mod snapshot;
/// Sorting variants with per-step snapshots
pub mod sorting;
/// Snapshot publication and cancellation checkpoints
pub mod stepper;
/// Graph traversal
pub mod traversal;
