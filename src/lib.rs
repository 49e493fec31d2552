//! Step-by-step execution of classic sorting, searching and graph traversal algorithms
//!
//! A single runner drives every algorithm one observable unit of work at a
//! time, publishing an immutable snapshot per step, pacing steps with a
//! live-adjustable delay and stopping cooperatively when cancelled. A
//! session wraps the runner with the lifecycle and controls of one
//! interactive page, and a pure render mapping turns snapshots into bars or
//! node-link diagrams.

#![forbid(unsafe_code)]

/// Stepwise algorithms, pacing, cancellation and the runner
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Sequences and graphs operated on by the algorithms
pub mod model;
/// Pure mapping from snapshots to visual attributes
pub mod render;
/// Page lifecycle and controls
pub mod session;

pub use io::error::{AlgoVizError, Result};
