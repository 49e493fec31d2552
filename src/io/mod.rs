/// Command-line interface and run orchestration
pub mod cli;
/// Compile-time limits, defaults and canvas geometry
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Subscriber setup for diagnostic logs
pub mod logging;
/// Custom input parsing
pub mod parse;
/// Terminal progress spinner
pub mod progress;
/// Snapshot capture and GIF export
pub mod visualization;
