/// Page-level session: data, lifecycle and control handling
pub mod controls;
/// Run lifecycle states and the transition reducer
pub mod state;

pub use controls::{RunHandle, Session};
pub use state::{ControlAvailability, RunEvent, RunState};
