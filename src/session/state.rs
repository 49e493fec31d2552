//! Run lifecycle as a pure reducer
//!
//! ```text
//! Idle ──Start──▶ Running ──Finish(Completed)──▶ Completed
//!  ▲  ▲            │  │                              │
//!  │  └──Reset─────┘  └──Pause / Finish(Cancelled)──▶ Cancelled
//!  └────────────── Reset / Regenerate ◀──────────────┘
//! ```
//!
//! A Cancelled run may be started again and resumes from the partially
//! processed data. Completed runs must be reset or regenerated first.

use crate::algorithm::runner::Outcome;
use crate::io::error::{AlgoVizError, Result};

/// Lifecycle phase of a page's run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    /// No run active, data ready
    #[default]
    Idle,
    /// A run is stepping
    Running,
    /// The last run was paused or cancelled before finishing
    Cancelled,
    /// The last run finished
    Completed,
}

/// Lifecycle events fed to [`RunState::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunEvent {
    /// Start control pressed
    Start,
    /// Pause control pressed
    Pause,
    /// The runner returned
    Finish(Outcome),
    /// Reset control pressed
    Reset,
    /// Input replaced by randomize, custom input or a size change
    Regenerate,
}

impl RunEvent {
    /// Name of the control or signal behind the event
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Pause => "pause",
            Self::Finish(_) => "finish",
            Self::Reset => "reset",
            Self::Regenerate => "regenerate",
        }
    }
}

/// Which controls are enabled in a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAvailability {
    /// Start a run
    pub start: bool,
    /// Pause the active run
    pub pause: bool,
    /// Reset to fresh data
    pub reset: bool,
    /// Generate new random data
    pub randomize: bool,
    /// Open the custom input form
    pub custom_input: bool,
    /// Change the generated element count
    pub size: bool,
    /// Change the step delay
    pub speed: bool,
}

impl RunState {
    /// Lower-case name for messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Cancelled => "paused",
            Self::Completed => "completed",
        }
    }

    /// Whether a run is in progress
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// State after `event`
    ///
    /// A `Finish` that arrives after a reset (state `Idle`) is stale and
    /// leaves the state unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoVizError::ControlRejected`] when the event is not
    /// allowed in the current state.
    pub fn apply(self, event: RunEvent) -> Result<Self> {
        let next = match (self, event) {
            (Self::Idle | Self::Cancelled, RunEvent::Start) => Some(Self::Running),
            (Self::Running, RunEvent::Pause | RunEvent::Finish(Outcome::Cancelled))
            | (Self::Cancelled, RunEvent::Finish(Outcome::Cancelled)) => Some(Self::Cancelled),
            (Self::Running | Self::Cancelled, RunEvent::Finish(Outcome::Completed)) => {
                Some(Self::Completed)
            }
            (Self::Idle, RunEvent::Finish(_)) => Some(Self::Idle),
            (_, RunEvent::Reset) | (Self::Idle | Self::Cancelled | Self::Completed, RunEvent::Regenerate) => {
                Some(Self::Idle)
            }
            _ => None,
        };

        next.ok_or(AlgoVizError::ControlRejected {
            control: event.name(),
            state: self.name(),
        })
    }

    /// Controls enabled in this state
    pub const fn controls(self) -> ControlAvailability {
        let running = self.is_running();
        ControlAvailability {
            start: matches!(self, Self::Idle | Self::Cancelled),
            pause: running,
            reset: true,
            randomize: !running,
            custom_input: !running,
            size: !running,
            speed: true,
        }
    }
}
