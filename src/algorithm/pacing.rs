//! Cooperative cancellation and live-adjustable step pacing
//!
//! Runs are paced by sleeping between steps. A sleep waits on the
//! cancellation token rather than the clock alone, so cancelling wakes a
//! pending wait immediately instead of letting a stale timer resume the run.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::io::configuration::{MAX_DELAY_MS, MAX_SPEED, MIN_SPEED};

#[derive(Debug, Default)]
struct TokenState {
    cancelled: Mutex<bool>,
    signal: Condvar,
}

/// Shared flag that asks a run to stop at its next checkpoint
///
/// Clones observe the same flag. Cancellation cannot be undone; each run
/// gets a fresh token.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    state: Arc<TokenState>,
}

impl CancellationToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and wake any pending wait
    pub fn cancel(&self) {
        let mut cancelled = self
            .state
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *cancelled = true;
        self.state.signal.notify_all();
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        *self
            .state
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Sleep for `delay` unless cancelled first
    ///
    /// Returns `true` if the token was cancelled before or during the wait.
    pub fn wait(&self, delay: Duration) -> bool {
        let deadline = Instant::now() + delay;
        let mut cancelled = self
            .state
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        while !*cancelled {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            let (guard, _timeout) = self
                .state
                .signal
                .wait_timeout(cancelled, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            cancelled = guard;
        }
        *cancelled
    }
}

/// Delay between steps, adjustable while a run is in progress
///
/// The runner reads the delay afresh before every wait, so a change takes
/// effect on the next step.
#[derive(Debug, Clone, Default)]
pub struct Pace {
    delay_ms: Arc<AtomicU64>,
}

impl Pace {
    /// Pace with a fixed delay in milliseconds
    pub fn fixed(delay_ms: u64) -> Self {
        Self {
            delay_ms: Arc::new(AtomicU64::new(delay_ms)),
        }
    }

    /// Pace derived from a speed slider setting
    pub fn from_speed(speed: u32) -> Self {
        Self::fixed(delay_for_speed(speed))
    }

    /// Pace with no delay, used for tests and batch runs
    pub fn immediate() -> Self {
        Self::fixed(0)
    }

    /// Current delay
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.load(Ordering::Relaxed))
    }

    /// Replace the delay in milliseconds
    pub fn set_delay_ms(&self, delay_ms: u64) {
        self.delay_ms.store(delay_ms, Ordering::Relaxed);
    }

    /// Replace the delay using a speed slider setting
    pub fn set_speed(&self, speed: u32) {
        self.set_delay_ms(delay_for_speed(speed));
    }
}

/// Map a speed setting to a step delay
///
/// Delay is inversely proportional to speed; speeds outside
/// `MIN_SPEED..=MAX_SPEED` are clamped.
pub fn delay_for_speed(speed: u32) -> u64 {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    MAX_DELAY_MS / u64::from(speed)
}
