//! Timer state union (pure Rust, no FFI).

use std::time::{Duration, Instant};

/// The single active timer situation.
///
/// Running keeps an absolute end time rather than a countdown, so late or
/// coalesced ticks never shorten the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    /// Counting down toward `end_time`.
    Running { end_time: Instant },
    /// Frozen with `remaining` left.
    Paused { remaining: Duration },
    /// No active interval.
    #[default]
    Stopped,
}

impl TimerState {
    pub fn is_running(&self) -> bool {
        matches!(self, TimerState::Running { .. })
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, TimerState::Paused { .. })
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, TimerState::Stopped)
    }

    /// Short lowercase name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            TimerState::Running { .. } => "running",
            TimerState::Paused { .. } => "paused",
            TimerState::Stopped => "stopped",
        }
    }
}
