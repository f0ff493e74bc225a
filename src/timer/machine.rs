//! Pomodoro timer state machine.
//!
//! Owns the current `TimerState`, the completed-interval counter and the
//! settings. Every operation receives `now` explicitly, which keeps the
//! machine a plain value that can be driven by any clock.
//!
//! Invalid transitions (pausing while stopped, continuing while running) are
//! silent no-ops so redundant or racing menu clicks are harmless.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::model::{Settings, TimerState};

/// Whether an operation changed the timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Ignored,
}

impl Transition {
    pub fn changed(self) -> bool {
        self == Transition::Changed
    }
}

/// Emitted by `on_tick` when a running interval elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Counter value after this completion.
    pub passed_intervals: u32,
}

/// The timer and its completed-interval counter.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    settings: Settings,
    state: TimerState,
    passed_intervals: u32,
}

impl PomodoroTimer {
    /// A stopped timer with no completed intervals.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            state: TimerState::Stopped,
            passed_intervals: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn passed_intervals(&self) -> u32 {
        self.passed_intervals
    }

    /// Start a fresh full interval from any state.
    pub fn restart(&mut self, now: Instant) -> Transition {
        self.enter_running(now, self.settings.pomodoro_interval);
        Transition::Changed
    }

    /// Freeze a running interval, keeping what is left of it.
    pub fn pause(&mut self, now: Instant) -> Transition {
        match self.state {
            TimerState::Running { end_time } => {
                let remaining = end_time.saturating_duration_since(now);
                self.set_state(TimerState::Paused { remaining });
                Transition::Changed
            }
            TimerState::Paused { .. } | TimerState::Stopped => Transition::Ignored,
        }
    }

    /// Resume a paused interval from its remaining time.
    pub fn continue_timer(&mut self, now: Instant) -> Transition {
        match self.state {
            TimerState::Paused { remaining } => {
                self.enter_running(now, remaining);
                Transition::Changed
            }
            TimerState::Running { .. } | TimerState::Stopped => Transition::Ignored,
        }
    }

    /// Hotkey action: pause when running, otherwise run.
    ///
    /// Paused resumes from its remaining time; stopped starts a full interval.
    pub fn toggle(&mut self, now: Instant) -> Transition {
        match self.state {
            TimerState::Running { .. } => self.pause(now),
            TimerState::Paused { .. } => self.continue_timer(now),
            TimerState::Stopped => self.restart(now),
        }
    }

    /// Reset the counter and stop, whatever the current state.
    pub fn clear(&mut self) -> Transition {
        self.passed_intervals = 0;
        self.set_state(TimerState::Stopped);
        Transition::Changed
    }

    /// Detect completion of the running interval.
    ///
    /// Level-triggered: compares the end time with `now`, so a late or
    /// coalesced tick still completes the interval exactly once.
    pub fn on_tick(&mut self, now: Instant) -> Option<Completion> {
        match self.state {
            TimerState::Running { end_time } if end_time <= now => {
                self.set_state(TimerState::Stopped);
                self.passed_intervals = self.passed_intervals.saturating_add(1);
                Some(Completion {
                    passed_intervals: self.passed_intervals,
                })
            }
            _ => None,
        }
    }

    /// Time left in the current interval as of `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.state {
            TimerState::Running { end_time } => end_time.saturating_duration_since(now),
            TimerState::Paused { remaining } => remaining,
            TimerState::Stopped => self.settings.pomodoro_interval,
        }
    }

    /// Status bar text, e.g. `"▶ 25m"`.
    pub fn title(&self, now: Instant) -> String {
        let symbols = &self.settings.symbols;
        let symbol = match self.state {
            TimerState::Running { .. } => &symbols.running,
            TimerState::Paused { .. } => &symbols.paused,
            TimerState::Stopped => &symbols.stopped,
        };
        format!(
            "{} {}",
            symbol,
            self.settings.format_remaining(self.remaining(now))
        )
    }

    /// Text of the counter menu entry, e.g. `"2 interval(s) passed"`.
    pub fn passed_label(&self) -> String {
        passed_label(self.passed_intervals)
    }

    fn enter_running(&mut self, now: Instant, remaining: Duration) {
        self.set_state(TimerState::Running {
            end_time: now + remaining,
        });
    }

    fn set_state(&mut self, next: TimerState) {
        debug!(from = self.state.name(), to = next.name(), "timer transition");
        self.state = next;
    }
}

/// `"{count} interval(s) passed"`.
pub fn passed_label(count: u32) -> String {
    format!("{count} interval(s) passed")
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Duration = Duration::from_secs(60);

    fn timer() -> PomodoroTimer {
        PomodoroTimer::new(Settings::default())
    }

    #[test]
    fn test_new_timer_is_stopped_and_empty() {
        let t = timer();
        assert_eq!(t.state(), TimerState::Stopped);
        assert_eq!(t.passed_intervals(), 0);
    }

    #[test]
    fn test_restart_sets_end_time() {
        let now = Instant::now();
        let mut t = timer();
        assert!(t.restart(now).changed());
        assert_eq!(
            t.state(),
            TimerState::Running {
                end_time: now + 25 * MIN
            }
        );
    }

    #[test]
    fn test_pause_records_remaining() {
        let now = Instant::now();
        let mut t = timer();
        t.restart(now);
        t.pause(now + 5 * MIN);
        assert_eq!(
            t.state(),
            TimerState::Paused {
                remaining: 20 * MIN
            }
        );
    }

    #[test]
    fn test_pause_after_end_saturates_to_zero() {
        let now = Instant::now();
        let mut t = timer();
        t.restart(now);
        t.pause(now + 30 * MIN);
        assert_eq!(
            t.state(),
            TimerState::Paused {
                remaining: Duration::ZERO
            }
        );
    }

    #[test]
    fn test_continue_recomputes_end_time() {
        let now = Instant::now();
        let mut t = timer();
        t.restart(now);
        t.pause(now + 5 * MIN);
        t.continue_timer(now + 60 * MIN);
        assert_eq!(
            t.state(),
            TimerState::Running {
                end_time: now + 80 * MIN
            }
        );
    }

    #[test]
    fn test_continue_ignored_unless_paused() {
        let now = Instant::now();
        let mut t = timer();
        assert_eq!(t.continue_timer(now), Transition::Ignored);
        t.restart(now);
        let before = t.state();
        assert_eq!(t.continue_timer(now + MIN), Transition::Ignored);
        assert_eq!(t.state(), before);
    }

    #[test]
    fn test_tick_before_end_does_nothing() {
        let now = Instant::now();
        let mut t = timer();
        t.restart(now);
        assert_eq!(t.on_tick(now + 24 * MIN), None);
        assert!(t.state().is_running());
    }

    #[test]
    fn test_tick_at_exact_end_completes() {
        let now = Instant::now();
        let mut t = timer();
        t.restart(now);
        assert_eq!(
            t.on_tick(now + 25 * MIN),
            Some(Completion {
                passed_intervals: 1
            })
        );
        assert!(t.state().is_stopped());
    }

    #[test]
    fn test_tick_while_paused_never_completes() {
        let now = Instant::now();
        let mut t = timer();
        t.restart(now);
        t.pause(now + MIN);
        assert_eq!(t.on_tick(now + 120 * MIN), None);
        assert!(t.state().is_paused());
    }

    #[test]
    fn test_titles_per_state() {
        let now = Instant::now();
        let mut t = timer();
        assert_eq!(t.title(now), "⏹ 25m");
        t.restart(now);
        assert_eq!(t.title(now + Duration::from_secs(10)), "▶ 25m");
        assert_eq!(t.title(now + 10 * MIN), "▶ 15m");
        t.pause(now + 10 * MIN + Duration::from_secs(30));
        assert_eq!(t.title(now + 90 * MIN), "⏸ 15m");
    }

    #[test]
    fn test_title_after_end_reads_zero() {
        let now = Instant::now();
        let mut t = timer();
        t.restart(now);
        assert_eq!(t.title(now + 26 * MIN), "▶ 0m");
    }

    #[test]
    fn test_passed_label() {
        assert_eq!(passed_label(0), "0 interval(s) passed");
        assert_eq!(passed_label(3), "3 interval(s) passed");
    }
}
