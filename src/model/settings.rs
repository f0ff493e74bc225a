//! Immutable timer configuration (pure Rust, no FFI).
//!
//! Everything here is compiled in; `Settings::default()` gathers the
//! constants from `constants` into one value handed to the timer at startup.

use std::time::Duration;

use super::constants::*;

/// Display glyphs for the four timer situations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    /// Interval counting down.
    pub running: String,
    /// Interval frozen.
    pub paused: String,
    /// Restart action.
    pub restart: String,
    /// No active interval.
    pub stopped: String,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            running: SYMBOL_RUNNING.to_string(),
            paused: SYMBOL_PAUSED.to_string(),
            restart: SYMBOL_RESTART.to_string(),
            stopped: SYMBOL_STOPPED.to_string(),
        }
    }
}

/// Timer configuration supplied once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Length of one work interval.
    pub pomodoro_interval: Duration,
    /// Cadence of the title refresh tick.
    pub tick_interval: Duration,
    /// Status bar and menu glyphs.
    pub symbols: Symbols,
    /// Formats a remaining duration for the status bar.
    pub display_remaining_time: fn(Duration) -> String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pomodoro_interval: DEFAULT_POMODORO_INTERVAL,
            tick_interval: DEFAULT_TICK_INTERVAL,
            symbols: Symbols::default(),
            display_remaining_time: display_minutes_ceil,
        }
    }
}

impl Settings {
    /// Returns a copy with intervals clamped to usable ranges.
    ///
    /// The work interval is at least `MIN_POMODORO_INTERVAL`; the tick lies in
    /// `[MIN_TICK_INTERVAL, pomodoro_interval]` so completion is noticed at
    /// most one tick late.
    pub fn validated(mut self) -> Self {
        self.pomodoro_interval = self.pomodoro_interval.max(MIN_POMODORO_INTERVAL);
        self.tick_interval = self
            .tick_interval
            .clamp(MIN_TICK_INTERVAL, self.pomodoro_interval.max(MIN_TICK_INTERVAL));
        self
    }

    /// Formats `remaining` with the configured display function.
    pub fn format_remaining(&self, remaining: Duration) -> String {
        (self.display_remaining_time)(remaining)
    }
}

/// Whole minutes rounded up, e.g. `"25m"`.
///
/// Sub-second precision is dropped before rounding, so 24m59.9s reads `25m`
/// and anything under one second reads `0m`.
pub fn display_minutes_ceil(remaining: Duration) -> String {
    format!("{}m", remaining.as_secs().div_ceil(60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_intervals() {
        let settings = Settings::default();
        assert_eq!(settings.pomodoro_interval, Duration::from_secs(1500));
        assert_eq!(settings.tick_interval, Duration::from_secs(10));
    }

    #[test]
    fn test_default_symbols() {
        let symbols = Symbols::default();
        assert_eq!(symbols.running, "▶");
        assert_eq!(symbols.paused, "⏸");
        assert_eq!(symbols.restart, "↻");
        assert_eq!(symbols.stopped, "⏹");
    }

    #[test]
    fn test_display_minutes_rounds_up() {
        assert_eq!(display_minutes_ceil(Duration::from_secs(1500)), "25m");
        assert_eq!(display_minutes_ceil(Duration::from_secs(1499)), "25m");
        assert_eq!(display_minutes_ceil(Duration::from_secs(1441)), "25m");
        assert_eq!(display_minutes_ceil(Duration::from_secs(1440)), "24m");
        assert_eq!(display_minutes_ceil(Duration::from_secs(1)), "1m");
    }

    #[test]
    fn test_display_minutes_drops_fraction() {
        assert_eq!(display_minutes_ceil(Duration::from_millis(1_499_900)), "25m");
        assert_eq!(display_minutes_ceil(Duration::from_millis(600)), "0m");
        assert_eq!(display_minutes_ceil(Duration::ZERO), "0m");
    }

    #[test]
    fn test_validated_keeps_defaults() {
        let settings = Settings::default().validated();
        assert_eq!(settings.pomodoro_interval, DEFAULT_POMODORO_INTERVAL);
        assert_eq!(settings.tick_interval, DEFAULT_TICK_INTERVAL);
    }

    #[test]
    fn test_validated_clamps_zero_tick() {
        let settings = Settings {
            tick_interval: Duration::ZERO,
            ..Settings::default()
        }
        .validated();
        assert_eq!(settings.tick_interval, MIN_TICK_INTERVAL);
    }

    #[test]
    fn test_validated_caps_tick_at_interval() {
        let settings = Settings {
            pomodoro_interval: Duration::from_secs(30),
            tick_interval: Duration::from_secs(60),
            ..Settings::default()
        }
        .validated();
        assert_eq!(settings.tick_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_validated_raises_zero_interval() {
        let settings = Settings {
            pomodoro_interval: Duration::ZERO,
            ..Settings::default()
        }
        .validated();
        assert_eq!(settings.pomodoro_interval, MIN_POMODORO_INTERVAL);
        assert_eq!(settings.tick_interval, MIN_TICK_INTERVAL);
    }

    #[test]
    fn test_custom_display_function() {
        fn seconds(d: Duration) -> String {
            format!("{}s", d.as_secs())
        }
        let settings = Settings {
            display_remaining_time: seconds,
            ..Settings::default()
        };
        assert_eq!(settings.format_remaining(Duration::from_secs(42)), "42s");
    }
}
