//! Application events for inter-module communication.
//!
//! These events represent user and system actions that can be published
//! by any module (menu targets, the Carbon hotkey callback, the tick timer,
//! workspace observers) and handled by the dispatcher.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (hotkeys, menu, tick timer, observers) through
/// the EventBus to the dispatcher, which drives the timer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    // === Timer Actions ===
    /// Start a fresh interval ("Restart" menu entry)
    Restart,

    /// Pause the running interval ("Pause" menu entry)
    Pause,

    /// Resume the paused interval ("Continue" menu entry)
    Continue,

    /// Context-sensitive pause/resume/start (Shift+Option+`)
    Toggle,

    /// Reset the interval counter and stop ("N interval(s) passed" entry)
    ClearIntervals,

    /// Periodic refresh from the tick timer
    Tick,

    // === App Lifecycle ===
    /// Terminate the application ("Quit" menu entry)
    Quit,

    // === System Events ===
    /// Hotkeys need to be reinstalled (after sleep/wake, session switch)
    ReinstallHotkeys,
}

impl AppEvent {
    /// Returns true if the timer state machine handles this event.
    ///
    /// Everything else is left to the platform layer.
    pub fn is_timer_action(&self) -> bool {
        !matches!(self, AppEvent::Quit | AppEvent::ReinstallHotkeys)
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::Restart => "Restart interval",
            AppEvent::Pause => "Pause interval",
            AppEvent::Continue => "Continue interval",
            AppEvent::Toggle => "Toggle interval",
            AppEvent::ClearIntervals => "Clear passed intervals",
            AppEvent::Tick => "Tick",
            AppEvent::Quit => "Quit application",
            AppEvent::ReinstallHotkeys => "Reinstall hotkeys",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AppEvent; 8] = [
        AppEvent::Restart,
        AppEvent::Pause,
        AppEvent::Continue,
        AppEvent::Toggle,
        AppEvent::ClearIntervals,
        AppEvent::Tick,
        AppEvent::Quit,
        AppEvent::ReinstallHotkeys,
    ];

    #[test]
    fn test_timer_actions() {
        assert!(AppEvent::Restart.is_timer_action());
        assert!(AppEvent::Toggle.is_timer_action());
        assert!(AppEvent::Tick.is_timer_action());
        assert!(AppEvent::ClearIntervals.is_timer_action());
        assert!(!AppEvent::Quit.is_timer_action());
        assert!(!AppEvent::ReinstallHotkeys.is_timer_action());
        assert_eq!(ALL.iter().filter(|e| e.is_timer_action()).count(), 6);
    }

    #[test]
    fn test_event_debug() {
        let debug_str = format!("{:?}", AppEvent::Toggle);
        assert_eq!(debug_str, "Toggle");
    }

    #[test]
    fn test_all_events_have_descriptions() {
        for event in ALL {
            assert!(!event.description().is_empty());
        }
    }
}
