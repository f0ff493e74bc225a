//! Error types for pomodoro-bar.
//!
//! The timer core has no failure modes; these errors only come from the OS
//! boundary (hotkey registration, notification delivery, logger setup).
//! None of them is allowed to reach or stop the state machine.

use thiserror::Error;

/// Errors raised at the OS boundary.
#[derive(Debug, Error)]
pub enum PomodoroError {
    /// Carbon refused to install the hotkey event handler.
    #[error("Failed to install hotkey event handler (status {0})")]
    HotkeyHandlerInstall(i32),

    /// Carbon refused to register a hotkey.
    #[error("Failed to register hotkey (code={key_code}, mods={modifiers}): status {status}")]
    HotkeyRegistration {
        key_code: u32,
        modifiers: u32,
        status: i32,
    },

    /// The notification service rejected or failed to show a notice.
    #[error("Notification delivery failed: {0}")]
    Notification(#[from] notify_rust::error::Error),

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The menu bar app only runs on macOS.
    #[error("pomodoro-bar needs the macOS menu bar")]
    UnsupportedPlatform,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PomodoroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotkey_registration_message() {
        let err = PomodoroError::HotkeyRegistration {
            key_code: 50,
            modifiers: 2560,
            status: -9878,
        };
        assert_eq!(
            err.to_string(),
            "Failed to register hotkey (code=50, mods=2560): status -9878"
        );
    }

    #[test]
    fn test_handler_install_message() {
        assert_eq!(
            PomodoroError::HotkeyHandlerInstall(-50).to_string(),
            "Failed to install hotkey event handler (status -50)"
        );
    }

    #[test]
    fn test_logging_error_keeps_source() {
        use std::error::Error as _;
        let err = PomodoroError::Logging("already set".into());
        assert!(err.source().is_some());
    }
}
