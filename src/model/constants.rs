//! Configuration constants and default values.
//!
//! This module contains every compiled-in setting: interval lengths,
//! display symbols, menu labels, notification text and the global hotkey.

use std::time::Duration;

// === Intervals ===

/// Default length of one work interval.
pub const DEFAULT_POMODORO_INTERVAL: Duration = Duration::from_secs(25 * 60);

/// Default cadence of the title refresh tick.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(10);

/// Shortest tick cadence accepted by `Settings::validated`.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Shortest work interval accepted by `Settings::validated`.
pub const MIN_POMODORO_INTERVAL: Duration = Duration::from_secs(1);

// === Symbols ===

/// Shown while an interval is counting down (also used by "Continue").
pub const SYMBOL_RUNNING: &str = "▶";

/// Shown while an interval is paused (also used by "Pause").
pub const SYMBOL_PAUSED: &str = "⏸";

/// Used by the "Restart" menu entry.
pub const SYMBOL_RESTART: &str = "↻";

/// Shown when no interval is active.
pub const SYMBOL_STOPPED: &str = "⏹";

// === Menu labels ===

pub const LABEL_RESTART: &str = "Restart";
pub const LABEL_PAUSE: &str = "Pause";
pub const LABEL_CONTINUE: &str = "Continue";
pub const LABEL_QUIT: &str = "Quit";

// === Notification ===

/// Notification title.
pub const NOTICE_TITLE: &str = "Pomodoro";

/// Notification subtitle on interval completion.
pub const NOTICE_SUBTITLE_TIME_OUT: &str = "Time out";

/// Sound played with the completion notice.
///
/// The notification center only maps this exact name to the user's alert
/// sound; any other string is looked up as an `NSSound` name.
pub const NOTICE_SOUND: &str = "NSUserNotificationDefaultSoundName";

// === Global hotkey (Carbon virtual key codes and modifier masks) ===

/// `kVK_ANSI_Grave`, the backtick key.
pub const HOTKEY_TOGGLE_KEY_CODE: u32 = 50;

/// `shiftKey`.
pub const HOTKEY_SHIFT_MASK: u32 = 1 << 9;

/// `optionKey`.
pub const HOTKEY_OPTION_MASK: u32 = 1 << 11;

/// Shift+Option, the modifiers of the toggle hotkey.
pub const HOTKEY_TOGGLE_MODIFIERS: u32 = HOTKEY_SHIFT_MASK | HOTKEY_OPTION_MASK;
