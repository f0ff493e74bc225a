#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Menu bar Pomodoro timer.
//!
//! Everything outside `platform` is pure Rust with no macOS FFI, so the
//! timer, presenter and dispatcher run as normal tests on any host.

pub mod error;
pub mod events;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod notify;
pub mod presenter;
pub mod timer;

#[cfg(target_os = "macos")]
pub mod platform;

// Re-export the core types for convenience
pub use error::{PomodoroError, Result};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use handlers::{Dispatch, Dispatcher};
pub use model::{Settings, TimerState};
pub use notify::{DesktopNotifier, Notice, Notifier};
pub use presenter::{MenuLabels, StatusPresenter, StatusView};
pub use timer::{Clock, ManualClock, PomodoroTimer};
