//! Application domain model.
//!
//! This module contains pure data (no FFI dependencies):
//! compiled-in settings, their defaults and the timer state union.
//!
//! The transition logic lives in `timer`.

pub mod constants;
pub mod settings;
pub mod timer_state;

pub use constants::*;
pub use settings::{display_minutes_ceil, Settings, Symbols};
pub use timer_state::TimerState;
