//! Input handling module.
//!
//! This module contains input handlers for:
//! - hotkeys.rs: Carbon registration of the global toggle hotkey
//! - observers.rs: System observers (wake, session change, termination)

pub mod hotkeys;
pub mod observers;

pub use hotkeys::{hotkey_event_handler, install_hotkeys, reinstall_hotkeys, uninstall_hotkeys};
pub use observers::{install_termination_observer, install_wakeup_observers};
