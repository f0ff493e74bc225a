//! User interface module.
//!
//! ## status_bar.rs
//! - install_status_bar: NSStatusItem + NSMenu
//! - StatusBarPresenter: renders `StatusView` onto them
//!
//! ## target.rs
//! - PomodoroMenuTarget class registration, action methods, bus draining

pub mod status_bar;
pub mod target;

pub use status_bar::{install_status_bar, StatusBarPresenter};
pub use target::{
    attach_dispatcher, process_pending_events, register_and_create_target, AppDispatcher,
};
