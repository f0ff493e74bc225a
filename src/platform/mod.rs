//! Platform-specific implementations.
//!
//! Only macOS has a menu bar host; everything it needs lives in `macos`:
//! - FFI bindings
//! - UI components (status item, menu)
//! - Input handling (global hotkey, system observers)
//! - Tick source

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
