//! macOS-specific implementation using Cocoa/AppKit via objc2.
//!
//! This module contains all macOS-specific code:
//! - FFI bindings to the objc2 runtime and Carbon
//! - UI components (NSStatusItem, NSMenu, the menu target object)
//! - Input handling (Carbon hotkey, workspace observers)
//! - The NSTimer tick source

pub mod app;
pub mod ffi;
pub mod input;
pub mod ui;

// Re-export commonly used items
pub use app::*;
pub use ffi::bridge;
pub use ui::*;
