//! FFI bindings for macOS frameworks.
//!
//! `bridge` wraps the objc2 runtime; `carbon` declares the Carbon Event
//! Manager calls used for the global hotkey; `mach` the sleep-inclusive clock.

pub mod bridge;
pub mod carbon;
pub mod mach;

pub use carbon::*;
pub use mach::*;
