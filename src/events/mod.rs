//! Event system for decoupled inter-module communication.
//!
//! This module provides a simple publish/subscribe mechanism using Rust's
//! standard library `mpsc` channels. It enables:
//!
//! - **Decoupled architecture**: FFI callbacks publish events without touching the timer
//! - **Thread safety**: Multiple publishers can send events concurrently
//! - **Testability**: Event types are pure Rust enums, easily testable without FFI
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//! │   Hotkey    │   │ Menu items  │   │ Tick timer  │   │  Observers  │
//! │  (Carbon)   │   │  (NSMenu)   │   │  (NSTimer)  │   │ (wake etc.) │
//! └──────┬──────┘   └──────┬──────┘   └──────┬──────┘   └──────┬──────┘
//!        │ publish()       │ publish()       │ publish()       │ publish()
//!        ▼                 ▼                 ▼                 ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                              EventBus                               │
//! │                            (mpsc channel)                           │
//! └──────────────────────────────────┬──────────────────────────────────┘
//!                                    │ drain()
//!                                    ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │            Dispatcher → PomodoroTimer → presenter / notifier        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use pomodoro_bar::events::{self, AppEvent};
//!
//! // Initialize at app startup
//! events::init_event_bus();
//!
//! // Publish from any callback
//! events::publish(AppEvent::Toggle);
//!
//! // Drain events on the main thread
//! dispatcher.dispatch_all(events::drain_events());
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types
//! - [`global`]: Static access functions

pub mod bus;
pub mod global;
pub mod types;

// Re-export main types for convenient access
pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::AppEvent;
