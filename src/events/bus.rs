//! Thread-safe event bus using mpsc channels.
//!
//! The bus provides a simple publish/subscribe mechanism where:
//! - Any thread can publish events via `EventPublisher::publish()`
//! - The main thread polls for events via `EventBus::drain()`
//!
//! This is pure Rust with no FFI.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Thread-safe event bus for application-wide event distribution.
///
/// Uses a multi-producer, single-consumer (mpsc) channel internally.
/// Multiple publishers can send events concurrently, and a single
/// consumer (the main thread) receives and processes them.
///
/// # Example
///
/// ```
/// use pomodoro_bar::events::{EventBus, AppEvent};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::Toggle);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    ///
    /// Publishers are cheap to clone and thread-safe. Each module that needs
    /// to emit events should hold its own publisher.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    ///
    /// Returns `Some(event)` if an event is available, `None` otherwise.
    /// This should be called from the main thread's event loop.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            // The bus holds its own sender, so this only happens during teardown
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec.
    ///
    /// This is the preferred method for processing events in the main loop.
    /// It collects all available events at once, allowing batch processing.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
///
/// Multiple modules can hold publishers and send events concurrently.
/// Cloning a publisher is cheap (just clones the internal Sender).
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    ///
    /// Non-blocking. The event is processed on the next drain on the main
    /// thread. A dropped receiver means the app is shutting down, so the
    /// event is discarded.
    pub fn publish(&self, event: AppEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!(?event, "event bus closed, dropping event");
        }
    }
}
