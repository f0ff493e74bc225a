//! Global access to the application event bus.
//!
//! Carbon hotkey callbacks and Objective-C action methods are plain
//! `extern "C"` functions with no Rust context, so they publish through this
//! static bus. The main thread drains it into the dispatcher.
//!
//! # Design
//!
//! - One `EventBus` behind a `Mutex`: only the main thread drains it
//! - A cloned `EventPublisher` kept beside it, so publishing never locks
//! - Publishing or draining before `init_event_bus()` is a logged no-op,
//!   never a panic: these run inside FFI callbacks.

use std::sync::{Mutex, OnceLock, PoisonError};

use super::bus::{EventBus, EventPublisher};
use super::types::AppEvent;

struct GlobalBus {
    publisher: EventPublisher,
    bus: Mutex<EventBus>,
}

static BUS: OnceLock<GlobalBus> = OnceLock::new();

/// Initialize the global event bus.
///
/// Call once at startup before installing hotkeys or menu targets.
/// Later calls are ignored.
pub fn init_event_bus() {
    BUS.get_or_init(|| {
        let bus = EventBus::new();
        GlobalBus {
            publisher: bus.publisher(),
            bus: Mutex::new(bus),
        }
    });
}

/// Get a publisher handle for the global event bus.
///
/// Returns `None` if `init_event_bus()` has not been called.
pub fn publisher() -> Option<EventPublisher> {
    BUS.get().map(|global| global.publisher.clone())
}

/// Publish an event to the global event bus.
pub fn publish(event: AppEvent) {
    match BUS.get() {
        Some(global) => global.publisher.publish(event),
        None => tracing::warn!(?event, "event bus not initialized, dropping event"),
    }
}

/// Drain all pending events from the global event bus.
///
/// Returns an empty Vec if the bus has not been initialized.
pub fn drain_events() -> Vec<AppEvent> {
    let Some(global) = BUS.get() else {
        return Vec::new();
    };

    // A panic while holding the lock leaves the channel itself intact
    global
        .bus
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .drain()
}

#[cfg(test)]
mod tests {
    // The static bus is shared by every test in this binary, so everything
    // that touches it lives in a single test.
    use super::*;

    #[test]
    fn test_global_bus_lifecycle() {
        init_event_bus();
        init_event_bus();
        let _ = drain_events();

        publish(AppEvent::Toggle);
        publisher()
            .expect("bus initialized")
            .publish(AppEvent::Tick);

        assert_eq!(drain_events(), vec![AppEvent::Toggle, AppEvent::Tick]);
        assert!(drain_events().is_empty());
    }
}
