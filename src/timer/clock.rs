//! Time sources for the dispatcher.
//!
//! The state machine itself never reads a clock; callers pass `now` in.
//! The macOS app uses `platform::macos::ContinuousClock`; `ManualClock` is for
//! tests that need to jump forward without sleeping.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// Readings must keep advancing while the machine sleeps, otherwise a
/// running interval's end slides forward by the length of the sleep.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// A clock that only moves when told to.
///
/// Single-threaded on purpose, like the run loop it stands in for.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    /// Start at the current instant.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_stands_still() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_manual_clock_advance() {
        let start = Instant::now();
        let clock = ManualClock::starting_at(start);
        clock.advance(Duration::from_secs(10));
        clock.advance(Duration::from_secs(5));
        assert_eq!(clock.now(), start + Duration::from_secs(15));
    }

    #[test]
    fn test_shared_clock_sees_advance() {
        let clock = Rc::new(ManualClock::new());
        let shared = Rc::clone(&clock);
        let before = shared.now();
        clock.advance(Duration::from_secs(1));
        assert_eq!(shared.now(), before + Duration::from_secs(1));
    }
}
