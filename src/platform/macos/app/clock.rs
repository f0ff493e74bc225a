//! Wall-elapsed clock for the running app.
//!
//! `Instant` stops while the Mac sleeps, so an interval's end would slide
//! forward by every nap. `ContinuousClock` anchors an `Instant` at launch and
//! advances it by `mach_continuous_time`, which includes sleep.

use std::time::{Duration, Instant};

use crate::platform::macos::ffi::{
    mach_continuous_time, mach_timebase_info, MachTimebaseInfo, KERN_SUCCESS,
};
use crate::timer::Clock;

/// Clock whose readings include time spent asleep.
#[derive(Debug, Clone, Copy)]
pub struct ContinuousClock {
    origin: Instant,
    origin_ticks: u64,
    timebase: MachTimebaseInfo,
}

impl ContinuousClock {
    pub fn new() -> Self {
        let mut timebase = MachTimebaseInfo { numer: 0, denom: 0 };
        let status = unsafe { mach_timebase_info(&mut timebase) };
        if status != KERN_SUCCESS || timebase.numer == 0 || timebase.denom == 0 {
            tracing::warn!(status, "mach_timebase_info failed, assuming nanosecond ticks");
            timebase = MachTimebaseInfo { numer: 1, denom: 1 };
        }

        Self {
            origin: Instant::now(),
            origin_ticks: unsafe { mach_continuous_time() },
            timebase,
        }
    }
}

impl Default for ContinuousClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ContinuousClock {
    fn now(&self) -> Instant {
        let ticks = unsafe { mach_continuous_time() }.saturating_sub(self.origin_ticks);
        self.origin + ticks_to_duration(ticks, self.timebase)
    }
}

/// Convert mach ticks to a `Duration` using the host timebase.
pub fn ticks_to_duration(ticks: u64, timebase: MachTimebaseInfo) -> Duration {
    let nanos = u128::from(ticks) * u128::from(timebase.numer) / u128::from(timebase.denom);
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_identity_timebase() {
        let tb = MachTimebaseInfo { numer: 1, denom: 1 };
        assert_eq!(ticks_to_duration(1_500_000_000, tb), Duration::from_millis(1500));
    }

    #[test]
    fn test_ticks_apple_silicon_timebase() {
        // 24 MHz counter: 125/3 ns per tick
        let tb = MachTimebaseInfo { numer: 125, denom: 3 };
        assert_eq!(ticks_to_duration(24_000_000, tb), Duration::from_secs(1));
    }

    #[test]
    fn test_continuous_clock_is_monotonic() {
        let clock = ContinuousClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
