//! Mach time declarations (libSystem).
//!
//! `mach_continuous_time` keeps counting while the machine sleeps, unlike
//! `mach_absolute_time`, which backs `std::time::Instant` on macOS.

pub const KERN_SUCCESS: i32 = 0;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MachTimebaseInfo {
    pub numer: u32,
    pub denom: u32,
}

extern "C" {
    pub fn mach_continuous_time() -> u64;
    pub fn mach_timebase_info(info: *mut MachTimebaseInfo) -> i32;
}
