//! Timer core: the state machine and the clocks that drive it.
//!
//! Pure Rust with no FFI, so it runs under plain `cargo test` on any host.

pub mod clock;
pub mod machine;

pub use clock::{Clock, ManualClock};
pub use machine::{passed_label, Completion, PomodoroTimer, Transition};
