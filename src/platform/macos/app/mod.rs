//! Application-level helpers shared by the UI and input layers.

pub mod clock;
pub mod tick;

pub use clock::ContinuousClock;
pub use tick::{start_tick_timer, stop_tick_timer};
