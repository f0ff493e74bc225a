//! Event handlers and dispatching.
//!
//! This module contains the dispatcher that applies events from the
//! event bus to the timer and pushes the results to the UI.

pub mod dispatcher;

pub use dispatcher::{Dispatch, Dispatcher};
