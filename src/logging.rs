//! Logging system initialization.
//!
//! Installs a tracing `fmt` subscriber writing to stderr. The level defaults
//! to `pomodoro_bar=info` and can be overridden with `RUST_LOG`.

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{PomodoroError, Result};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "pomodoro_bar=info";

/// Build the env filter from `RUST_LOG`, falling back to `DEFAULT_LOG_FILTER`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize the global tracing subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PomodoroError::Logging(Box::new(e)))?;

    tracing::info!("pomodoro-bar v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(DEFAULT_LOG_FILTER.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn test_second_init_fails() {
        // The first call may or may not win depending on test order; the
        // second one can never succeed.
        let _ = init_logging();
        assert!(matches!(init_logging(), Err(PomodoroError::Logging(_))));
    }
}
