#![allow(unexpected_cfgs)] // Silence cfg warnings inside objc macros

#[cfg(target_os = "macos")]
mod macos_main;

use std::process::ExitCode;

use pomodoro_bar::logging;

fn main() -> ExitCode {
    if let Err(e) = logging::init_logging() {
        eprintln!("{}", e);
    }

    #[cfg(target_os = "macos")]
    {
        macos_main::run();
        ExitCode::SUCCESS
    }

    #[cfg(not(target_os = "macos"))]
    {
        tracing::error!("{}", pomodoro_bar::PomodoroError::UnsupportedPlatform);
        ExitCode::FAILURE
    }
}
