//! Status bar projection of the timer.
//!
//! `StatusView` is computed from the timer and the current time; it holds
//! everything the menu bar shows. Platform code only copies it onto widgets.

use std::time::Instant;

use crate::model::constants::{LABEL_CONTINUE, LABEL_PAUSE, LABEL_QUIT, LABEL_RESTART};
use crate::model::{Settings, TimerState};
use crate::timer::PomodoroTimer;

/// What the status bar should display right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    /// Status bar label, e.g. `"▶ 12m"`.
    pub title: String,
    /// "Pause" is actionable (Running only).
    pub pause_enabled: bool,
    /// "Continue" is actionable (Paused only).
    pub continue_enabled: bool,
    /// Counter entry, e.g. `"1 interval(s) passed"`.
    pub passed_label: String,
    /// The tick source should be firing (Running only).
    pub ticking: bool,
}

impl StatusView {
    pub fn project(timer: &PomodoroTimer, now: Instant) -> Self {
        let state = timer.state();
        Self {
            title: timer.title(now),
            pause_enabled: matches!(state, TimerState::Running { .. }),
            continue_enabled: matches!(state, TimerState::Paused { .. }),
            passed_label: timer.passed_label(),
            ticking: state.is_running(),
        }
    }
}

/// Fixed menu entry titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLabels {
    pub restart: String,
    pub pause: String,
    pub continue_: String,
    pub quit: String,
}

impl MenuLabels {
    pub fn from_settings(settings: &Settings) -> Self {
        let symbols = &settings.symbols;
        Self {
            restart: format!("{} {}", symbols.restart, LABEL_RESTART),
            pause: format!("{} {}", symbols.paused, LABEL_PAUSE),
            continue_: format!("{} {}", symbols.running, LABEL_CONTINUE),
            quit: LABEL_QUIT.to_string(),
        }
    }
}

/// Receives a fresh `StatusView` after every handled event.
pub trait StatusPresenter {
    fn render(&mut self, view: &StatusView);
}

impl<P: StatusPresenter + ?Sized> StatusPresenter for Box<P> {
    fn render(&mut self, view: &StatusView) {
        (**self).render(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_stopped_view() {
        let timer = PomodoroTimer::new(Settings::default());
        let view = StatusView::project(&timer, Instant::now());
        assert_eq!(view.title, "⏹ 25m");
        assert!(!view.pause_enabled);
        assert!(!view.continue_enabled);
        assert!(!view.ticking);
        assert_eq!(view.passed_label, "0 interval(s) passed");
    }

    #[test]
    fn test_running_and_paused_views() {
        let now = Instant::now();
        let mut timer = PomodoroTimer::new(Settings::default());

        timer.restart(now);
        let running = StatusView::project(&timer, now);
        assert!(running.pause_enabled && !running.continue_enabled && running.ticking);

        timer.pause(now + Duration::from_secs(60));
        let paused = StatusView::project(&timer, now);
        assert!(!paused.pause_enabled && paused.continue_enabled && !paused.ticking);
        assert_eq!(paused.title, "⏸ 24m");
    }

    #[test]
    fn test_menu_labels() {
        let labels = MenuLabels::from_settings(&Settings::default());
        assert_eq!(labels.restart, "↻ Restart");
        assert_eq!(labels.pause, "⏸ Pause");
        assert_eq!(labels.continue_, "▶ Continue");
        assert_eq!(labels.quit, "Quit");
    }
}
