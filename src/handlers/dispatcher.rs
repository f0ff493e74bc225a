//! Event dispatcher for handling application events.
//!
//! The dispatcher owns the timer for the whole process lifetime. It receives
//! events drained from the event bus, applies them to the state machine and
//! fans out the side effects: a fresh `StatusView` to the presenter after
//! every event, and a `Notice` to the notifier when an interval completes.
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → Dispatcher::dispatch_all() → PomodoroTimer
//!                                                 ├→ StatusPresenter::render()
//!                                                 └→ Notifier::notify()
//! ```
//!
//! Events that are not timer actions (`Quit`, `ReinstallHotkeys`) are handed
//! back to the caller, which owns the platform resources they concern.

use tracing::{debug, info, warn};

use crate::events::AppEvent;
use crate::model::Settings;
use crate::notify::{Notice, Notifier};
use crate::presenter::{StatusPresenter, StatusView};
use crate::timer::{passed_label, Clock, PomodoroTimer, Transition};

/// Outcome of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The timer handled the event and the presenter was refreshed.
    Handled,
    /// Not a timer action; the platform layer must act on it.
    Platform(AppEvent),
}

/// Routes events into the timer and its collaborators.
pub struct Dispatcher<C, P, N> {
    timer: PomodoroTimer,
    clock: C,
    presenter: P,
    notifier: N,
}

impl<C, P, N> Dispatcher<C, P, N>
where
    C: Clock,
    P: StatusPresenter,
    N: Notifier,
{
    /// Create a dispatcher around a stopped timer.
    ///
    /// Nothing is rendered until `start()` or the first event.
    pub fn new(settings: Settings, clock: C, presenter: P, notifier: N) -> Self {
        Self {
            timer: PomodoroTimer::new(settings.validated()),
            clock,
            presenter,
            notifier,
        }
    }

    /// Launch behaviour: begin the first interval right away and render.
    pub fn start(&mut self) {
        let now = self.clock.now();
        self.timer.restart(now);
        info!(
            interval_secs = self.timer.settings().pomodoro_interval.as_secs(),
            "first interval started"
        );
        self.render();
    }

    /// Apply a single event.
    pub fn dispatch(&mut self, event: AppEvent) -> Dispatch {
        if !event.is_timer_action() {
            return Dispatch::Platform(event);
        }

        let now = self.clock.now();
        let transition = match event {
            AppEvent::Restart => self.timer.restart(now),
            AppEvent::Pause => self.timer.pause(now),
            AppEvent::Continue => self.timer.continue_timer(now),
            AppEvent::Toggle => self.timer.toggle(now),
            AppEvent::ClearIntervals => self.timer.clear(),
            AppEvent::Tick => match self.timer.on_tick(now) {
                Some(completion) => {
                    self.announce(completion.passed_intervals);
                    Transition::Changed
                }
                None => Transition::Ignored,
            },
            AppEvent::Quit | AppEvent::ReinstallHotkeys => Transition::Ignored,
        };

        if event != AppEvent::Tick {
            debug!(
                event = event.description(),
                changed = transition.changed(),
                state = self.timer.state().name(),
                "event dispatched"
            );
        }

        self.render();
        Dispatch::Handled
    }

    /// Apply events in order, collecting the ones left for the platform.
    pub fn dispatch_all<I>(&mut self, events: I) -> Vec<AppEvent>
    where
        I: IntoIterator<Item = AppEvent>,
    {
        events
            .into_iter()
            .filter_map(|event| match self.dispatch(event) {
                Dispatch::Handled => None,
                Dispatch::Platform(event) => Some(event),
            })
            .collect()
    }

    /// Current projection, as last rendered.
    pub fn view(&self) -> StatusView {
        StatusView::project(&self.timer, self.clock.now())
    }

    pub fn timer(&self) -> &PomodoroTimer {
        &self.timer
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn render(&mut self) {
        let view = self.view();
        self.presenter.render(&view);
    }

    fn announce(&mut self, passed_intervals: u32) {
        info!(passed_intervals, "interval completed");
        let notice = Notice::time_out(passed_label(passed_intervals));
        if let Err(e) = self.notifier.notify(&notice) {
            warn!("Could not deliver time-out notification: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::SilentNotifier;
    use crate::timer::ManualClock;

    #[derive(Default)]
    struct CountingPresenter {
        renders: usize,
    }

    impl StatusPresenter for CountingPresenter {
        fn render(&mut self, _view: &StatusView) {
            self.renders += 1;
        }
    }

    fn dispatcher() -> Dispatcher<ManualClock, CountingPresenter, SilentNotifier> {
        Dispatcher::new(
            Settings::default(),
            ManualClock::new(),
            CountingPresenter::default(),
            SilentNotifier,
        )
    }

    #[test]
    fn test_new_does_not_render() {
        let d = dispatcher();
        assert_eq!(d.presenter().renders, 0);
        assert!(d.timer().state().is_stopped());
    }

    #[test]
    fn test_start_runs_and_renders() {
        let mut d = dispatcher();
        d.start();
        assert!(d.timer().state().is_running());
        assert_eq!(d.presenter().renders, 1);
    }

    #[test]
    fn test_platform_events_are_returned() {
        let mut d = dispatcher();
        assert_eq!(d.dispatch(AppEvent::Quit), Dispatch::Platform(AppEvent::Quit));
        assert_eq!(d.presenter().renders, 0);

        let left = d.dispatch_all([
            AppEvent::Toggle,
            AppEvent::ReinstallHotkeys,
            AppEvent::Tick,
        ]);
        assert_eq!(left, vec![AppEvent::ReinstallHotkeys]);
        assert_eq!(d.presenter().renders, 2);
    }

    #[test]
    fn test_platform_split_follows_timer_actions() {
        let events = [
            AppEvent::Restart,
            AppEvent::Pause,
            AppEvent::Continue,
            AppEvent::Toggle,
            AppEvent::ClearIntervals,
            AppEvent::Tick,
            AppEvent::Quit,
            AppEvent::ReinstallHotkeys,
        ];
        for event in events {
            let mut d = dispatcher();
            let expected = if event.is_timer_action() {
                Dispatch::Handled
            } else {
                Dispatch::Platform(event)
            };
            assert_eq!(d.dispatch(event), expected, "{:?}", event);
            assert_eq!(d.presenter().renders, usize::from(event.is_timer_action()));
        }
    }

    #[test]
    fn test_every_timer_event_renders() {
        let mut d = dispatcher();
        d.dispatch(AppEvent::Pause);
        d.dispatch(AppEvent::Continue);
        d.dispatch(AppEvent::Tick);
        assert_eq!(d.presenter().renders, 3);
    }
}
