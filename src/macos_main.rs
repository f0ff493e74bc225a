//! macOS-specific entry point and application setup.
//!
//! Builds the menu target and status item, starts the first interval,
//! installs the global hotkey and observers, then hands control to AppKit.

use pomodoro_bar::events;
use pomodoro_bar::platform::macos::app::ContinuousClock;
use pomodoro_bar::platform::macos::ffi::bridge::{autoreleasepool, id, msg_send, NSApp};
use pomodoro_bar::platform::macos::input::{
    hotkey_event_handler, install_hotkeys, install_termination_observer, install_wakeup_observers,
};
use pomodoro_bar::platform::macos::ui::{
    attach_dispatcher, install_status_bar, register_and_create_target, StatusBarPresenter,
};
use pomodoro_bar::{DesktopNotifier, Dispatcher, MenuLabels, Settings};
use tracing::{info, warn};

/// Main entry point for macOS. Returns when the app terminates.
pub fn run() {
    events::init_event_bus();

    autoreleasepool(|| unsafe {
        let app: id = NSApp();
        // NSApplicationActivationPolicyAccessory = 1: menu bar only, no Dock icon
        let _: bool = msg_send![app, setActivationPolicy: 1i64];

        let settings = Settings::default().validated();
        let labels = MenuLabels::from_settings(&settings);

        let target = register_and_create_target();
        install_status_bar(target, &labels);

        let presenter = StatusBarPresenter::new(target, settings.tick_interval);
        let mut dispatcher = Dispatcher::new(
            settings,
            ContinuousClock::new(),
            presenter,
            DesktopNotifier,
        );
        dispatcher.start();
        attach_dispatcher(target, dispatcher);

        // Without the hotkey the menu still drives the timer
        if let Err(e) = install_hotkeys(target, hotkey_event_handler) {
            warn!("Global hotkey unavailable: {}", e);
        }
        install_termination_observer(target);
        install_wakeup_observers(target);

        info!("menu bar ready, Shift+Option+` toggles the timer");
        let _: () = msg_send![app, run];
    });
}
