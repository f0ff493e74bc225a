//! Status bar (menu bar) item with dropdown menu.
//!
//! Creates the text label in the macOS menu bar with options:
//! - ↻ Restart
//! - ⏸ Pause
//! - ▶ Continue
//! - N interval(s) passed (click clears the counter)
//! - Quit

use std::time::Duration;

use crate::platform::macos::app::{start_tick_timer, stop_tick_timer};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring, nsstring_id, sel, Bool, ObjectExt, Retained, Sel, NO,
};
use crate::presenter::{MenuLabels, StatusPresenter, StatusView};

/// Install the status bar item and its menu on the target.
///
/// The label stays empty until the first render.
///
/// # Safety
/// Must be called from main thread, after the app is initialized.
/// `target` must be a live `PomodoroMenuTarget`.
pub unsafe fn install_status_bar(target: id, labels: &MenuLabels) {
    let status_bar: id = msg_send![get_class(c"NSStatusBar"), systemStatusBar];

    // NSVariableStatusItemLength = -1.0
    let status_item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];

    // Keep a strong reference so it doesn't get deallocated
    let _: id = msg_send![status_item, retain];
    (*target).store_ivar::<id>(c"_statusItem", status_item);

    let menu = create_status_menu(target, labels);
    let _: () = msg_send![status_item, setMenu: menu];
}

/// Create the dropdown menu and remember the items the presenter updates.
unsafe fn create_status_menu(target: id, labels: &MenuLabels) -> id {
    let menu: id = msg_send![get_class(c"NSMenu"), alloc];
    let menu: id = msg_send![menu, init];
    // Enablement is driven by the timer state, not by target validation
    let _: () = msg_send![menu, setAutoenablesItems: NO];

    add_item(menu, target, &labels.restart, sel!(restartTimer:));
    let pause_item = add_item(menu, target, &labels.pause, sel!(pauseTimer:));
    let continue_item = add_item(menu, target, &labels.continue_, sel!(continueTimer:));

    let separator: id = msg_send![get_class(c"NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];

    let passed_item = add_item(menu, target, "", sel!(clearIntervals:));

    let separator2: id = msg_send![get_class(c"NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator2];

    add_item(menu, target, &labels.quit, sel!(quitApp:));

    (*target).store_ivar::<id>(c"_pauseItem", pause_item);
    (*target).store_ivar::<id>(c"_continueItem", continue_item);
    (*target).store_ivar::<id>(c"_passedItem", passed_item);

    menu
}

/// Append an item with no key equivalent that sends `action` to `target`.
unsafe fn add_item(menu: id, target: id, title: &str, action: Sel) -> id {
    let item: id = msg_send![get_class(c"NSMenuItem"), alloc];
    let item: id = msg_send![
        item,
        initWithTitle: nsstring_id(title),
        action: action,
        keyEquivalent: nsstring_id("")
    ];
    let _: () = msg_send![item, setTarget: target];
    let _: () = msg_send![menu, addItem: item];
    item
}

/// Set a widget's title from a Rust string without leaking the NSString.
unsafe fn set_title(widget: id, title: &str) {
    if widget == nil {
        return;
    }
    let ns = nsstring(title);
    let _: () = msg_send![widget, setTitle: Retained::as_ptr(&ns) as id];
}

unsafe fn set_enabled(item: id, enabled: bool) {
    if item != nil {
        let _: () = msg_send![item, setEnabled: Bool::new(enabled)];
    }
}

/// Copies each `StatusView` onto the status item, its menu and the tick timer.
pub struct StatusBarPresenter {
    target: id,
    tick_interval: Duration,
}

impl StatusBarPresenter {
    /// # Safety
    /// `target` must be a `PomodoroMenuTarget` with the status bar installed,
    /// and must outlive the presenter.
    pub unsafe fn new(target: id, tick_interval: Duration) -> Self {
        Self {
            target,
            tick_interval,
        }
    }
}

impl StatusPresenter for StatusBarPresenter {
    fn render(&mut self, view: &StatusView) {
        unsafe {
            let status_item: id = *(*self.target).load_ivar::<id>(c"_statusItem");
            if status_item != nil {
                let button: id = msg_send![status_item, button];
                set_title(button, &view.title);
            }

            set_enabled(*(*self.target).load_ivar::<id>(c"_pauseItem"), view.pause_enabled);
            set_enabled(
                *(*self.target).load_ivar::<id>(c"_continueItem"),
                view.continue_enabled,
            );
            set_title(*(*self.target).load_ivar::<id>(c"_passedItem"), &view.passed_label);

            if view.ticking {
                start_tick_timer(self.target, self.tick_interval);
            } else {
                stop_tick_timer(self.target);
            }
        }
    }
}
