//! System observers for hotkey upkeep and shutdown.
//!
//! Carbon hotkeys can be dropped across sleep/wake and fast user switching;
//! the wake observers queue `AppEvent::ReinstallHotkeys` (plus a `Tick`)
//! so the dispatcher loop reinstalls them. The termination observer
//! releases Carbon refs and the tick timer.

use block2::RcBlock;

use crate::events::{publish, AppEvent};
use crate::platform::macos::app::stop_tick_timer;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil};
use crate::platform::macos::input::hotkeys::uninstall_hotkeys;

/// Install an observer that cleans up Carbon resources when app terminates.
///
/// # Safety
/// - `target` must be a live `PomodoroMenuTarget`.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn install_termination_observer(target: id) {
    let center: id = msg_send![get_class(c"NSNotificationCenter"), defaultCenter];

    let block = RcBlock::new(move |_note: id| unsafe {
        stop_tick_timer(target);
        uninstall_hotkeys(target);
        tracing::info!("pomodoro-bar terminating");
    });

    let name: id = msg_send![
        get_class(c"NSString"),
        stringWithUTF8String: c"NSApplicationWillTerminateNotification".as_ptr()
    ];
    let _: id =
        msg_send![center, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
}

/// Queue a hotkey reinstall after events that may disrupt Carbon hotkeys.
///
/// Watches for:
/// - Wake from sleep
/// - Session became active (unlock/login)
///
/// # Safety
/// - `target` must be a live `PomodoroMenuTarget`.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn install_wakeup_observers(target: id) {
    let ws: id = msg_send![get_class(c"NSWorkspace"), sharedWorkspace];
    let nc: id = msg_send![ws, notificationCenter];

    let add_obs = |name_cstr: &std::ffi::CStr| {
        let name: id =
            msg_send![get_class(c"NSString"), stringWithUTF8String: name_cstr.as_ptr()];
        let block = RcBlock::new(move |_note: id| unsafe {
            publish(AppEvent::ReinstallHotkeys);
            // Refresh the title and complete an interval that ended during sleep
            publish(AppEvent::Tick);
            let _: () = msg_send![target, processEvents];
        });
        let _: id =
            msg_send![nc, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
    };

    add_obs(c"NSWorkspaceDidWakeNotification");
    add_obs(c"NSWorkspaceSessionDidBecomeActiveNotification");
}
