//! Tick source: a repeating NSTimer that sends `tick:` to the menu target.
//!
//! Start and stop are idempotent, so the presenter can call them on every
//! render without tracking whether the timer is already running.

use std::time::Duration;

use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring, sel, ObjectExt, Retained, YES,
};

/// Schedule the tick timer unless one is already running.
///
/// The timer is added in common run-loop modes so the title keeps updating
/// while the status menu is open.
///
/// # Safety
/// Must be called from the main thread. `target` must be a live `PomodoroMenuTarget`.
pub unsafe fn start_tick_timer(target: id, interval: Duration) {
    let current: id = *(*target).load_ivar::<id>(c"_tickTimer");
    if current != nil {
        return;
    }

    let timer: id = msg_send![
        get_class(c"NSTimer"),
        timerWithTimeInterval: interval.as_secs_f64(),
        target: target,
        selector: sel!(tick:),
        userInfo: nil,
        repeats: YES
    ];
    let run_loop: id = msg_send![get_class(c"NSRunLoop"), currentRunLoop];
    let common_modes = nsstring("kCFRunLoopCommonModes");
    let mode = Retained::as_ptr(&common_modes) as id;
    let _: () = msg_send![run_loop, addTimer: timer, forMode: mode];

    // The run loop retains the timer; keep our own reference for invalidate
    let _: id = msg_send![timer, retain];
    (*target).store_ivar::<id>(c"_tickTimer", timer);
}

/// Invalidate the tick timer if one is running.
///
/// # Safety
/// Must be called from the main thread. `target` must be a live `PomodoroMenuTarget`.
pub unsafe fn stop_tick_timer(target: id) {
    let current: id = *(*target).load_ivar::<id>(c"_tickTimer");
    if current == nil {
        return;
    }
    let _: () = msg_send![current, invalidate];
    let _: () = msg_send![current, release];
    (*target).store_ivar::<id>(c"_tickTimer", nil);
}
