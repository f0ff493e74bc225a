//! PomodoroMenuTarget: the Objective-C object behind the status menu.
//!
//! This NSObject subclass receives:
//! - Menu actions (Restart, Pause, Continue, clear counter, Quit)
//! - `tick:` from the tick NSTimer
//! - `processEvents` after the Carbon hotkey or an observer published
//!
//! Every action publishes an `AppEvent` and then drains the bus into the
//! dispatcher, which lives in a boxed ivar for the whole process lifetime.

use std::ffi::c_void;
use std::sync::atomic::{AtomicBool, Ordering};

use objc2::runtime::{AnyObject, ClassBuilder, Sel};
use tracing::{debug, info};

use crate::events::{drain_events, publish, AppEvent};
use crate::handlers::Dispatcher;
use crate::notify::DesktopNotifier;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, sel, AnyClass, ObjectExt, NSApp,
};
use crate::platform::macos::input::{hotkey_event_handler, reinstall_hotkeys};
use crate::platform::macos::ui::status_bar::StatusBarPresenter;
use crate::platform::macos::app::ContinuousClock;

/// The dispatcher type used by the running app.
pub type AppDispatcher = Dispatcher<ContinuousClock, StatusBarPresenter, DesktopNotifier>;

const CLASS_NAME: &std::ffi::CStr = c"PomodoroMenuTarget";

/// Guard against re-entrant draining.
///
/// AppKit can run nested run loops (open menus, the terminate sequence)
/// that fire timers while an outer drain is still on the stack.
static DISPATCH_GUARD: AtomicBool = AtomicBool::new(false);

/// Register the PomodoroMenuTarget class and create the single instance.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn register_and_create_target() -> id {
    let cls = if let Some(cls) = AnyClass::get(CLASS_NAME) {
        cls
    } else {
        let superclass = get_class(c"NSObject");
        let mut builder = match ClassBuilder::new(CLASS_NAME, superclass) {
            Some(builder) => builder,
            None => panic!("Class '{}' could not be declared", CLASS_NAME.to_string_lossy()),
        };

        register_ivars(&mut builder);
        register_methods(&mut builder);

        builder.register()
    };

    let target: id = msg_send![cls, new];
    initialize_target_ivars(target);
    target
}

/// Register all instance variables for the target.
unsafe fn register_ivars(builder: &mut ClassBuilder) {
    // Boxed AppDispatcher
    builder.add_ivar::<*mut c_void>(c"_dispatcher");

    // Status bar widgets
    builder.add_ivar::<id>(c"_statusItem");
    builder.add_ivar::<id>(c"_pauseItem");
    builder.add_ivar::<id>(c"_continueItem");
    builder.add_ivar::<id>(c"_passedItem");

    // Tick source
    builder.add_ivar::<id>(c"_tickTimer");

    // Carbon refs
    builder.add_ivar::<*mut c_void>(c"_hkHandler");
    builder.add_ivar::<*mut c_void>(c"_hkToggle");
}

/// Register all methods for the target.
unsafe fn register_methods(builder: &mut ClassBuilder) {
    // Menu actions
    builder.add_method(
        sel!(restartTimer:),
        restart_timer as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(pauseTimer:),
        pause_timer as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(continueTimer:),
        continue_timer as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(clearIntervals:),
        clear_intervals as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(sel!(quitApp:), quit_app as unsafe extern "C-unwind" fn(_, _, _));

    // Tick timer
    builder.add_method(sel!(tick:), tick as unsafe extern "C-unwind" fn(_, _, _));

    // Bus drain after hotkey / observer publishes
    builder.add_method(
        sel!(processEvents),
        process_events as unsafe extern "C-unwind" fn(_, _),
    );
}

/// Initialize all instance variables to empty values.
unsafe fn initialize_target_ivars(target: id) {
    (*target).store_ivar::<*mut c_void>(c"_dispatcher", std::ptr::null_mut());

    (*target).store_ivar::<id>(c"_statusItem", nil);
    (*target).store_ivar::<id>(c"_pauseItem", nil);
    (*target).store_ivar::<id>(c"_continueItem", nil);
    (*target).store_ivar::<id>(c"_passedItem", nil);

    (*target).store_ivar::<id>(c"_tickTimer", nil);

    (*target).store_ivar::<*mut c_void>(c"_hkHandler", std::ptr::null_mut());
    (*target).store_ivar::<*mut c_void>(c"_hkToggle", std::ptr::null_mut());
}

/// Hand the dispatcher to the target for the rest of the process.
///
/// # Safety
/// Must be called once, from the main thread, before any event is processed.
pub unsafe fn attach_dispatcher(target: id, dispatcher: AppDispatcher) {
    let raw = Box::into_raw(Box::new(dispatcher));
    (*target).store_ivar::<*mut c_void>(c"_dispatcher", raw as *mut c_void);
}

/// Drain the event bus into the dispatcher until it is empty.
///
/// Events the timer does not handle are acted on here.
///
/// # Safety
/// Must be called from the main thread. `target` must be a live `PomodoroMenuTarget`.
pub unsafe fn process_pending_events(target: id) {
    if DISPATCH_GUARD
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        // The outer drain picks up whatever was just published
        return;
    }

    let dispatcher = *(*target).load_ivar::<*mut c_void>(c"_dispatcher") as *mut AppDispatcher;
    if !dispatcher.is_null() {
        loop {
            let events = drain_events();
            if events.is_empty() {
                break;
            }
            let platform_events = (*dispatcher).dispatch_all(events);
            for event in platform_events {
                handle_platform_event(target, event);
            }
        }
    }

    DISPATCH_GUARD.store(false, Ordering::SeqCst);
}

/// Act on an event the timer left for the platform.
unsafe fn handle_platform_event(target: id, event: AppEvent) {
    match event {
        AppEvent::ReinstallHotkeys => {
            debug!("reinstalling hotkeys");
            reinstall_hotkeys(target, hotkey_event_handler);
        }
        AppEvent::Quit => {
            info!("quit requested");
            DISPATCH_GUARD.store(false, Ordering::SeqCst);
            let _: () = msg_send![NSApp(), terminate: nil];
        }
        _ => {}
    }
}

unsafe fn publish_and_process(this: &mut AnyObject, event: AppEvent) {
    publish(event);
    process_pending_events(this as *mut _ as id);
}

// ============================================================================
// PomodoroMenuTarget methods (extern "C-unwind" for Objective-C runtime)
// ============================================================================

unsafe extern "C-unwind" fn restart_timer(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_process(this, AppEvent::Restart);
}

unsafe extern "C-unwind" fn pause_timer(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_process(this, AppEvent::Pause);
}

unsafe extern "C-unwind" fn continue_timer(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_process(this, AppEvent::Continue);
}

unsafe extern "C-unwind" fn clear_intervals(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_process(this, AppEvent::ClearIntervals);
}

unsafe extern "C-unwind" fn quit_app(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish_and_process(this, AppEvent::Quit);
}

unsafe extern "C-unwind" fn tick(this: &mut AnyObject, _cmd: Sel, _timer: id) {
    publish_and_process(this, AppEvent::Tick);
}

unsafe extern "C-unwind" fn process_events(this: &mut AnyObject, _cmd: Sel) {
    process_pending_events(this as *mut _ as id);
}
