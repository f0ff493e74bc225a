//! Carbon hotkey management.
//!
//! This module handles registration, unregistration, and reinstallation
//! of the global Shift+Option+` hotkey using the Carbon Event Manager API.
//! The hotkey works system-wide, even when another app is focused.

use tracing::{debug, warn};

use crate::error::{PomodoroError, Result};
use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{id, msg_send, ObjectExt};
use crate::platform::macos::ffi::{
    EventHandlerCallRef, EventHandlerRef, EventHotKeyID, EventHotKeyRef, EventRef, EventTypeSpec,
    GetApplicationEventTarget, GetEventClass, GetEventKind, GetEventParameter, InstallEventHandler,
    RegisterEventHotKey, RemoveEventHandler, UnregisterEventHotKey, HKID_TOGGLE, KC_TOGGLE,
    K_EVENT_CLASS_KEYBOARD, K_EVENT_HOTKEY_PRESSED, K_EVENT_PARAM_DIRECT_OBJECT, MODS_TOGGLE,
    NO_ERR, SIG_POMO, TYPE_EVENT_HOTKEY_ID,
};

/// Type alias for the hotkey event handler function signature.
pub type HotkeyHandler = extern "C" fn(EventHandlerCallRef, EventRef, *mut std::ffi::c_void) -> i32;

/// Install the Carbon handler and register Shift+Option+`.
///
/// The target is passed to Carbon as user data and receives
/// `processEvents` after each press. On error nothing stays registered
/// except what was stored in the target, which `uninstall_hotkeys` cleans up.
///
/// # Safety
/// Must be called from main thread. `target` must be a live `PomodoroMenuTarget`.
pub unsafe fn install_hotkeys(target: id, handler: HotkeyHandler) -> Result<()> {
    let types = [EventTypeSpec {
        event_class: K_EVENT_CLASS_KEYBOARD,
        event_kind: K_EVENT_HOTKEY_PRESSED,
    }];
    let mut handler_ref: EventHandlerRef = std::ptr::null_mut();
    let status = InstallEventHandler(
        GetApplicationEventTarget(),
        handler,
        types.len() as u32,
        types.as_ptr(),
        target as *mut std::ffi::c_void,
        &mut handler_ref,
    );
    if status != NO_ERR {
        return Err(PomodoroError::HotkeyHandlerInstall(status));
    }
    (*target).store_ivar::<*mut std::ffi::c_void>(c"_hkHandler", handler_ref);

    let hk_id = EventHotKeyID {
        signature: SIG_POMO,
        id: HKID_TOGGLE,
    };
    let mut hotkey_ref: EventHotKeyRef = std::ptr::null_mut();
    let status = RegisterEventHotKey(
        KC_TOGGLE,
        MODS_TOGGLE,
        hk_id,
        GetApplicationEventTarget(),
        0,
        &mut hotkey_ref,
    );
    if status != NO_ERR || hotkey_ref.is_null() {
        return Err(PomodoroError::HotkeyRegistration {
            key_code: KC_TOGGLE,
            modifiers: MODS_TOGGLE,
            status,
        });
    }
    (*target).store_ivar::<*mut std::ffi::c_void>(c"_hkToggle", hotkey_ref);

    debug!("toggle hotkey registered");
    Ok(())
}

/// Unregister the hotkey and remove the Carbon handler.
///
/// # Safety
/// Must be called from main thread.
pub unsafe fn uninstall_hotkeys(target: id) {
    let hk_toggle: *mut std::ffi::c_void = *(*target).load_ivar(c"_hkToggle");
    let hk_handler: *mut std::ffi::c_void = *(*target).load_ivar(c"_hkHandler");

    if !hk_toggle.is_null() {
        let _ = UnregisterEventHotKey(hk_toggle);
        (*target).store_ivar::<*mut std::ffi::c_void>(c"_hkToggle", std::ptr::null_mut());
    }
    if !hk_handler.is_null() {
        let _ = RemoveEventHandler(hk_handler);
        (*target).store_ivar::<*mut std::ffi::c_void>(c"_hkHandler", std::ptr::null_mut());
    }
}

/// Re-install hotkeys safely (unregister first to avoid leaks).
///
/// A failure is logged; the timer stays usable from the menu.
///
/// # Safety
/// Must be called from main thread.
pub unsafe fn reinstall_hotkeys(target: id, handler: HotkeyHandler) {
    uninstall_hotkeys(target);
    if let Err(e) = install_hotkeys(target, handler) {
        warn!("Hotkey reinstall failed: {}", e);
    }
}

/// Carbon event handler for hotkey events.
///
/// Publishes `AppEvent::Toggle` and asks the target to process the bus.
///
/// # Safety
/// Called by Carbon runtime on the main thread. Must not panic.
pub extern "C" fn hotkey_event_handler(
    _call_ref: EventHandlerCallRef,
    event: EventRef,
    user_data: *mut std::ffi::c_void,
) -> i32 {
    unsafe {
        if GetEventClass(event) != K_EVENT_CLASS_KEYBOARD
            || GetEventKind(event) != K_EVENT_HOTKEY_PRESSED
        {
            return NO_ERR;
        }

        let mut hot_id = EventHotKeyID {
            signature: 0,
            id: 0,
        };
        let status = GetEventParameter(
            event,
            K_EVENT_PARAM_DIRECT_OBJECT,
            TYPE_EVENT_HOTKEY_ID,
            std::ptr::null_mut(),
            std::mem::size_of::<EventHotKeyID>() as u32,
            std::ptr::null_mut(),
            &mut hot_id as *mut _ as *mut std::ffi::c_void,
        );
        if status == NO_ERR && hot_id.signature == SIG_POMO && hot_id.id == HKID_TOGGLE {
            publish(AppEvent::Toggle);
            let target = user_data as id;
            if !target.is_null() {
                let _: () = msg_send![target, processEvents];
            }
        }
        NO_ERR
    }
}
