//! Thin helpers over the objc2 runtime.
//!
//! The UI layer talks to AppKit through untyped `msg_send!` calls on raw
//! `id` pointers; this module supplies those aliases, string conversion,
//! class lookup and ivar access on dynamically registered classes.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::CStr;

pub use objc2::encode::Encode;
pub use objc2::rc::Retained;
pub use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
pub use objc2::{msg_send, sel};
pub use objc2_foundation::NSString;

/// Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES` (a BOOL, not a Rust bool).
pub const YES: Bool = Bool::YES;

/// Objective-C `NO`.
pub const NO: Bool = Bool::NO;

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![get_class(c"NSApplication"), sharedApplication] }
}

/// Create an NSString owned by the caller.
///
/// Pass `Retained::as_ptr(&s) as id` to setters; AppKit copies what it keeps.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Create an NSString and hand out a +1 raw pointer.
///
/// Only for strings that live as long as the app (menu titles).
#[inline]
pub fn nsstring_id(s: &str) -> id {
    Retained::into_raw(NSString::from_str(s)) as id
}

/// Look up a class registered with the runtime.
///
/// # Panics
/// Panics if the class does not exist; only AppKit/Foundation classes and
/// classes this crate registers are looked up.
#[inline]
pub fn get_class(name: &CStr) -> &'static AnyClass {
    AnyClass::get(name).unwrap_or_else(|| panic!("Class '{}' not found", name.to_string_lossy()))
}

/// Ivar access on objects of classes registered with `ClassBuilder`.
pub trait ObjectExt {
    /// Load an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn load_ivar<T: Encode>(&self, name: &CStr) -> &T;

    /// Store a value in an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn store_ivar<T: Encode>(&mut self, name: &CStr, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &CStr) -> &T {
        let ivar = self
            .class()
            .instance_variable(name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name.to_string_lossy()));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &CStr, value: T) {
        let ivar = self
            .class()
            .instance_variable(name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name.to_string_lossy()));
        *ivar.load_mut::<T>(self) = value;
    }
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    objc2::rc::autoreleasepool(|_| f())
}
