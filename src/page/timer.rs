//! RAII guards over the browser timer APIs.
//!
//! Every scheduled callback on this page is owned by one of these guards, so
//! tearing down or replacing the owner cancels the pending timer and frees its
//! closure. A stale callback can therefore never fire into a context that no
//! longer exists.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// One-shot `setTimeout`. Cleared on drop if still pending.
pub struct Timeout {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(win: &Window, millis: i32, f: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let handle = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis,
        )?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = web_sys::window() {
            win.clear_timeout_with_handle(self.handle);
        }
    }
}

/// Repeating `setInterval`. Cleared on drop.
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(win: &Window, millis: i32, f: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let handle = win.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis,
        )?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }

    /// JS handle, for clearing the interval from inside its own callback
    /// (the guard itself must not be dropped while the callback runs).
    pub fn handle(&self) -> i32 {
        self.handle
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = web_sys::window() {
            win.clear_interval_with_handle(self.handle);
        }
    }
}
