//! Tick source for the animations and the teardown flag they poll.

use js_sys::{Function, Promise};
use log::debug;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Something that can suspend an animation for a number of milliseconds.
pub trait Ticker {
    type Sleep: Future<Output = ()>;

    fn sleep(&self, ms: u32) -> Self::Sleep;

    /// Wake every pending sleep early and forget its timer.
    fn cancel_all(&self) {}
}

/// Shared teardown flag, checked after every tick.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// `setTimeout`-backed ticker for the browser.
///
/// Every scheduled timeout is remembered with its resolver so teardown can
/// clear the timer and still resolve the promise; the suspended task then
/// wakes, sees its cancel token and returns instead of hanging forever.
#[derive(Clone, Default)]
pub struct BrowserTicker {
    pending: Rc<RefCell<HashMap<i32, Function>>>,
}

impl BrowserTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl Ticker for BrowserTicker {
    type Sleep = Pin<Box<dyn Future<Output = ()>>>;

    fn sleep(&self, ms: u32) -> Self::Sleep {
        let timeout = ms.min(i32::MAX as u32) as i32;
        let mut scheduled: Option<(i32, Function)> = None;
        let promise = Promise::new(&mut |resolve: Function, _reject: Function| {
            let handle = web_sys::window().and_then(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
                    .ok()
            });
            match handle {
                Some(h) => scheduled = Some((h, resolve)),
                None => {
                    let _ = resolve.call0(&JsValue::UNDEFINED);
                }
            }
        });

        let pending = Rc::clone(&self.pending);
        let handle = scheduled.map(|(h, resolve)| {
            pending.borrow_mut().insert(h, resolve);
            h
        });
        Box::pin(async move {
            let _ = JsFuture::from(promise).await;
            if let Some(h) = handle {
                pending.borrow_mut().remove(&h);
            }
        })
    }

    fn cancel_all(&self) {
        let drained: Vec<(i32, Function)> = self.pending.borrow_mut().drain().collect();
        if drained.is_empty() {
            return;
        }
        debug!("clearing {} pending timers", drained.len());
        let win = web_sys::window();
        for (handle, resolve) in drained {
            if let Some(w) = &win {
                w.clear_timeout_with_handle(handle);
            }
            let _ = resolve.call0(&JsValue::UNDEFINED);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
