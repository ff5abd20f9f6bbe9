//! Deterministic tickers for driving the animations in tests.

use crate::timer::Ticker;
use std::cell::{Cell, RefCell};
use std::future::{Future, Ready};
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

/// Resolves every sleep immediately and records the requested delays.
#[derive(Clone, Default)]
pub struct InstantTicker {
    pub sleeps: Rc<RefCell<Vec<u32>>>,
    pub cancels: Rc<Cell<usize>>,
}

impl Ticker for InstantTicker {
    type Sleep = Ready<()>;

    fn sleep(&self, ms: u32) -> Ready<()> {
        self.sleeps.borrow_mut().push(ms);
        std::future::ready(())
    }

    fn cancel_all(&self) {
        self.cancels.set(self.cancels.get() + 1);
    }
}

/// Every sleep stays pending until the gate is opened (or cancelled).
#[derive(Clone, Default)]
pub struct GateTicker {
    open: Rc<Cell<bool>>,
    pub sleeps: Rc<Cell<usize>>,
}

impl GateTicker {
    pub fn open(&self) {
        self.open.set(true);
    }
}

pub struct Gate(Rc<Cell<bool>>);

impl Future for Gate {
    type Output = ();

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        if self.0.get() {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }
}

impl Ticker for GateTicker {
    type Sleep = Gate;

    fn sleep(&self, _ms: u32) -> Gate {
        self.sleeps.set(self.sleeps.get() + 1);
        Gate(Rc::clone(&self.open))
    }

    fn cancel_all(&self) {
        self.open();
    }
}

pub fn poll_once<F: Future>(fut: Pin<&mut F>) -> Poll<F::Output> {
    let mut cx = Context::from_waker(futures::task::noop_waker_ref());
    fut.poll(&mut cx)
}
