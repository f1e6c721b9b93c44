//! `Clock` and `Scheduler` on the browser event loop.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use hovertip_core::{Clock, Scheduler, TimerId};

/// `Date.now()` plus `setTimeout` via gloo-timers.
///
/// Live timeouts are kept by id; dropping a gloo `Timeout` clears it, so
/// `cancel` is just removal. A timeout cannot be dropped from inside its
/// own callback, so fired ids are queued and pruned on the next call.
#[derive(Default)]
pub struct BrowserEventLoop {
    next_id: Cell<u64>,
    timers: RefCell<HashMap<u64, Timeout>>,
    fired: Rc<RefCell<Vec<u64>>>,
}

impl BrowserEventLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timeouts scheduled and not yet fired or cancelled.
    pub fn pending(&self) -> usize {
        self.prune();
        self.timers.borrow().len()
    }

    fn prune(&self) {
        let fired: Vec<u64> = self.fired.borrow_mut().drain(..).collect();
        if fired.is_empty() {
            return;
        }
        let mut timers = self.timers.borrow_mut();
        for id in fired {
            drop(timers.remove(&id));
        }
    }
}

impl Clock for BrowserEventLoop {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

impl Scheduler for BrowserEventLoop {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerId {
        self.prune();
        let id = self.next_id.get().wrapping_add(1);
        self.next_id.set(id);

        let fired = Rc::downgrade(&self.fired);
        let timeout = Timeout::new(delay_ms, move || {
            task();
            // After the task: it may schedule, and scheduling prunes.
            if let Some(fired) = fired.upgrade() {
                fired.borrow_mut().push(id);
            }
        });
        self.timers.borrow_mut().insert(id, timeout);
        TimerId(id)
    }

    fn cancel(&self, id: TimerId) {
        self.prune();
        drop(self.timers.borrow_mut().remove(&id.0));
    }
}
