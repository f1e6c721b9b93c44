use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::surface::{EventLoop, TimerId};

/// Handle returned by [`throttle`]. Clones share the same state.
pub struct Throttled<A: 'static> {
    inner: Rc<Inner<A>>,
}

struct Inner<A> {
    func: Box<dyn Fn(A)>,
    delay_ms: u32,
    event_loop: Rc<dyn EventLoop>,
    last_run: Cell<Option<f64>>,
    trailing: Cell<Option<TimerId>>,
}

/// Wrap `func` with a leading call plus a deferred trailing call.
///
/// A call more than `delay_ms` after the last run executes immediately and
/// drops any trailing call. A call inside the window (re)arms a trailing
/// call `delay_ms` after itself, so a steady stream of calls inside the
/// window keeps pushing the trailing run back.
pub fn throttle<A, F>(func: F, delay_ms: u32, event_loop: Rc<dyn EventLoop>) -> Throttled<A>
where
    A: 'static,
    F: Fn(A) + 'static,
{
    Throttled {
        inner: Rc::new(Inner {
            func: Box::new(func),
            delay_ms,
            event_loop,
            last_run: Cell::new(None),
            trailing: Cell::new(None),
        }),
    }
}

impl<A: 'static> Throttled<A> {
    pub fn call(&self, args: A) {
        let inner = &self.inner;
        let now = inner.event_loop.now_ms();
        let window_elapsed =
            inner.last_run.get().map_or(true, |last| now - last > f64::from(inner.delay_ms));

        if let Some(id) = inner.trailing.take() {
            inner.event_loop.cancel(id);
        }

        if window_elapsed {
            inner.last_run.set(Some(now));
            (inner.func)(args);
            return;
        }

        let weak: Weak<Inner<A>> = Rc::downgrade(inner);
        let id = inner.event_loop.schedule(
            inner.delay_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                inner.trailing.set(None);
                inner.last_run.set(Some(inner.event_loop.now_ms()));
                (inner.func)(args);
            }),
        );
        inner.trailing.set(Some(id));
    }

    /// Whether a trailing call is armed.
    pub fn has_trailing(&self) -> bool {
        self.inner.trailing.get().is_some()
    }
}

impl<A: 'static> Clone for Throttled<A> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}
