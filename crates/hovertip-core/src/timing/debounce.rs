use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::surface::{EventLoop, TimerId};

/// Handle returned by [`debounce`]. Clones share the same pending state.
pub struct Debounced<A: 'static> {
    inner: Rc<Inner<A>>,
}

struct Inner<A> {
    func: Box<dyn Fn(A)>,
    delay_ms: u32,
    immediate: bool,
    event_loop: Rc<dyn EventLoop>,
    pending: Cell<Option<TimerId>>,
}

/// Wrap `func` so that a burst of calls collapses into one.
///
/// Without `immediate`, every call cancels the pending run and reschedules
/// it `delay_ms` out with the newest argument. With `immediate`, a call made
/// while nothing is pending runs `func` synchronously and opens a window of
/// `delay_ms`; calls inside the window are dropped and extend it.
pub fn debounce<A, F>(
    func: F,
    delay_ms: u32,
    immediate: bool,
    event_loop: Rc<dyn EventLoop>,
) -> Debounced<A>
where
    A: 'static,
    F: Fn(A) + 'static,
{
    Debounced {
        inner: Rc::new(Inner {
            func: Box::new(func),
            delay_ms,
            immediate,
            event_loop,
            pending: Cell::new(None),
        }),
    }
}

impl<A: 'static> Debounced<A> {
    pub fn call(&self, args: A) {
        let prior = self.inner.pending.take();
        if let Some(id) = prior {
            self.inner.event_loop.cancel(id);
        }

        if self.inner.immediate {
            arm(&self.inner, None);
            if prior.is_none() {
                (self.inner.func)(args);
            }
        } else {
            arm(&self.inner, Some(args));
        }
    }

    /// Whether a run (or an immediate-mode window) is outstanding.
    pub fn is_pending(&self) -> bool {
        self.inner.pending.get().is_some()
    }
}

impl<A: 'static> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

fn arm<A: 'static>(inner: &Rc<Inner<A>>, args: Option<A>) {
    let weak: Weak<Inner<A>> = Rc::downgrade(inner);
    let id = inner.event_loop.schedule(
        inner.delay_ms,
        Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if let Some(args) = args {
                (inner.func)(args);
            }
        }),
    );
    inner.pending.set(Some(id));
}
