//! Hover bindings: throttled mouseenter/mouseleave listeners per trigger.

use std::rc::Rc;

use hovertip_types::{Result, TooltipOptions};
use tracing::debug;

use super::{log_callback_error, Inner, Tooltip};
use crate::content::TooltipContent;
use crate::surface::{HoverEvent, Surface};
use crate::timing::throttle;

/// Listeners attached to one trigger by one `on_hover` call.
pub(super) struct HoverBinding<S: Surface> {
    trigger: S::Node,
    listeners: Vec<S::Listener>,
}

impl<S: Surface + 'static> Tooltip<S> {
    /// Show on mouseenter and hide on mouseleave of `trigger`.
    ///
    /// Both listeners are throttled with a window of `delay + 300` ms so a
    /// pointer jittering across the trigger edge does not restart the
    /// transitions on every event. Calling this twice for one trigger
    /// stacks a second pair of listeners; use [`Tooltip::unregister`] first
    /// to replace a binding.
    pub fn on_hover(
        &self,
        trigger: &S::Node,
        content: TooltipContent<S::Node>,
        options: TooltipOptions,
    ) -> Result<()> {
        let resolved = self.resolve(&options);
        // Pin placement and delay so later config reads cannot shift them.
        let options = TooltipOptions {
            placement: Some(resolved.placement),
            delay: Some(f64::from(resolved.delay_ms)),
            ..options
        };
        let window_ms =
            resolved.delay_ms.saturating_add(self.inner.config.hover_throttle_padding_ms);

        let on_enter = {
            let weak = Rc::downgrade(&self.inner);
            let trigger = trigger.clone();
            throttle(
                move |()| {
                    if let Some(inner) = weak.upgrade() {
                        let result = Tooltip { inner }.show(&trigger, &content, &options);
                        log_callback_error("show", result);
                    }
                },
                window_ms,
                Rc::clone(&self.inner.event_loop),
            )
        };
        let on_leave = {
            let weak = Rc::downgrade(&self.inner);
            throttle(
                move |()| {
                    if let Some(inner) = weak.upgrade() {
                        Tooltip { inner }.hide(&options);
                    }
                },
                window_ms,
                Rc::clone(&self.inner.event_loop),
            )
        };

        let surface = self.inner.surface.as_ref();
        let enter =
            surface.listen(trigger, HoverEvent::Enter, Rc::new(move || on_enter.call(())))?;
        let leave = match surface.listen(
            trigger,
            HoverEvent::Leave,
            Rc::new(move || on_leave.call(())),
        ) {
            Ok(listener) => listener,
            Err(e) => {
                surface.unlisten(trigger, enter);
                return Err(e);
            }
        };

        self.inner
            .hovers
            .borrow_mut()
            .push(HoverBinding { trigger: trigger.clone(), listeners: vec![enter, leave] });
        debug!(window_ms, placement = %resolved.placement, "Hover binding registered");
        Ok(())
    }

    /// Detach every hover listener this controller attached to `trigger`.
    /// Returns `false` if there were none.
    pub fn unregister(&self, trigger: &S::Node) -> bool {
        let removed: Vec<HoverBinding<S>> = {
            let mut hovers = self.inner.hovers.borrow_mut();
            let (removed, kept): (Vec<_>, Vec<_>) =
                hovers.drain(..).partition(|b| &b.trigger == trigger);
            *hovers = kept;
            removed
        };

        let found = !removed.is_empty();
        for binding in removed {
            for listener in binding.listeners {
                self.inner.surface.unlisten(&binding.trigger, listener);
            }
        }
        found
    }

    /// Number of live `on_hover` bindings.
    pub fn hover_bindings(&self) -> usize {
        self.inner.hovers.borrow().len()
    }
}

impl<S: Surface + 'static> Inner<S> {
    fn unregister_all(&self) {
        for binding in self.hovers.borrow_mut().drain(..) {
            for listener in binding.listeners {
                self.surface.unlisten(&binding.trigger, listener);
            }
        }
    }
}

impl<S: Surface + 'static> Drop for Inner<S> {
    fn drop(&mut self) {
        self.unregister_all();
    }
}
