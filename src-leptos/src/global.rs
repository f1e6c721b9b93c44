//! Per-thread shared instances for the host page.
//!
//! Everything in a browser tab runs on one thread, so "global" here means
//! one event loop and one default controller per page.

use std::cell::RefCell;
use std::rc::Rc;

use hovertip_core::{EventLoop, Tooltip};
use hovertip_types::{Result, TooltipConfig};

use crate::surface::WebSurface;
use crate::timers::BrowserEventLoop;

thread_local! {
    static EVENT_LOOP: Rc<BrowserEventLoop> = Rc::new(BrowserEventLoop::new());
    static GLOBAL: RefCell<Option<Tooltip<WebSurface>>> = const { RefCell::new(None) };
}

/// The page's event loop.
pub fn event_loop() -> Rc<dyn EventLoop> {
    EVENT_LOOP.with(|l| Rc::clone(l) as Rc<dyn EventLoop>)
}

/// New controller on the live page with `config`.
pub fn controller(config: TooltipConfig) -> Result<Tooltip<WebSurface>> {
    Tooltip::new(Rc::new(WebSurface::from_global()?), event_loop(), config)
}

/// The page's default controller, created with the default config on first use.
pub fn global() -> Result<Tooltip<WebSurface>> {
    GLOBAL.with(|slot| {
        if let Some(tooltip) = slot.borrow().as_ref() {
            return Ok(tooltip.clone());
        }
        let tooltip = controller(TooltipConfig::default())?;
        *slot.borrow_mut() = Some(tooltip.clone());
        log::debug!("Global tooltip controller created");
        Ok(tooltip)
    })
}

/// Run `f` against the default controller, logging if it cannot be created.
pub fn with_global<R>(f: impl FnOnce(&Tooltip<WebSurface>) -> R) -> Option<R> {
    match global() {
        Ok(tooltip) => Some(f(&tooltip)),
        Err(e) => {
            log::error!("Tooltip unavailable: {}", e);
            None
        }
    }
}
