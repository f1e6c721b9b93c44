//! Tooltip controller.
//!
//! One controller owns at most one wrapper/content pair. The lifecycle is
//!
//! ```text
//! Unmounted ─show─▶ Entering ─delay─▶ Shown ─hide─▶ Leaving ─delay─▶ Unmounted
//!                      ▲                               │
//!                      └──────── show (re-entry) ──────┘
//! ```
//!
//! A re-entry cancels the pending hide only when it comes within `delay`
//! of the leave; a leave cancels the pending show only when it comes within
//! `delay` of the enter. Anything slower lets the earlier timer run.

mod hover;
mod state;

#[cfg(test)]
mod tests;

use std::cell::RefCell;
use std::rc::Rc;

use hovertip_types::{
    ClassNames, ResolvedOptions, Result, TooltipConfig, TooltipError, TooltipOptions,
};
use tracing::{debug, warn};

use crate::content::TooltipContent;
use crate::dom;
use crate::placement::{self, Layout, Offsets};
use crate::surface::{EventLoop, Surface};

use hover::HoverBinding;
use state::{within, Nodes, State};

/// Handle to a tooltip controller. Clones drive the same tooltip.
pub struct Tooltip<S: Surface + 'static> {
    inner: Rc<Inner<S>>,
}

struct Inner<S: Surface + 'static> {
    surface: Rc<S>,
    event_loop: Rc<dyn EventLoop>,
    config: TooltipConfig,
    classes: ClassNames,
    offsets: Offsets,
    state: RefCell<State<S::Node>>,
    hovers: RefCell<Vec<HoverBinding<S>>>,
}

impl<S: Surface + 'static> Clone for Tooltip<S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S: Surface + 'static> Tooltip<S> {
    /// Validate `config` and inject the stylesheet into the document head.
    pub fn new(
        surface: Rc<S>,
        event_loop: Rc<dyn EventLoop>,
        config: TooltipConfig,
    ) -> Result<Self> {
        let config = config.validated()?;
        let classes = config.class_names();
        dom::load_styles(surface.as_ref(), &config.style_id, &dom::stylesheet(&classes))?;

        Ok(Self {
            inner: Rc::new(Inner {
                surface,
                event_loop,
                offsets: Offsets::from_config(&config),
                classes,
                config,
                state: RefCell::new(State::default()),
                hovers: RefCell::new(Vec::new()),
            }),
        })
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.inner.config
    }

    pub fn class_names(&self) -> &ClassNames {
        &self.inner.classes
    }

    /// Current wrapper node, if mounted.
    pub fn wrapper(&self) -> Option<S::Node> {
        self.inner.state.borrow().nodes.as_ref().map(|n| n.wrapper.clone())
    }

    /// Current content container, if mounted.
    pub fn content(&self) -> Option<S::Node> {
        self.inner.state.borrow().nodes.as_ref().map(|n| n.content.clone())
    }

    /// Show the tooltip next to `trigger`.
    ///
    /// Mounts the DOM pair if needed, renders `content`, positions the
    /// wrapper and starts the enter transition. The `shown` class lands
    /// `delay` ms later.
    pub fn show(
        &self,
        trigger: &S::Node,
        content: &TooltipContent<S::Node>,
        options: &TooltipOptions,
    ) -> Result<()> {
        let inner = &self.inner;
        let opts = inner.config.resolve(options);
        let nodes = self.ensure_mounted()?;
        let surface = inner.surface.as_ref();
        let classes = &inner.classes;
        let now = inner.event_loop.now_ms();

        inner.state.borrow_mut().last_enter_ms = Some(now);

        for class in classes.placements() {
            surface.remove_class(&nodes.wrapper, class);
        }
        content.render(surface, &nodes.content)?;
        self.apply_placement(trigger, &nodes.wrapper, &opts);

        let mut state = inner.state.borrow_mut();
        if within(state.last_leave_ms, now, opts.delay_ms) {
            if let Some(id) = state.hiding_timer.take() {
                inner.event_loop.cancel(id);
                surface.remove_class(&nodes.wrapper, &classes.leave);
                debug!("Re-entered before hide completed, keeping tooltip mounted");
            }
        }

        surface.remove_class(&nodes.wrapper, &classes.hidden);
        surface.add_class(&nodes.wrapper, &classes.enter);

        if let Some(previous) = state.showing_timer.take() {
            inner.event_loop.cancel(previous);
        }
        let weak = Rc::downgrade(inner);
        let wrapper = nodes.wrapper.clone();
        let id = inner.event_loop.schedule(
            opts.delay_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                inner.state.borrow_mut().showing_timer = None;
                // The wrapper may already be detached; toggling its classes is harmless.
                inner.surface.remove_class(&wrapper, &inner.classes.enter);
                inner.surface.add_class(&wrapper, &inner.classes.shown);
            }),
        );
        state.showing_timer = Some(id);
        Ok(())
    }

    /// Start the leave transition; the pair is destroyed `hidingDelay` ms later.
    pub fn hide(&self, options: &TooltipOptions) {
        let inner = &self.inner;
        let opts = inner.config.resolve(options);
        let surface = inner.surface.as_ref();
        let classes = &inner.classes;
        let now = inner.event_loop.now_ms();

        let mut state = inner.state.borrow_mut();
        state.last_leave_ms = Some(now);

        if within(state.last_enter_ms, now, opts.delay_ms) {
            if let Some(id) = state.showing_timer.take() {
                inner.event_loop.cancel(id);
                debug!("Left before show completed, cancelled enter transition");
            }
        }

        let wrapper = state.nodes.as_ref().map(|n| n.wrapper.clone());
        if let Some(wrapper) = &wrapper {
            surface.remove_class(wrapper, &classes.shown);
            surface.add_class(wrapper, &classes.leave);
        }

        if let Some(previous) = state.hiding_timer.take() {
            inner.event_loop.cancel(previous);
        }
        let generation = state.generation;
        let weak = Rc::downgrade(inner);
        let id = inner.event_loop.schedule(
            opts.hiding_delay_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                inner.state.borrow_mut().hiding_timer = None;
                if let Some(wrapper) = &wrapper {
                    inner.surface.remove_class(wrapper, &inner.classes.leave);
                    inner.surface.add_class(wrapper, &inner.classes.hidden);
                }
                // Only tear down the pair this hide was issued against.
                if inner.state.borrow().generation == generation {
                    Tooltip { inner }.destroy();
                } else {
                    debug!(generation, "Skipping stale hide completion");
                }
            }),
        );
        state.hiding_timer = Some(id);
    }

    /// Remove the wrapper from the document and forget the pair. Idempotent.
    pub fn destroy(&self) {
        let nodes = self.inner.state.borrow_mut().nodes.take();
        if let Some(nodes) = nodes {
            if self.inner.surface.is_attached(&nodes.wrapper) {
                self.inner.surface.detach(&nodes.wrapper);
            }
            debug!("Tooltip destroyed");
        }
    }

    /// Resolve `options` against this controller's config.
    pub fn resolve(&self, options: &TooltipOptions) -> ResolvedOptions {
        self.inner.config.resolve(options)
    }

    fn ensure_mounted(&self) -> Result<Nodes<S::Node>> {
        if let Some(nodes) = self.inner.state.borrow().nodes.clone() {
            return Ok(nodes);
        }

        let surface = self.inner.surface.as_ref();
        let classes = &self.inner.classes;

        // A previous controller (or page script) may have left a wrapper behind.
        for stale in surface.elements_by_class(&classes.tooltip) {
            surface.detach(&stale);
        }

        let wrapper = dom::create_element(surface, "div", &[classes.tooltip.as_str(), classes.hidden.as_str()], &[])?;
        let content = dom::create_element(surface, "div", &[classes.content.as_str()], &[])?;
        dom::append(surface, &wrapper, &[content.clone()])?;
        let body = surface.body().ok_or_else(|| TooltipError::dom("mount", "document has no body"))?;
        dom::append(surface, &body, &[wrapper.clone()])?;

        let nodes = Nodes { wrapper, content };
        let mut state = self.inner.state.borrow_mut();
        state.generation += 1;
        state.nodes = Some(nodes.clone());
        debug!(generation = state.generation, "Tooltip mounted");
        Ok(nodes)
    }

    fn apply_placement(&self, trigger: &S::Node, wrapper: &S::Node, opts: &ResolvedOptions) {
        let surface = self.inner.surface.as_ref();
        let layout = Layout {
            trigger: surface.bounding_rect(trigger),
            tooltip: surface.offset_size(wrapper),
            scroll: surface.scroll_offset(),
            margins: opts.margins,
            offsets: self.inner.offsets,
        };
        let position = placement::compute(opts.placement, &layout);

        surface.add_class(wrapper, self.inner.classes.placement(opts.placement));
        surface.set_style(wrapper, "left", &format!("{}px", position.left));
        surface.set_style(wrapper, "top", &format!("{}px", position.top));
    }
}

fn log_callback_error(action: &str, result: Result<()>) {
    if let Err(e) = result {
        warn!(action, error = %e, "Tooltip callback failed");
    }
}
