//! Seams between the tooltip logic and its host environment.
//!
//! The controller never calls the DOM or the timer API directly. A host
//! implements [`Surface`] for node manipulation and measurement, and
//! [`EventLoop`] (a [`Clock`] plus a [`Scheduler`]) for time.

use std::rc::Rc;

use hovertip_types::{Rect, Result, ScrollOffset, Size};

/// Pointer events the controller listens for on a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverEvent {
    Enter,
    Leave,
}

impl HoverEvent {
    /// DOM event type name.
    pub fn as_dom_event(&self) -> &'static str {
        match *self {
            Self::Enter => "mouseenter",
            Self::Leave => "mouseleave",
        }
    }
}

/// Document operations the controller needs.
///
/// Operations the host can refuse return [`Result`]; class and style
/// toggles are fire-and-forget, as they are in the DOM.
pub trait Surface {
    /// Handle to a node. Cloning must yield a handle to the same node.
    type Node: Clone + PartialEq + 'static;
    /// Token returned by [`Surface::listen`], consumed by [`Surface::unlisten`].
    type Listener: 'static;

    fn create_element(&self, tag: &str) -> Result<Self::Node>;
    fn body(&self) -> Option<Self::Node>;
    fn head(&self) -> Option<Self::Node>;
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// Every element in the document carrying `class`.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;

    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<()>;
    fn prepend_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<()>;
    /// Remove `node` from its parent, if it has one.
    fn detach(&self, node: &Self::Node);
    /// Whether `node` is currently inside the document body.
    fn is_attached(&self, node: &Self::Node) -> bool;
    fn clear_children(&self, node: &Self::Node);

    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<()>;
    fn set_text(&self, node: &Self::Node, text: &str);
    fn set_inner_html(&self, node: &Self::Node, html: &str);
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Viewport-relative bounding rectangle.
    fn bounding_rect(&self, node: &Self::Node) -> Rect;
    /// Rendered size including borders.
    fn offset_size(&self, node: &Self::Node) -> Size;
    fn scroll_offset(&self) -> ScrollOffset;

    fn listen(
        &self,
        node: &Self::Node,
        event: HoverEvent,
        handler: Rc<dyn Fn()>,
    ) -> Result<Self::Listener>;
    fn unlisten(&self, node: &Self::Node, listener: Self::Listener);
}

/// Opaque handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimerId(pub u64);

/// Millisecond wall clock (`Date.now()` in a browser).
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// One-shot timers (`setTimeout`/`clearTimeout`).
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerId;
    /// Cancelling an id that already fired is a no-op.
    fn cancel(&self, id: TimerId);
}

/// Clock and scheduler from the same host.
pub trait EventLoop: Clock + Scheduler {}

impl<T: Clock + Scheduler + ?Sized> EventLoop for T {}
