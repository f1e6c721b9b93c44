//! `Surface` over the live browser DOM.
//!
//! Handles are `web_sys::Node` so fragments and text nodes can be passed as
//! content. Element-only operations (classes, attributes, style,
//! measurement) are no-ops on anything that is not an element.

use std::rc::Rc;

use hovertip_core::{HoverEvent, Surface};
use hovertip_types::{Rect, Result, ScrollOffset, Size, TooltipError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, Window};

/// Attached event listener. Dropping it without `unlisten` leaves the JS
/// side pointing at a freed closure, so the controller always unlistens.
pub struct DomListener {
    event: HoverEvent,
    closure: Closure<dyn Fn(web_sys::Event)>,
}

/// The page the WASM module runs in.
#[derive(Clone)]
pub struct WebSurface {
    window: Window,
    document: Document,
}

impl WebSurface {
    pub fn new(window: Window) -> Result<Self> {
        let document =
            window.document().ok_or_else(|| TooltipError::dom("document", "window has no document"))?;
        Ok(Self { window, document })
    }

    /// Surface for the global `window`.
    pub fn from_global() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| TooltipError::dom("window", "no global window"))?;
        Self::new(window)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn dom_err(operation: &'static str) -> impl Fn(JsValue) -> TooltipError {
    move |e| TooltipError::dom(operation, format!("{:?}", e))
}

fn as_element(node: &Node) -> Option<&Element> {
    node.dyn_ref::<Element>()
}

impl Surface for WebSurface {
    type Node = Node;
    type Listener = DomListener;

    fn create_element(&self, tag: &str) -> Result<Node> {
        self.document.create_element(tag).map(Node::from).map_err(dom_err("createElement"))
    }

    fn body(&self) -> Option<Node> {
        self.document.body().map(Node::from)
    }

    fn head(&self) -> Option<Node> {
        self.document.head().map(Node::from)
    }

    fn element_by_id(&self, id: &str) -> Option<Node> {
        self.document.get_element_by_id(id).map(Node::from)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Node> {
        // The collection is live; snapshot it before callers start detaching.
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length()).filter_map(|i| collection.item(i)).map(Node::from).collect()
    }

    fn append_child(&self, parent: &Node, child: &Node) -> Result<()> {
        parent.append_child(child).map(drop).map_err(dom_err("appendChild"))
    }

    fn prepend_child(&self, parent: &Node, child: &Node) -> Result<()> {
        let first = parent.first_child();
        parent.insert_before(child, first.as_ref()).map(drop).map_err(dom_err("insertBefore"))
    }

    fn detach(&self, node: &Node) {
        if let Some(parent) = node.parent_node() {
            if let Err(e) = parent.remove_child(node) {
                log::warn!("removeChild failed: {:?}", e);
            }
        }
    }

    fn is_attached(&self, node: &Node) -> bool {
        self.document.body().is_some_and(|body| body.contains(Some(node)))
    }

    fn clear_children(&self, node: &Node) {
        node.set_text_content(None);
    }

    fn add_class(&self, node: &Node, class: &str) {
        if let Some(el) = as_element(node) {
            if let Err(e) = el.class_list().add_1(class) {
                log::warn!("classList.add({}) failed: {:?}", class, e);
            }
        }
    }

    fn remove_class(&self, node: &Node, class: &str) {
        if let Some(el) = as_element(node) {
            if let Err(e) = el.class_list().remove_1(class) {
                log::warn!("classList.remove({}) failed: {:?}", class, e);
            }
        }
    }

    fn set_attribute(&self, node: &Node, name: &str, value: &str) -> Result<()> {
        match as_element(node) {
            Some(el) => el.set_attribute(name, value).map_err(dom_err("setAttribute")),
            None => Ok(()),
        }
    }

    fn set_text(&self, node: &Node, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_inner_html(&self, node: &Node, html: &str) {
        if let Some(el) = as_element(node) {
            el.set_inner_html(html);
        }
    }

    fn set_style(&self, node: &Node, property: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            if let Err(e) = el.style().set_property(property, value) {
                log::warn!("style.{} = {} failed: {:?}", property, value, e);
            }
        }
    }

    fn bounding_rect(&self, node: &Node) -> Rect {
        as_element(node).map_or_else(Rect::default, |el| {
            let r = el.get_bounding_client_rect();
            Rect {
                left: r.left(),
                top: r.top(),
                right: r.right(),
                bottom: r.bottom(),
                width: r.width(),
                height: r.height(),
            }
        })
    }

    fn offset_size(&self, node: &Node) -> Size {
        node.dyn_ref::<HtmlElement>().map_or_else(Size::default, |el| {
            Size::new(f64::from(el.offset_width()), f64::from(el.offset_height()))
        })
    }

    fn scroll_offset(&self) -> ScrollOffset {
        ScrollOffset {
            x: self.window.scroll_x().unwrap_or_default(),
            y: self.window.scroll_y().unwrap_or_default(),
        }
    }

    fn listen(&self, node: &Node, event: HoverEvent, handler: Rc<dyn Fn()>) -> Result<DomListener> {
        let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| handler());
        node.add_event_listener_with_callback(event.as_dom_event(), closure.as_ref().unchecked_ref())
            .map_err(dom_err("addEventListener"))?;
        Ok(DomListener { event, closure })
    }

    fn unlisten(&self, node: &Node, listener: DomListener) {
        let callback = listener.closure.as_ref().unchecked_ref();
        if let Err(e) = node.remove_event_listener_with_callback(listener.event.as_dom_event(), callback) {
            log::warn!("removeEventListener failed: {:?}", e);
        }
    }
}
