use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use hovertip_types::{Rect, Result, ScrollOffset, Size, TooltipError};

use crate::surface::{HoverEvent, Surface};

/// Handle into a [`FakeSurface`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeNode(usize);

#[derive(Default)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    parent: Option<usize>,
    children: Vec<usize>,
    rect: Rect,
    size: Size,
}

struct Listener {
    id: u64,
    node: usize,
    event: HoverEvent,
    handler: Rc<dyn Fn()>,
}

/// Document tree with a `<head>` and a `<body>`, measurements set by hand.
pub struct FakeSurface {
    elements: RefCell<Vec<Element>>,
    listeners: RefCell<Vec<Listener>>,
    next_listener: Cell<u64>,
    scroll: Cell<ScrollOffset>,
    default_size: Cell<Size>,
}

const HEAD: usize = 0;
const BODY: usize = 1;

impl FakeSurface {
    pub fn new() -> Self {
        let head = Element { tag: "head".into(), ..Element::default() };
        let body = Element { tag: "body".into(), ..Element::default() };
        Self {
            elements: RefCell::new(vec![head, body]),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(1),
            scroll: Cell::new(ScrollOffset::default()),
            default_size: Cell::new(Size::default()),
        }
    }

    /// Create an element already attached to `<body>`.
    pub fn trigger(&self, rect: Rect) -> FakeNode {
        let node = self.push(Element { tag: "button".into(), rect, ..Element::default() });
        self.link(BODY, node.0, false);
        node
    }

    /// Size every element created from now on reports.
    pub fn set_default_size(&self, size: Size) {
        self.default_size.set(size);
    }

    pub fn set_scroll(&self, scroll: ScrollOffset) {
        self.scroll.set(scroll);
    }

    pub fn set_rect(&self, node: FakeNode, rect: Rect) {
        self.elements.borrow_mut()[node.0].rect = rect;
    }

    /// Fire every handler registered for `event` on `node`.
    pub fn dispatch(&self, node: FakeNode, event: HoverEvent) {
        let handlers: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .filter(|l| l.node == node.0 && l.event == event)
            .map(|l| Rc::clone(&l.handler))
            .collect();
        for handler in handlers {
            handler();
        }
    }

    pub fn listener_count(&self, node: FakeNode) -> usize {
        self.listeners.borrow().iter().filter(|l| l.node == node.0).count()
    }

    pub fn classes(&self, node: FakeNode) -> Vec<String> {
        self.elements.borrow()[node.0].classes.clone()
    }

    pub fn has_class(&self, node: FakeNode, class: &str) -> bool {
        self.elements.borrow()[node.0].classes.iter().any(|c| c == class)
    }

    pub fn tag(&self, node: FakeNode) -> String {
        self.elements.borrow()[node.0].tag.clone()
    }

    pub fn attribute(&self, node: FakeNode, name: &str) -> Option<String> {
        self.elements.borrow()[node.0].attributes.get(name).cloned()
    }

    pub fn style(&self, node: FakeNode, property: &str) -> Option<String> {
        self.elements.borrow()[node.0].styles.get(property).cloned()
    }

    pub fn children(&self, node: FakeNode) -> Vec<FakeNode> {
        self.elements.borrow()[node.0].children.iter().map(|&i| FakeNode(i)).collect()
    }

    pub fn head_node(&self) -> FakeNode {
        FakeNode(HEAD)
    }

    pub fn body_node(&self) -> FakeNode {
        FakeNode(BODY)
    }

    /// Concatenated text and markup of `node` and its descendants.
    pub fn text_content(&self, node: FakeNode) -> String {
        let elements = self.elements.borrow();
        let mut out = String::new();
        collect_text(&elements, node.0, &mut out);
        out
    }

    fn push(&self, mut element: Element) -> FakeNode {
        let mut elements = self.elements.borrow_mut();
        if element.size == Size::default() {
            element.size = self.default_size.get();
        }
        elements.push(element);
        FakeNode(elements.len() - 1)
    }

    fn link(&self, parent: usize, child: usize, front: bool) {
        self.unlink(child);
        let mut elements = self.elements.borrow_mut();
        if front {
            elements[parent].children.insert(0, child);
        } else {
            elements[parent].children.push(child);
        }
        elements[child].parent = Some(parent);
    }

    fn unlink(&self, child: usize) {
        let mut elements = self.elements.borrow_mut();
        if let Some(parent) = elements[child].parent.take() {
            elements[parent].children.retain(|&c| c != child);
        }
    }

    fn in_document(&self, index: usize) -> bool {
        let elements = self.elements.borrow();
        let mut current = index;
        loop {
            if current == HEAD || current == BODY {
                return true;
            }
            match elements[current].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn attached_indices(&self) -> Vec<usize> {
        let len = self.elements.borrow().len();
        (0..len).filter(|&i| self.in_document(i)).collect()
    }
}

impl Default for FakeSurface {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_text(elements: &[Element], index: usize, out: &mut String) {
    out.push_str(&elements[index].text);
    for &child in &elements[index].children {
        collect_text(elements, child, out);
    }
}

impl Surface for FakeSurface {
    type Node = FakeNode;
    type Listener = u64;

    fn create_element(&self, tag: &str) -> Result<FakeNode> {
        if tag.is_empty() {
            return Err(TooltipError::dom("createElement", "empty tag name"));
        }
        Ok(self.push(Element { tag: tag.to_owned(), ..Element::default() }))
    }

    fn body(&self) -> Option<FakeNode> {
        Some(FakeNode(BODY))
    }

    fn head(&self) -> Option<FakeNode> {
        Some(FakeNode(HEAD))
    }

    fn element_by_id(&self, id: &str) -> Option<FakeNode> {
        self.attached_indices()
            .into_iter()
            .find(|&i| self.elements.borrow()[i].attributes.get("id").map(String::as_str) == Some(id))
            .map(FakeNode)
    }

    fn elements_by_class(&self, class: &str) -> Vec<FakeNode> {
        self.attached_indices()
            .into_iter()
            .filter(|&i| self.elements.borrow()[i].classes.iter().any(|c| c == class))
            .map(FakeNode)
            .collect()
    }

    fn append_child(&self, parent: &FakeNode, child: &FakeNode) -> Result<()> {
        self.link(parent.0, child.0, false);
        Ok(())
    }

    fn prepend_child(&self, parent: &FakeNode, child: &FakeNode) -> Result<()> {
        self.link(parent.0, child.0, true);
        Ok(())
    }

    fn detach(&self, node: &FakeNode) {
        self.unlink(node.0);
    }

    fn is_attached(&self, node: &FakeNode) -> bool {
        node.0 != BODY && self.in_document(node.0)
    }

    fn clear_children(&self, node: &FakeNode) {
        let children = std::mem::take(&mut self.elements.borrow_mut()[node.0].children);
        let mut elements = self.elements.borrow_mut();
        for child in children {
            elements[child].parent = None;
        }
        elements[node.0].text.clear();
    }

    fn add_class(&self, node: &FakeNode, class: &str) {
        let mut elements = self.elements.borrow_mut();
        let classes = &mut elements[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, node: &FakeNode, class: &str) {
        self.elements.borrow_mut()[node.0].classes.retain(|c| c != class);
    }

    fn set_attribute(&self, node: &FakeNode, name: &str, value: &str) -> Result<()> {
        self.elements.borrow_mut()[node.0].attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_text(&self, node: &FakeNode, text: &str) {
        text.clone_into(&mut self.elements.borrow_mut()[node.0].text);
    }

    fn set_inner_html(&self, node: &FakeNode, html: &str) {
        self.clear_children(node);
        self.set_text(node, html);
    }

    fn set_style(&self, node: &FakeNode, property: &str, value: &str) {
        self.elements.borrow_mut()[node.0].styles.insert(property.to_owned(), value.to_owned());
    }

    fn bounding_rect(&self, node: &FakeNode) -> Rect {
        self.elements.borrow()[node.0].rect
    }

    fn offset_size(&self, node: &FakeNode) -> Size {
        self.elements.borrow()[node.0].size
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.scroll.get()
    }

    fn listen(&self, node: &FakeNode, event: HoverEvent, handler: Rc<dyn Fn()>) -> Result<u64> {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push(Listener { id, node: node.0, event, handler });
        Ok(id)
    }

    fn unlisten(&self, node: &FakeNode, listener: u64) {
        self.listeners.borrow_mut().retain(|l| !(l.node == node.0 && l.id == listener));
    }
}
