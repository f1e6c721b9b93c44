//! What a tooltip displays.

use hovertip_types::Result;

use crate::dom;
use crate::surface::Surface;

/// Tooltip body.
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipContent<N> {
    /// Plain text, inserted as a text node
    Text(String),
    /// HTML markup, parsed by the host
    Markup(String),
    /// An existing node, moved into the tooltip on every show
    Node(N),
    /// Nothing; the container is cleared and left empty
    Empty,
}

/// Strings are markup, so `"<b>Hi</b>"` renders bold.
impl<N> From<&str> for TooltipContent<N> {
    fn from(markup: &str) -> Self {
        Self::Markup(markup.to_owned())
    }
}

impl<N> From<String> for TooltipContent<N> {
    fn from(markup: String) -> Self {
        Self::Markup(markup)
    }
}

impl<N: Clone + PartialEq + 'static> TooltipContent<N> {
    /// Replace everything inside `container` with this content.
    pub fn render<S>(&self, surface: &S, container: &N) -> Result<()>
    where
        S: Surface<Node = N>,
    {
        surface.clear_children(container);
        match self {
            Self::Text(text) => {
                let holder = dom::create_element(surface, "div", &[], &[])?;
                surface.set_text(&holder, text);
                surface.append_child(container, &holder)
            }
            Self::Markup(html) => {
                let holder = dom::create_element(surface, "div", &[], &[])?;
                surface.set_inner_html(&holder, html);
                surface.append_child(container, &holder)
            }
            Self::Node(node) => surface.append_child(container, node),
            Self::Empty => Ok(()),
        }
    }
}
