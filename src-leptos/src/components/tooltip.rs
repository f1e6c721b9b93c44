//! Tooltip component

use hovertip_core::TooltipContent;
use hovertip_types::{Placement, TooltipOptions};
use leptos::html::Span;
use leptos::prelude::*;

use crate::global::with_global;

/// Wraps `children` in a span that shows `text` on hover through the page's
/// default controller.
#[component]
pub fn HoverTip(
    /// Tooltip text, inserted as plain text
    #[prop(into)]
    text: String,
    /// Side of the trigger; defaults to the controller's placement
    #[prop(optional)]
    placement: Option<Placement>,
    /// Show/hide transition delay in ms
    #[prop(optional)]
    delay: Option<u32>,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<Span>::new();

    let mut options = TooltipOptions::new();
    if let Some(placement) = placement {
        options = options.with_placement(placement);
    }
    if let Some(delay) = delay {
        options = options.with_delay(f64::from(delay));
    }

    Effect::new(move |_| {
        let Some(el) = target.get() else {
            return;
        };
        let node: web_sys::Node = el.into();
        let content = TooltipContent::Text(text.clone());
        let bound = with_global(|t| {
            t.unregister(&node);
            t.on_hover(&node, content, options)
        });
        if let Some(Err(e)) = bound {
            log::error!("Failed to bind tooltip: {}", e);
        }
    });

    on_cleanup(move || {
        if let Some(el) = target.get_untracked() {
            let node: web_sys::Node = el.into();
            with_global(|t| t.unregister(&node));
        }
    });

    view! {
        <span class="hovertip-trigger" node_ref=target>
            {children()}
        </span>
    }
}
