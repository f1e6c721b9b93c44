//! Element factory and stylesheet injection over a [`Surface`].

use hovertip_types::{ClassNames, Result};
use tracing::debug;

use crate::surface::Surface;

const STYLESHEET_TEMPLATE: &str = include_str!("../assets/hovertip.css");
const PREFIX_PLACEHOLDER: &str = "%prefix%";

/// Create `tag` with `classes` applied and every non-empty attribute set.
/// Attributes with an empty value are skipped, not set to `""`.
pub fn create_element<S: Surface>(
    surface: &S,
    tag: &str,
    classes: &[&str],
    attributes: &[(&str, &str)],
) -> Result<S::Node> {
    let node = surface.create_element(tag)?;
    for class in classes.iter().filter(|c| !c.is_empty()) {
        surface.add_class(&node, class);
    }
    for (name, value) in attributes.iter().filter(|(_, value)| !value.is_empty()) {
        surface.set_attribute(&node, name, value)?;
    }
    Ok(node)
}

/// Append `children` to `parent` in order.
pub fn append<S: Surface>(surface: &S, parent: &S::Node, children: &[S::Node]) -> Result<()> {
    for child in children {
        surface.append_child(parent, child)?;
    }
    Ok(())
}

/// Insert `children` at the start of `parent`, keeping their given order.
pub fn prepend<S: Surface>(surface: &S, parent: &S::Node, children: &[S::Node]) -> Result<()> {
    for child in children.iter().rev() {
        surface.prepend_child(parent, child)?;
    }
    Ok(())
}

/// The bundled stylesheet with every class renamed to `classes`' prefix.
pub fn stylesheet(classes: &ClassNames) -> String {
    STYLESHEET_TEMPLATE.replace(PREFIX_PLACEHOLDER, &classes.tooltip)
}

/// Inject `css` as the first `<style>` in `<head>`, once per `style_id`.
///
/// Returns `Ok(false)` when a node with `style_id` already exists or the
/// document has no head.
pub fn load_styles<S: Surface>(surface: &S, style_id: &str, css: &str) -> Result<bool> {
    if surface.element_by_id(style_id).is_some() {
        return Ok(false);
    }
    let Some(head) = surface.head() else {
        return Ok(false);
    };

    let tag = create_element(surface, "style", &[], &[("id", style_id)])?;
    surface.set_text(&tag, css);
    prepend(surface, &head, &[tag])?;
    debug!(style_id, "Injected tooltip stylesheet");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSurface;

    #[test]
    fn test_create_element_skips_empty_attributes() {
        let surface = FakeSurface::new();
        let node = create_element(
            &surface,
            "div",
            &["a", "b", ""],
            &[("id", "x"), ("title", ""), ("role", "tooltip")],
        )
        .unwrap();

        assert_eq!(surface.tag(node), "div");
        assert_eq!(surface.classes(node), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(surface.attribute(node, "id").as_deref(), Some("x"));
        assert_eq!(surface.attribute(node, "title"), None);
        assert_eq!(surface.attribute(node, "role").as_deref(), Some("tooltip"));
    }

    #[test]
    fn test_prepend_preserves_order() {
        let surface = FakeSurface::new();
        let parent = surface.body_node();
        let existing = create_element(&surface, "p", &[], &[]).unwrap();
        append(&surface, &parent, &[existing]).unwrap();

        let a = create_element(&surface, "a", &[], &[]).unwrap();
        let b = create_element(&surface, "b", &[], &[]).unwrap();
        let c = create_element(&surface, "i", &[], &[]).unwrap();
        prepend(&surface, &parent, &[a, b, c]).unwrap();

        assert_eq!(surface.children(parent), vec![a, b, c, existing]);
    }

    #[test]
    fn test_load_styles_is_idempotent() {
        let surface = FakeSurface::new();
        let css = stylesheet(&ClassNames::default());

        assert!(load_styles(&surface, "hovertip-style", &css).unwrap());
        assert!(!load_styles(&surface, "hovertip-style", &css).unwrap());

        let head = surface.children(surface.head_node());
        assert_eq!(head.len(), 1);
        assert_eq!(surface.tag(head[0]), "style");
        assert!(surface.text_content(head[0]).contains(".hovertip--shown"));
    }

    #[test]
    fn test_stylesheet_uses_prefix() {
        let css = stylesheet(&ClassNames::with_prefix("tip"));
        assert!(css.contains(".tip-zoom-enter"));
        assert!(css.contains("@keyframes tip-zoom-in"));
        assert!(!css.contains(PREFIX_PLACEHOLDER));
    }
}
