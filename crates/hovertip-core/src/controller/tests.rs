use super::*;
use crate::surface::HoverEvent;
use crate::testing::{FakeNode, FakeSurface, ManualScheduler};
use hovertip_types::{ConfigError, Margins, Placement, Rect, ScrollOffset, Size};

struct Harness {
    surface: Rc<FakeSurface>,
    clock: Rc<ManualScheduler>,
    tooltip: Tooltip<FakeSurface>,
    trigger: FakeNode,
}

fn init_tracing() {
    drop(
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("hovertip_core=debug")
            .try_init(),
    );
}

fn harness() -> Harness {
    init_tracing();
    let surface = Rc::new(FakeSurface::new());
    surface.set_default_size(Size::new(60.0, 20.0));
    let clock = Rc::new(ManualScheduler::starting_at(10_000.0));
    let tooltip = Tooltip::new(surface.clone(), clock.clone(), TooltipConfig::default()).unwrap();
    let trigger = surface.trigger(Rect::new(100.0, 100.0, 100.0, 50.0));
    Harness { surface, clock, tooltip, trigger }
}

fn bottom(delay: f64) -> TooltipOptions {
    TooltipOptions::new().with_placement(Placement::Bottom).with_delay(delay)
}

#[test]
fn test_new_injects_stylesheet_once() {
    let h = harness();
    let second = Tooltip::new(h.surface.clone(), h.clock.clone(), TooltipConfig::default());
    assert!(second.is_ok());

    let head = h.surface.children(h.surface.head_node());
    assert_eq!(head.len(), 1);
    assert_eq!(h.surface.attribute(head[0], "id").as_deref(), Some("hovertip-style"));
}

#[test]
fn test_new_rejects_invalid_config() {
    let surface = Rc::new(FakeSurface::new());
    let clock = Rc::new(ManualScheduler::new());
    let config = TooltipConfig { class_prefix: String::new(), ..TooltipConfig::default() };

    let err = Tooltip::new(surface, clock, config).err().unwrap();
    assert!(matches!(err, TooltipError::Config(ConfigError::ValidationError { .. })));
}

#[test]
fn test_show_mounts_positions_and_settles() {
    let h = harness();
    h.tooltip.show(&h.trigger, &"Hello".into(), &bottom(100.0)).unwrap();

    let wrapper = h.tooltip.wrapper().unwrap();
    assert!(h.surface.is_attached(&wrapper));
    assert_eq!(
        h.surface.classes(wrapper),
        vec!["hovertip".to_string(), "hovertip--bottom".into(), "hovertip-zoom-enter".into()]
    );
    assert_eq!(h.surface.style(wrapper, "left").as_deref(), Some("120px"));
    assert_eq!(h.surface.style(wrapper, "top").as_deref(), Some("160px"));
    assert_eq!(h.surface.text_content(wrapper), "Hello");

    h.clock.advance(99);
    assert!(!h.surface.has_class(wrapper, "hovertip--shown"));
    h.clock.advance(1);
    assert!(h.surface.has_class(wrapper, "hovertip--shown"));
    assert!(!h.surface.has_class(wrapper, "hovertip-zoom-enter"));
}

#[test]
fn test_show_uses_call_margins_and_scroll() {
    let h = harness();
    h.surface.set_scroll(ScrollOffset { x: 0.0, y: 100.0 });
    let options = TooltipOptions::new()
        .with_margins(Margins { top: 5.0, ..Margins::default() })
        .with_placement(Placement::Top);
    h.tooltip.show(&h.trigger, &"x".into(), &options).unwrap();

    let wrapper = h.tooltip.wrapper().unwrap();
    // 100 + 100 - 20 - 10 - 5
    assert_eq!(h.surface.style(wrapper, "top").as_deref(), Some("165px"));
    assert!(h.surface.has_class(wrapper, "hovertip--top"));
}

#[test]
fn test_reshow_replaces_placement_class_and_content() {
    let h = harness();
    h.tooltip.show(&h.trigger, &"first".into(), &bottom(100.0)).unwrap();
    let options = TooltipOptions::new().with_placement(Placement::Right);
    h.tooltip.show(&h.trigger, &TooltipContent::Text("second".into()), &options).unwrap();

    let wrapper = h.tooltip.wrapper().unwrap();
    assert!(h.surface.has_class(wrapper, "hovertip--right"));
    assert!(!h.surface.has_class(wrapper, "hovertip--bottom"));
    assert_eq!(h.surface.style(wrapper, "left").as_deref(), Some("210px"));
    assert_eq!(h.surface.text_content(wrapper), "second");
}

#[test]
fn test_node_content_is_moved_into_container() {
    let h = harness();
    let node = h.surface.create_element("span").unwrap();
    h.surface.set_text(&node, "from node");

    h.tooltip.show(&h.trigger, &TooltipContent::Node(node), &bottom(100.0)).unwrap();
    let content = h.tooltip.content().unwrap();
    assert_eq!(h.surface.children(content), vec![node]);
    assert_eq!(h.surface.text_content(content), "from node");
}

#[test]
fn test_empty_content_leaves_container_empty() {
    let h = harness();
    h.tooltip.show(&h.trigger, &"first".into(), &bottom(100.0)).unwrap();
    h.tooltip.show(&h.trigger, &TooltipContent::Empty, &bottom(100.0)).unwrap();

    let content = h.tooltip.content().unwrap();
    assert!(h.surface.children(content).is_empty());
    assert_eq!(h.surface.text_content(content), "");
}

#[test]
fn test_hide_tears_down_after_delay() {
    let h = harness();
    h.tooltip.show(&h.trigger, &"Hello".into(), &bottom(100.0)).unwrap();
    h.clock.advance(100);
    let wrapper = h.tooltip.wrapper().unwrap();

    h.tooltip.hide(&bottom(100.0));
    assert!(h.surface.has_class(wrapper, "hovertip-zoom-leave"));
    assert!(!h.surface.has_class(wrapper, "hovertip--shown"));

    h.clock.advance(100);
    assert!(!h.surface.is_attached(&wrapper));
    assert!(h.surface.has_class(wrapper, "hovertip--hidden"));
    assert!(h.tooltip.wrapper().is_none());
    assert!(h.tooltip.content().is_none());
}

#[test]
fn test_destroy_twice_is_harmless() {
    let h = harness();
    h.tooltip.destroy();
    h.tooltip.show(&h.trigger, &"x".into(), &bottom(100.0)).unwrap();
    let wrapper = h.tooltip.wrapper().unwrap();

    h.tooltip.destroy();
    h.tooltip.destroy();
    assert!(h.tooltip.wrapper().is_none());
    assert!(!h.surface.is_attached(&wrapper));
}

#[test]
fn test_quick_reentry_cancels_pending_hide() {
    let h = harness();
    h.tooltip.show(&h.trigger, &"x".into(), &bottom(200.0)).unwrap();
    h.clock.advance(200);
    let wrapper = h.tooltip.wrapper().unwrap();

    h.tooltip.hide(&bottom(200.0));
    h.clock.advance(50);
    h.tooltip.show(&h.trigger, &"x".into(), &bottom(200.0)).unwrap();
    assert!(!h.surface.has_class(wrapper, "hovertip-zoom-leave"));

    h.clock.advance(1_000);
    assert_eq!(h.tooltip.wrapper(), Some(wrapper));
    assert!(h.surface.is_attached(&wrapper));
    assert!(h.surface.has_class(wrapper, "hovertip--shown"));
}

#[test]
fn test_slow_reentry_lets_pending_hide_finish() {
    let h = harness();
    let options = bottom(100.0).with_hiding_delay(500.0);
    h.tooltip.show(&h.trigger, &"x".into(), &options).unwrap();
    h.clock.advance(100);

    h.tooltip.hide(&options);
    h.clock.advance(150);
    // 150ms since leave is not within the 100ms delay: the hide stays armed.
    h.tooltip.show(&h.trigger, &"x".into(), &options).unwrap();

    h.clock.advance(350);
    assert!(h.tooltip.wrapper().is_none());
}

#[test]
fn test_quick_leave_cancels_pending_show() {
    let h = harness();
    h.tooltip.show(&h.trigger, &"x".into(), &bottom(200.0)).unwrap();
    let wrapper = h.tooltip.wrapper().unwrap();

    h.clock.advance(50);
    h.tooltip.hide(&bottom(200.0));
    h.clock.advance(199);
    assert!(!h.surface.has_class(wrapper, "hovertip--shown"));
    assert!(h.surface.is_attached(&wrapper));

    h.clock.advance(1);
    assert!(!h.surface.is_attached(&wrapper));
    assert!(!h.surface.has_class(wrapper, "hovertip--shown"));
}

#[test]
fn test_stale_hide_does_not_destroy_newer_mount() {
    let h = harness();
    let options = bottom(100.0).with_hiding_delay(500.0);
    h.tooltip.show(&h.trigger, &"x".into(), &options).unwrap();
    h.clock.advance(100);
    let first = h.tooltip.wrapper().unwrap();

    h.tooltip.hide(&options);
    h.clock.advance(200);
    h.tooltip.destroy();
    h.tooltip.show(&h.trigger, &"y".into(), &options).unwrap();
    let second = h.tooltip.wrapper().unwrap();
    assert_ne!(first, second);

    h.clock.advance(300);
    assert_eq!(h.tooltip.wrapper(), Some(second));
    assert!(h.surface.is_attached(&second));
    assert!(h.surface.has_class(second, "hovertip--shown"));
    assert!(h.surface.has_class(first, "hovertip--hidden"));
}

#[test]
fn test_mount_sweeps_stale_wrappers() {
    let h = harness();
    let stray = h.surface.create_element("div").unwrap();
    h.surface.add_class(&stray, "hovertip");
    h.surface.append_child(&h.surface.body_node(), &stray).unwrap();

    h.tooltip.show(&h.trigger, &"x".into(), &bottom(100.0)).unwrap();
    assert!(!h.surface.is_attached(&stray));
    assert_eq!(h.surface.elements_by_class("hovertip").len(), 1);
}

#[test]
fn test_on_hover_end_to_end() {
    let h = harness();
    h.tooltip.on_hover(&h.trigger, "Hello".into(), bottom(100.0)).unwrap();
    assert_eq!(h.surface.listener_count(h.trigger), 2);

    h.surface.dispatch(h.trigger, HoverEvent::Enter);
    h.clock.advance(100);
    let wrapper = h.tooltip.wrapper().unwrap();
    assert!(h.surface.has_class(wrapper, "hovertip--shown"));
    assert_eq!(h.surface.text_content(wrapper), "Hello");

    h.surface.dispatch(h.trigger, HoverEvent::Leave);
    h.clock.advance(100);
    assert!(!h.surface.is_attached(&wrapper));
    assert!(h.tooltip.wrapper().is_none());
}

#[test]
fn test_on_hover_throttles_rapid_reentry() {
    let h = harness();
    h.tooltip.on_hover(&h.trigger, "x".into(), bottom(100.0)).unwrap();

    h.surface.dispatch(h.trigger, HoverEvent::Enter);
    h.clock.advance(10);
    h.surface.dispatch(h.trigger, HoverEvent::Leave);
    h.clock.advance(10);
    // Inside the 400ms window: deferred to t+400.
    h.surface.dispatch(h.trigger, HoverEvent::Enter);

    h.clock.advance(200);
    assert!(h.tooltip.wrapper().is_none());

    h.clock.advance(200);
    assert!(h.tooltip.wrapper().is_some());
}

#[test]
fn test_unregister_removes_listeners() {
    let h = harness();
    h.tooltip.on_hover(&h.trigger, "x".into(), TooltipOptions::new()).unwrap();
    assert_eq!(h.tooltip.hover_bindings(), 1);

    assert!(h.tooltip.unregister(&h.trigger));
    assert!(!h.tooltip.unregister(&h.trigger));
    assert_eq!(h.surface.listener_count(h.trigger), 0);

    h.surface.dispatch(h.trigger, HoverEvent::Enter);
    assert!(h.tooltip.wrapper().is_none());
}

#[test]
fn test_dropping_controller_detaches_listeners() {
    let Harness { surface, clock, tooltip, trigger } = harness();
    tooltip.on_hover(&trigger, "x".into(), TooltipOptions::new()).unwrap();
    drop(tooltip);

    assert_eq!(surface.listener_count(trigger), 0);
    clock.advance(1_000);
}
