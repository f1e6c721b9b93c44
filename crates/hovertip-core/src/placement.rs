//! Tooltip placement geometry.
//!
//! Pure functions: the trigger's viewport rect and the tooltip's rendered
//! size go in, absolute document coordinates come out. Placement never
//! adapts to viewport edges, a tooltip near the edge is simply clipped.
//! Only vertical scroll is folded in; `left` stays viewport-relative.

use hovertip_types::{Margins, Placement, Position, Rect, ScrollOffset, Size, TooltipConfig};

/// Fixed gaps between trigger and tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offsets {
    pub top: f64,
    pub left: f64,
    pub right: f64,
}

impl Offsets {
    pub fn from_config(config: &TooltipConfig) -> Self {
        Self { top: config.offset_top, left: config.offset_left, right: config.offset_right }
    }
}

impl Default for Offsets {
    fn default() -> Self {
        Self::from_config(&TooltipConfig::default())
    }
}

/// Everything the placement formulas read.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub trigger: Rect,
    pub tooltip: Size,
    pub scroll: ScrollOffset,
    pub margins: Margins,
    pub offsets: Offsets,
}

pub fn compute(placement: Placement, layout: &Layout) -> Position {
    match placement {
        Placement::Top => place_top(layout),
        Placement::Right => place_right(layout),
        Placement::Bottom => place_bottom(layout),
        Placement::Left => place_left(layout),
    }
}

fn centered_left(layout: &Layout) -> f64 {
    layout.trigger.left + layout.trigger.width / 2.0 - layout.tooltip.width / 2.0
}

fn centered_top(layout: &Layout) -> f64 {
    layout.trigger.top + layout.scroll.y + layout.trigger.height / 2.0 - layout.tooltip.height / 2.0
}

pub fn place_top(layout: &Layout) -> Position {
    Position {
        left: centered_left(layout),
        top: layout.trigger.top + layout.scroll.y
            - layout.tooltip.height
            - layout.offsets.top
            - layout.margins.top,
    }
}

pub fn place_bottom(layout: &Layout) -> Position {
    Position {
        left: centered_left(layout),
        top: layout.trigger.bottom + layout.scroll.y + layout.offsets.top + layout.margins.top,
    }
}

pub fn place_left(layout: &Layout) -> Position {
    Position {
        left: layout.trigger.left
            - layout.tooltip.width
            - layout.offsets.left
            - layout.margins.left,
        top: centered_top(layout),
    }
}

pub fn place_right(layout: &Layout) -> Position {
    Position {
        left: layout.trigger.right + layout.offsets.right + layout.margins.right,
        top: centered_top(layout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(scroll_y: f64, margins: Margins) -> Layout {
        Layout {
            trigger: Rect::new(100.0, 100.0, 100.0, 50.0),
            tooltip: Size::new(60.0, 20.0),
            scroll: ScrollOffset { x: 0.0, y: scroll_y },
            margins,
            offsets: Offsets::default(),
        }
    }

    #[test]
    fn test_reference_rect_all_placements() {
        let l = layout(0.0, Margins::default());
        assert_eq!(compute(Placement::Top, &l), Position { left: 120.0, top: 70.0 });
        assert_eq!(compute(Placement::Bottom, &l), Position { left: 120.0, top: 160.0 });
        assert_eq!(compute(Placement::Left, &l), Position { left: 30.0, top: 115.0 });
        assert_eq!(compute(Placement::Right, &l), Position { left: 210.0, top: 115.0 });
    }

    #[test]
    fn test_vertical_scroll_is_added() {
        let l = layout(250.0, Margins::default());
        assert_eq!(compute(Placement::Top, &l).top, 320.0);
        assert_eq!(compute(Placement::Bottom, &l).top, 410.0);
        assert_eq!(compute(Placement::Right, &l).top, 365.0);
        // Horizontal position ignores scroll.
        assert_eq!(compute(Placement::Left, &l).left, 30.0);
    }

    #[test]
    fn test_margins_push_away_from_trigger() {
        let margins = Margins { top: 5.0, left: 7.0, right: 3.0, bottom: 99.0 };
        let l = layout(0.0, margins);
        assert_eq!(compute(Placement::Top, &l).top, 65.0);
        assert_eq!(compute(Placement::Bottom, &l).top, 165.0);
        assert_eq!(compute(Placement::Left, &l).left, 23.0);
        assert_eq!(compute(Placement::Right, &l).left, 213.0);
    }

    #[test]
    fn test_no_viewport_flip() {
        let mut l = layout(0.0, Margins::default());
        l.trigger = Rect::new(0.0, 0.0, 20.0, 20.0);
        let pos = compute(Placement::Top, &l);
        assert_eq!(pos, Position { left: -20.0, top: -30.0 });
    }
}
