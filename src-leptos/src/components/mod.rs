//! Reusable UI components

mod tooltip;

pub use tooltip::HoverTip;
