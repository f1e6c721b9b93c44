//! Domain models for tooltip placement and configuration.

mod classes;
mod config;
mod geometry;
mod options;
mod placement;

pub use classes::ClassNames;
pub use config::{TooltipConfig, DEFAULT_DELAY_MS, FALLBACK_DELAY_MS, HOVER_THROTTLE_PADDING_MS};
pub use geometry::{Position, Rect, ScrollOffset, Size};
pub use options::{Margins, ResolvedOptions, TooltipOptions};
pub use placement::Placement;
