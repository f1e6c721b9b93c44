//! # Hovertip Core
//!
//! Host-independent tooltip logic.
//!
//! ```text
//! hovertip-core/src/
//! ├── surface.rs     # Surface / Clock / Scheduler seams the host implements
//! ├── timing/        # debounce + throttle over a Scheduler
//! ├── placement.rs   # pure geometry for the four placements
//! ├── dom.rs         # element factory, append/prepend, style loader
//! ├── content.rs     # TooltipContent variants and rendering
//! ├── controller/    # show/hide lifecycle, hover bindings
//! └── testing/       # in-memory surface + virtual-time scheduler
//! ```
//!
//! Nothing here touches a real browser. `hovertip-leptos` supplies the
//! web-sys `Surface` and gloo-timers `Scheduler`; tests use [`testing`].

// Test-only lints: allow panic!, float comparisons etc. in test code
#![cfg_attr(test, allow(clippy::panic, clippy::float_cmp, clippy::unwrap_used))]

pub mod content;
pub mod controller;
pub mod dom;
pub mod placement;
pub mod surface;
pub mod timing;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use content::TooltipContent;
pub use controller::Tooltip;
pub use placement::Offsets;
pub use surface::{Clock, EventLoop, HoverEvent, Scheduler, Surface, TimerId};
pub use timing::{debounce, throttle, Debounced, Throttled};

pub use hovertip_types::{
    ClassNames, Placement, Result, TooltipConfig, TooltipError, TooltipOptions,
};
