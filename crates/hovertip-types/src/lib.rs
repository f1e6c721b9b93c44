//! # Hovertip Types
//!
//! Options, geometry, class names and error definitions shared by the
//! hovertip crates.
//!
//! - **`error`** - Typed errors for tooltip calls and configuration
//! - **`models`** - Placement, options, config and layout geometry
//!
//! ## Architecture Role
//!
//! `hovertip-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!        hovertip-types (this crate)
//!                │
//!                ▼
//!          hovertip-core
//!                │
//!                ▼
//!         hovertip-leptos
//! ```
//!
//! Options and errors are serde-serializable so they can cross the
//! wasm-bindgen boundary as plain JS objects.

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, Result, TooltipError};

// Re-export core model types
pub use models::{
    ClassNames, Margins, Placement, Position, Rect, ResolvedOptions, ScrollOffset, Size,
    TooltipConfig, TooltipOptions,
};
