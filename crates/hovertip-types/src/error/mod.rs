//! Typed error definitions for hovertip.
//!
//! Every failure here is a caller programming error (wrong argument type,
//! bad configuration) or a DOM call the host refused. None of them is
//! transient, so nothing retries.

mod config;
mod tooltip;

pub use config::ConfigError;
pub use tooltip::TooltipError;

/// Standard Result type using TooltipError.
pub type Result<T> = std::result::Result<T, TooltipError>;
