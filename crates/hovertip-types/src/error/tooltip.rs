//! Errors surfaced by tooltip calls.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ConfigError;

/// Errors returned by the controller, the timing utilities and the DOM surface.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum TooltipError {
    /// `show`/`on_hover` received something that is not a DOM node
    #[error("Wrong type of trigger. It should be an instance of Node. But {given} given.")]
    InvalidTrigger {
        /// JS `typeof` of the rejected value
        given: String,
    },

    /// A timing utility was handed something that cannot be called
    #[error("fn is not a function (got {given})")]
    NotCallable {
        /// JS `typeof` of the rejected value
        given: String,
    },

    /// The host document refused a DOM operation
    #[error("DOM operation '{operation}' failed: {message}")]
    Dom {
        /// Operation that failed (e.g. `createElement`)
        operation: String,
        /// Message reported by the host
        message: String,
    },

    /// Options or controller config were rejected
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl TooltipError {
    /// Shorthand for a DOM failure.
    pub fn dom(operation: &str, message: impl Into<String>) -> Self {
        Self::Dom { operation: operation.to_owned(), message: message.into() }
    }
}
