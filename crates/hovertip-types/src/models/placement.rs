//! Tooltip placement relative to its trigger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the trigger the tooltip is drawn on.
///
/// Deserializes through [`Placement::from_string`], so an unknown name
/// from JS lands on `Bottom` instead of failing the whole options object.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Placement {
    /// Above the trigger, horizontally centered
    #[default]
    Top,
    /// Right of the trigger, vertically centered
    Right,
    /// Below the trigger, horizontally centered
    Bottom,
    /// Left of the trigger, vertically centered
    Left,
}

impl Placement {
    /// All placements, in class-clearing order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Bottom, Self::Right, Self::Top];

    /// Parse from string. Unknown values fall back to `Bottom`.
    pub fn from_string(s: &str) -> Self {
        match s {
            "top" => Self::Top,
            "right" => Self::Right,
            "left" => Self::Left,
            _ => Self::Bottom,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl From<String> for Placement {
    fn from(s: String) -> Self {
        Self::from_string(&s)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
