//! CSS class names toggled on the tooltip wrapper.

use serde::{Deserialize, Serialize};

use super::Placement;

/// Full set of class names derived from a single prefix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassNames {
    /// Wrapper class, also used to sweep stale wrappers out of the document
    pub tooltip: String,
    /// Content container class
    pub content: String,
    /// Enter animation, present while a show is completing
    pub enter: String,
    /// Leave animation, present while a hide is completing
    pub leave: String,
    /// Settled visible state
    pub shown: String,
    /// Settled hidden state
    pub hidden: String,
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

impl ClassNames {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            tooltip: prefix.to_owned(),
            content: format!("{prefix}--content"),
            enter: format!("{prefix}-zoom-enter"),
            leave: format!("{prefix}-zoom-leave"),
            shown: format!("{prefix}--shown"),
            hidden: format!("{prefix}--hidden"),
            top: format!("{prefix}--top"),
            right: format!("{prefix}--right"),
            bottom: format!("{prefix}--bottom"),
            left: format!("{prefix}--left"),
        }
    }

    /// Class marking the wrapper's current placement.
    pub fn placement(&self, placement: Placement) -> &str {
        match placement {
            Placement::Top => &self.top,
            Placement::Right => &self.right,
            Placement::Bottom => &self.bottom,
            Placement::Left => &self.left,
        }
    }

    /// Every placement class, for clearing before a new placement is applied.
    pub fn placements(&self) -> [&str; 4] {
        Placement::ALL.map(|p| self.placement(p))
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self::with_prefix(super::config::DEFAULT_CLASS_PREFIX)
    }
}
