//! Per-call tooltip options and their resolved form.

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

use super::Placement;

/// Options accepted by `on_hover`/`show`/`hide`. Every field is optional;
/// unset fields are filled from the controller's [`super::TooltipConfig`].
///
/// Field names are camelCase on the wire so a plain JS object
/// (`{ placement: "bottom", marginTop: 4, delay: 100 }`) deserializes as-is.
/// Numeric fields are read loosely: `"150"` is 150, `true` is 1, and
/// anything else unusable becomes `None` and falls back at resolve time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipOptions {
    /// Side of the trigger to place the tooltip on
    pub placement: Option<Placement>,
    #[serde(deserialize_with = "loose_number")]
    pub margin_top: Option<f64>,
    #[serde(deserialize_with = "loose_number")]
    pub margin_left: Option<f64>,
    #[serde(deserialize_with = "loose_number")]
    pub margin_right: Option<f64>,
    #[serde(deserialize_with = "loose_number")]
    pub margin_bottom: Option<f64>,
    /// Milliseconds before a show or hide completes
    #[serde(deserialize_with = "loose_number")]
    pub delay: Option<f64>,
    /// Milliseconds before a hide completes, when it should differ from `delay`
    #[serde(deserialize_with = "loose_number")]
    pub hiding_delay: Option<f64>,
}

/// Any JS value an options field might carry.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
    Flag(bool),
    Other(IgnoredAny),
}

fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseNumber::Number(n)) => Some(n),
        Some(LooseNumber::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(LooseNumber::Flag(b)) => Some(if b { 1.0 } else { 0.0 }),
        Some(LooseNumber::Other(_)) | None => None,
    })
}

impl TooltipOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay = Some(delay_ms);
        self
    }

    pub fn with_hiding_delay(mut self, delay_ms: f64) -> Self {
        self.hiding_delay = Some(delay_ms);
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margin_top = Some(margins.top);
        self.margin_left = Some(margins.left);
        self.margin_right = Some(margins.right);
        self.margin_bottom = Some(margins.bottom);
        self
    }
}

/// Pixel margins added on top of the fixed placement offsets.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Options with every default applied. This is what the controller and the
/// placement engine actually consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOptions {
    pub placement: Placement,
    pub margins: Margins,
    pub delay_ms: u32,
    pub hiding_delay_ms: u32,
}
