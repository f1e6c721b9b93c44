//! Per-controller configuration, injected at construction.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{ClassNames, Margins, Placement, ResolvedOptions, TooltipOptions};
use crate::error::ConfigError;

/// Show/hide delay used when neither the call nor the config sets one.
pub const DEFAULT_DELAY_MS: u32 = 200;
/// Last-resort delay when a configured delay is unusable.
pub const FALLBACK_DELAY_MS: u32 = 100;
/// Added to the delay to form the hover listeners' throttle window.
pub const HOVER_THROTTLE_PADDING_MS: u32 = 300;
/// Fixed gap between trigger and tooltip on every side.
pub const DEFAULT_OFFSET_PX: f64 = 10.0;
pub(crate) const DEFAULT_CLASS_PREFIX: &str = "hovertip";
const DEFAULT_STYLE_ID: &str = "hovertip-style";

/// Controller configuration: defaults for every option plus DOM naming.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    /// Placement when a call does not specify one
    #[serde(default)]
    pub placement: Placement,
    /// Margins when a call does not specify them
    #[serde(default)]
    pub margins: Margins,
    /// Delay in ms when a call does not specify a usable one; 0 means
    /// [`FALLBACK_DELAY_MS`]
    #[validate(range(max = 60_000_u32))]
    #[serde(default = "default_delay")]
    pub delay_ms: u32,
    /// Padding added to the delay for the hover throttle window
    #[serde(default = "default_throttle_padding")]
    pub hover_throttle_padding_ms: u32,
    #[validate(range(min = 0.0))]
    #[serde(default = "default_offset")]
    pub offset_top: f64,
    #[validate(range(min = 0.0))]
    #[serde(default = "default_offset")]
    pub offset_left: f64,
    #[validate(range(min = 0.0))]
    #[serde(default = "default_offset")]
    pub offset_right: f64,
    /// Prefix every CSS class is derived from
    #[validate(length(min = 1))]
    #[serde(default = "default_class_prefix")]
    pub class_prefix: String,
    /// `id` of the injected `<style>` element
    #[validate(length(min = 1))]
    #[serde(default = "default_style_id")]
    pub style_id: String,
}

fn default_delay() -> u32 {
    DEFAULT_DELAY_MS
}

fn default_throttle_padding() -> u32 {
    HOVER_THROTTLE_PADDING_MS
}

fn default_offset() -> f64 {
    DEFAULT_OFFSET_PX
}

fn default_class_prefix() -> String {
    DEFAULT_CLASS_PREFIX.to_owned()
}

fn default_style_id() -> String {
    DEFAULT_STYLE_ID.to_owned()
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            margins: Margins::default(),
            delay_ms: DEFAULT_DELAY_MS,
            hover_throttle_padding_ms: HOVER_THROTTLE_PADDING_MS,
            offset_top: DEFAULT_OFFSET_PX,
            offset_left: DEFAULT_OFFSET_PX,
            offset_right: DEFAULT_OFFSET_PX,
            class_prefix: default_class_prefix(),
            style_id: default_style_id(),
        }
    }
}

impl TooltipConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))?;
        config.validated()
    }

    /// Run the field validators, handing the config back on success.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;
        Ok(self)
    }

    pub fn class_names(&self) -> ClassNames {
        ClassNames::with_prefix(&self.class_prefix)
    }

    /// Delay used when a call's delay is missing, zero, negative or NaN.
    pub fn effective_delay_ms(&self) -> u32 {
        if self.delay_ms == 0 {
            FALLBACK_DELAY_MS
        } else {
            self.delay_ms
        }
    }

    /// Fill every unset option from this config.
    pub fn resolve(&self, options: &TooltipOptions) -> ResolvedOptions {
        let delay_ms = usable_delay(options.delay).unwrap_or_else(|| self.effective_delay_ms());
        ResolvedOptions {
            placement: options.placement.unwrap_or(self.placement),
            margins: Margins {
                top: finite_or(options.margin_top, self.margins.top),
                left: finite_or(options.margin_left, self.margins.left),
                right: finite_or(options.margin_right, self.margins.right),
                bottom: finite_or(options.margin_bottom, self.margins.bottom),
            },
            delay_ms,
            hiding_delay_ms: usable_delay(options.hiding_delay).unwrap_or(delay_ms),
        }
    }
}

/// A JS-style "truthy" positive delay, truncated to whole milliseconds.
fn usable_delay(value: Option<f64>) -> Option<u32> {
    match value {
        Some(v) if v.is_finite() && v >= 1.0 => Some(v.min(f64::from(u32::MAX)) as u32),
        _ => None,
    }
}

fn finite_or(value: Option<f64>, fallback: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(fallback)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = TooltipConfig::default();
        let resolved = config.resolve(&TooltipOptions::new());
        assert_eq!(resolved.placement, Placement::Top);
        assert_eq!(resolved.margins, Margins::default());
        assert_eq!(resolved.delay_ms, 200);
        assert_eq!(resolved.hiding_delay_ms, 200);
    }

    #[test]
    fn test_call_site_overrides_win() {
        let config = TooltipConfig { placement: Placement::Left, ..TooltipConfig::default() };
        let options = TooltipOptions::new().with_placement(Placement::Bottom).with_delay(100.0);
        let resolved = config.resolve(&options);
        assert_eq!(resolved.placement, Placement::Bottom);
        assert_eq!(resolved.delay_ms, 100);
        assert_eq!(resolved.hiding_delay_ms, 100);
    }

    #[test]
    fn test_falsy_delay_falls_back() {
        let config = TooltipConfig::default();
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let resolved = config.resolve(&TooltipOptions::new().with_delay(bad));
            assert_eq!(resolved.delay_ms, 200, "delay {bad} should fall back");
        }

        let zero = TooltipConfig { delay_ms: 0, ..TooltipConfig::default() };
        assert_eq!(zero.resolve(&TooltipOptions::new()).delay_ms, FALLBACK_DELAY_MS);
    }

    #[test]
    fn test_hiding_delay_independent() {
        let config = TooltipConfig::default();
        let resolved =
            config.resolve(&TooltipOptions::new().with_delay(150.0).with_hiding_delay(400.0));
        assert_eq!(resolved.delay_ms, 150);
        assert_eq!(resolved.hiding_delay_ms, 400);
    }

    #[test]
    fn test_options_from_js_shape() {
        let json = r#"{"placement":"bottom","marginTop":4,"delay":100}"#;
        let options: TooltipOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.placement, Some(Placement::Bottom));
        assert_eq!(options.margin_top, Some(4.0));
        assert_eq!(options.delay, Some(100.0));
        assert_eq!(options.margin_left, None);
    }

    #[test]
    fn test_unknown_placement_from_js_falls_back_to_bottom() {
        let options: TooltipOptions = serde_json::from_str(r#"{"placement":"diagonal"}"#).unwrap();
        assert_eq!(options.placement, Some(Placement::Bottom));
        assert_eq!(TooltipConfig::default().resolve(&options).placement, Placement::Bottom);
    }

    #[test]
    fn test_numeric_fields_from_js_are_coerced() {
        let options: TooltipOptions =
            serde_json::from_str(r#"{"delay":"150","marginTop":" 4 ","hidingDelay":true}"#).unwrap();
        assert_eq!(options.delay, Some(150.0));
        assert_eq!(options.margin_top, Some(4.0));

        let resolved = TooltipConfig::default().resolve(&options);
        assert_eq!(resolved.delay_ms, 150);
        assert_eq!(resolved.margins.top, 4.0);
        assert_eq!(resolved.hiding_delay_ms, 1);
    }

    #[test]
    fn test_unusable_numeric_fields_from_js_fall_back() {
        let json = r#"{"delay":"soon","marginLeft":[1],"marginRight":{"px":2},"hidingDelay":null}"#;
        let options: TooltipOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.delay, None);
        assert_eq!(options.margin_left, None);
        assert_eq!(options.margin_right, None);

        let resolved = TooltipConfig::default().resolve(&options);
        assert_eq!(resolved.delay_ms, DEFAULT_DELAY_MS);
        assert_eq!(resolved.hiding_delay_ms, DEFAULT_DELAY_MS);
        assert_eq!(resolved.margins, Margins::default());
    }

    #[test]
    fn test_zero_config_delay_is_valid_and_uses_fallback() {
        let config = TooltipConfig::from_json(r#"{"delayMs": 0}"#).unwrap();
        let resolved = config.resolve(&TooltipOptions::new());
        assert_eq!(resolved.delay_ms, FALLBACK_DELAY_MS);
        assert_eq!(resolved.hiding_delay_ms, FALLBACK_DELAY_MS);

        let err = TooltipConfig::from_json(r#"{"delayMs": 60001}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { ref field, .. } if field == "delay_ms"));
    }

    #[test]
    fn test_config_validation() {
        let config = TooltipConfig::from_json(r#"{"delayMs": 250}"#).unwrap();
        assert_eq!(config.delay_ms, 250);
        assert_eq!(config.style_id, "hovertip-style");

        let err = TooltipConfig::from_json(r#"{"classPrefix": ""}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { ref field, .. } if field == "class_prefix"));

        let err = TooltipConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
