//! The persisted application document.
//!
//! One flat JSON snapshot holds the element plus the two UI settings that
//! survive a reload. Encoding and decoding live here so the storage adapter
//! in the frontend stays a thin localStorage wrapper.

use serde::{Deserialize, Serialize};

use crate::css::ExportFormat;
use crate::element::ElementState;

/// Preview viewport preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponsiveMode {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl ResponsiveMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponsiveMode::Desktop => "desktop",
            ResponsiveMode::Tablet => "tablet",
            ResponsiveMode::Mobile => "mobile",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "tablet" => ResponsiveMode::Tablet,
            "mobile" => ResponsiveMode::Mobile,
            _ => ResponsiveMode::Desktop,
        }
    }

    pub fn all() -> [ResponsiveMode; 3] {
        [
            ResponsiveMode::Desktop,
            ResponsiveMode::Tablet,
            ResponsiveMode::Mobile,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResponsiveMode::Desktop => "Desktop",
            ResponsiveMode::Tablet => "Tablet",
            ResponsiveMode::Mobile => "Mobile",
        }
    }
}

/// Everything written to the `visualizerState` storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub element_property: ElementState,
    pub responsive_mode: ResponsiveMode,
    pub export_format: ExportFormat,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            element_property: ElementState::default(),
            responsive_mode: ResponsiveMode::default(),
            export_format: ExportFormat::default(),
        }
    }
}

impl PersistedState {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::GradientKind;

    #[test]
    fn test_responsive_mode_round_trip() {
        for mode in ResponsiveMode::all() {
            assert_eq!(ResponsiveMode::from_str(mode.as_str()), mode);
        }
        assert_eq!(ResponsiveMode::from_str("bogus"), ResponsiveMode::Desktop);
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let mut state = PersistedState::default();
        state.element_property.width = 512.0;
        state.element_property.gradient.kind = GradientKind::Conic;
        state.element_property.box_shadow.inset = true;
        state.responsive_mode = ResponsiveMode::Tablet;
        state.export_format = ExportFormat::Scss;

        let json = state.to_json().unwrap();
        let back = PersistedState::from_json(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_json_keys_match_stored_document() {
        let json = PersistedState::default().to_json().unwrap();
        assert!(json.contains("\"elementProperty\""));
        assert!(json.contains("\"responsiveMode\":\"desktop\""));
        assert!(json.contains("\"exportFormat\":\"css\""));
    }

    #[test]
    fn test_malformed_json_is_an_error_not_a_panic() {
        assert!(PersistedState::from_json("{not json").is_err());
        assert!(PersistedState::from_json("{}").is_err());
    }
}
