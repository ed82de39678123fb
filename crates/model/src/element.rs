//! The edited element: dimensions, colors, text, font and the five CSS
//! property groups as named fields.
//!
//! Every property group is always present, so there is no "property not
//! found" case anywhere in the mutation or generation paths.

use serde::{Deserialize, Serialize};

use crate::properties::{BorderRadius, BoxShadow, Filter, Gradient, Transform};

/// One complete state of the edited element. States are cloned on mutation;
/// a superseded state is never written to again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementState {
    pub width: f64,
    pub height: f64,
    pub background_color: String,
    pub color: String,
    pub text: String,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: String,
    pub box_shadow: BoxShadow,
    pub border_radius: BorderRadius,
    pub transform: Transform,
    pub gradient: Gradient,
    pub filter: Filter,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 200.0,
            background_color: "#ffffff".to_string(),
            color: "#333333".to_string(),
            text: "CSS Visualizer".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 18.0,
            font_weight: "500".to_string(),
            box_shadow: BoxShadow::default(),
            border_radius: BorderRadius::default(),
            transform: Transform::default(),
            gradient: Gradient::default(),
            filter: Filter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let state = ElementState::default();
        assert_eq!(state.width, 300.0);
        assert_eq!(state.height, 200.0);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = serde_json::to_string(&ElementState::default()).unwrap();
        assert!(json.contains("\"backgroundColor\""));
        assert!(json.contains("\"fontFamily\""));
        assert!(json.contains("\"boxShadow\""));
        assert!(json.contains("\"horizontalOffset\""));
    }

    #[test]
    fn test_json_round_trip() {
        let state = ElementState::default();
        let json = serde_json::to_string(&state).unwrap();
        let back: ElementState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
