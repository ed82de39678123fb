//! The five CSS property groups edited by the visualizer.
//!
//! All types serialize with camelCase field names; the persisted JSON keeps
//! the key style of the stored `visualizerState` document.

use serde::{Deserialize, Serialize};

/// box-shadow: offsets, blur and spread in px plus color and inset flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxShadow {
    pub horizontal_offset: f64,
    pub vertical_offset: f64,
    pub blur_radius: f64,
    pub spread_radius: f64,
    pub color: String,
    pub inset: bool,
}

impl Default for BoxShadow {
    fn default() -> Self {
        Self {
            horizontal_offset: 5.0,
            vertical_offset: 5.0,
            blur_radius: 10.0,
            spread_radius: 0.0,
            color: "rgba(0, 0, 0, 0.2)".to_string(),
            inset: false,
        }
    }
}

/// Unit used for all four border-radius corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RadiusUnit {
    #[default]
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "rem")]
    Rem,
}

impl RadiusUnit {
    /// CSS text for the unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            RadiusUnit::Px => "px",
            RadiusUnit::Percent => "%",
            RadiusUnit::Em => "em",
            RadiusUnit::Rem => "rem",
        }
    }

    /// Parse from the select-widget value; unknown strings fall back to px.
    pub fn from_str(s: &str) -> Self {
        match s {
            "%" => RadiusUnit::Percent,
            "em" => RadiusUnit::Em,
            "rem" => RadiusUnit::Rem,
            _ => RadiusUnit::Px,
        }
    }

    pub fn all() -> [RadiusUnit; 4] {
        [
            RadiusUnit::Px,
            RadiusUnit::Percent,
            RadiusUnit::Em,
            RadiusUnit::Rem,
        ]
    }
}

/// border-radius: four corner values, one unit, and the "same for all
/// corners" flag. When `all` is set only `top_left` is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderRadius {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
    pub unit: RadiusUnit,
    pub all: bool,
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self {
            top_left: 8.0,
            top_right: 8.0,
            bottom_right: 8.0,
            bottom_left: 8.0,
            unit: RadiusUnit::Px,
            all: true,
        }
    }
}

/// transform: translate/scale/rotate/skew parameters. Translate is in px,
/// rotate and skew in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotate: f64,
    pub skew_x: f64,
    pub skew_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotate: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
        }
    }
}

impl Transform {
    /// True when every parameter sits at its identity value.
    pub fn is_identity(&self) -> bool {
        self.translate_x == 0.0
            && self.translate_y == 0.0
            && self.scale_x == 1.0
            && self.scale_y == 1.0
            && self.rotate == 0.0
            && self.skew_x == 0.0
            && self.skew_y == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic => "conic",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "radial" => GradientKind::Radial,
            "conic" => GradientKind::Conic,
            _ => GradientKind::Linear,
        }
    }

    pub fn all() -> [GradientKind; 3] {
        [
            GradientKind::Linear,
            GradientKind::Radial,
            GradientKind::Conic,
        ]
    }
}

/// One color stop of a gradient. `position` is a percentage in [0, 100];
/// the range is a widget contract, the model does not clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: String,
    pub position: f64,
}

/// gradient: kind, angle (degrees, used by linear and conic) and an ordered
/// stop list. The stored stop order is the edit order; sorting by position
/// happens only when CSS text is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub angle: f64,
    pub stops: Vec<ColorStop>,
}

impl Gradient {
    /// A gradient never has fewer stops than this.
    pub const MIN_STOPS: usize = 2;
    /// Upper bound enforced on `add_stop`.
    pub const MAX_STOPS: usize = 5;
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            angle: 90.0,
            stops: vec![
                ColorStop {
                    color: "#8B5CF6".to_string(),
                    position: 0.0,
                },
                ColorStop {
                    color: "#0EA5E9".to_string(),
                    position: 100.0,
                },
            ],
        }
    }
}

/// filter: one parameter per CSS filter function. Percent-valued functions
/// (brightness, contrast, opacity, saturate) are neutral at 100, the rest
/// at 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub blur: f64,
    pub brightness: f64,
    pub contrast: f64,
    pub grayscale: f64,
    pub hue_rotate: f64,
    pub invert: f64,
    pub opacity: f64,
    pub saturate: f64,
    pub sepia: f64,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            blur: 0.0,
            brightness: 100.0,
            contrast: 100.0,
            grayscale: 0.0,
            hue_rotate: 0.0,
            invert: 0.0,
            opacity: 100.0,
            saturate: 100.0,
            sepia: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gradient_has_two_stops() {
        let gradient = Gradient::default();
        assert_eq!(gradient.stops.len(), 2);
        assert_eq!(gradient.stops[0].position, 0.0);
        assert_eq!(gradient.stops[1].position, 100.0);
    }

    #[test]
    fn test_radius_unit_round_trip() {
        for unit in RadiusUnit::all() {
            assert_eq!(RadiusUnit::from_str(unit.as_str()), unit);
        }
        assert_eq!(RadiusUnit::from_str("bogus"), RadiusUnit::Px);
    }

    #[test]
    fn test_transform_identity() {
        assert!(Transform::default().is_identity());
        let mut transform = Transform::default();
        transform.scale_x = 1.2;
        assert!(!transform.is_identity());
    }

    #[test]
    fn test_gradient_kind_serializes_lowercase() {
        let json = serde_json::to_string(&GradientKind::Conic).unwrap();
        assert_eq!(json, "\"conic\"");
    }

    #[test]
    fn test_gradient_kind_round_trip() {
        for kind in GradientKind::all() {
            assert_eq!(GradientKind::from_str(kind.as_str()), kind);
        }
        assert_eq!(GradientKind::from_str("bogus"), GradientKind::Linear);
    }
}
