//! Partial updates for the element and its property groups.
//!
//! Widgets report single-field changes; an update struct carries `Some` for
//! the fields being changed and `None` for everything else. `apply` performs
//! the field-level merge and returns the new value, leaving the base
//! untouched.

use crate::element::ElementState;
use crate::properties::{
    BorderRadius, BoxShadow, ColorStop, Filter, Gradient, GradientKind, RadiusUnit, Transform,
};

#[derive(Debug, Clone, Default)]
pub struct BoxShadowUpdate {
    pub horizontal_offset: Option<f64>,
    pub vertical_offset: Option<f64>,
    pub blur_radius: Option<f64>,
    pub spread_radius: Option<f64>,
    pub color: Option<String>,
    pub inset: Option<bool>,
}

impl BoxShadowUpdate {
    pub fn apply(&self, base: &BoxShadow) -> BoxShadow {
        BoxShadow {
            horizontal_offset: self.horizontal_offset.unwrap_or(base.horizontal_offset),
            vertical_offset: self.vertical_offset.unwrap_or(base.vertical_offset),
            blur_radius: self.blur_radius.unwrap_or(base.blur_radius),
            spread_radius: self.spread_radius.unwrap_or(base.spread_radius),
            color: self.color.clone().unwrap_or_else(|| base.color.clone()),
            inset: self.inset.unwrap_or(base.inset),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BorderRadiusUpdate {
    pub top_left: Option<f64>,
    pub top_right: Option<f64>,
    pub bottom_right: Option<f64>,
    pub bottom_left: Option<f64>,
    pub unit: Option<RadiusUnit>,
    pub all: Option<bool>,
}

impl BorderRadiusUpdate {
    pub fn apply(&self, base: &BorderRadius) -> BorderRadius {
        BorderRadius {
            top_left: self.top_left.unwrap_or(base.top_left),
            top_right: self.top_right.unwrap_or(base.top_right),
            bottom_right: self.bottom_right.unwrap_or(base.bottom_right),
            bottom_left: self.bottom_left.unwrap_or(base.bottom_left),
            unit: self.unit.unwrap_or(base.unit),
            all: self.all.unwrap_or(base.all),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransformUpdate {
    pub translate_x: Option<f64>,
    pub translate_y: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
    pub rotate: Option<f64>,
    pub skew_x: Option<f64>,
    pub skew_y: Option<f64>,
}

impl TransformUpdate {
    pub fn apply(&self, base: &Transform) -> Transform {
        Transform {
            translate_x: self.translate_x.unwrap_or(base.translate_x),
            translate_y: self.translate_y.unwrap_or(base.translate_y),
            scale_x: self.scale_x.unwrap_or(base.scale_x),
            scale_y: self.scale_y.unwrap_or(base.scale_y),
            rotate: self.rotate.unwrap_or(base.rotate),
            skew_x: self.skew_x.unwrap_or(base.skew_x),
            skew_y: self.skew_y.unwrap_or(base.skew_y),
        }
    }
}

/// Gradient updates replace the stop list wholesale when `stops` is set;
/// the stop-row widgets send the full edited list.
#[derive(Debug, Clone, Default)]
pub struct GradientUpdate {
    pub kind: Option<GradientKind>,
    pub angle: Option<f64>,
    pub stops: Option<Vec<ColorStop>>,
}

impl GradientUpdate {
    pub fn apply(&self, base: &Gradient) -> Gradient {
        Gradient {
            kind: self.kind.unwrap_or(base.kind),
            angle: self.angle.unwrap_or(base.angle),
            stops: self.stops.clone().unwrap_or_else(|| base.stops.clone()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub blur: Option<f64>,
    pub brightness: Option<f64>,
    pub contrast: Option<f64>,
    pub grayscale: Option<f64>,
    pub hue_rotate: Option<f64>,
    pub invert: Option<f64>,
    pub opacity: Option<f64>,
    pub saturate: Option<f64>,
    pub sepia: Option<f64>,
}

impl FilterUpdate {
    pub fn apply(&self, base: &Filter) -> Filter {
        Filter {
            blur: self.blur.unwrap_or(base.blur),
            brightness: self.brightness.unwrap_or(base.brightness),
            contrast: self.contrast.unwrap_or(base.contrast),
            grayscale: self.grayscale.unwrap_or(base.grayscale),
            hue_rotate: self.hue_rotate.unwrap_or(base.hue_rotate),
            invert: self.invert.unwrap_or(base.invert),
            opacity: self.opacity.unwrap_or(base.opacity),
            saturate: self.saturate.unwrap_or(base.saturate),
            sepia: self.sepia.unwrap_or(base.sepia),
        }
    }
}

/// Top-level element fields (dimensions, colors, text, font). Property
/// groups have their own update types.
#[derive(Debug, Clone, Default)]
pub struct ElementUpdate {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub background_color: Option<String>,
    pub color: Option<String>,
    pub text: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<String>,
}

impl ElementUpdate {
    pub fn apply(&self, base: &ElementState) -> ElementState {
        ElementState {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            background_color: self
                .background_color
                .clone()
                .unwrap_or_else(|| base.background_color.clone()),
            color: self.color.clone().unwrap_or_else(|| base.color.clone()),
            text: self.text.clone().unwrap_or_else(|| base.text.clone()),
            font_family: self
                .font_family
                .clone()
                .unwrap_or_else(|| base.font_family.clone()),
            font_size: self.font_size.unwrap_or(base.font_size),
            font_weight: self
                .font_weight
                .clone()
                .unwrap_or_else(|| base.font_weight.clone()),
            ..base.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_merge_keeps_unset_fields() {
        let base = BoxShadow::default();
        let update = BoxShadowUpdate {
            blur_radius: Some(24.0),
            ..Default::default()
        };
        let merged = update.apply(&base);
        assert_eq!(merged.blur_radius, 24.0);
        assert_eq!(merged.horizontal_offset, base.horizontal_offset);
        assert_eq!(merged.vertical_offset, base.vertical_offset);
        assert_eq!(merged.color, base.color);
        assert_eq!(merged.inset, base.inset);
    }

    #[test]
    fn test_empty_update_is_identity() {
        let base = Transform {
            rotate: 15.0,
            ..Transform::default()
        };
        assert_eq!(TransformUpdate::default().apply(&base), base);
    }

    #[test]
    fn test_gradient_stops_replaced_wholesale() {
        let base = Gradient::default();
        let stops = vec![
            ColorStop {
                color: "#000000".to_string(),
                position: 10.0,
            },
            ColorStop {
                color: "#ffffff".to_string(),
                position: 90.0,
            },
        ];
        let merged = GradientUpdate {
            stops: Some(stops.clone()),
            ..Default::default()
        }
        .apply(&base);
        assert_eq!(merged.stops, stops);
        assert_eq!(merged.kind, base.kind);
        assert_eq!(merged.angle, base.angle);
    }

    #[test]
    fn test_element_update_leaves_property_groups_alone() {
        let base = ElementState::default();
        let merged = ElementUpdate {
            width: Some(640.0),
            text: Some("hello".to_string()),
            ..Default::default()
        }
        .apply(&base);
        assert_eq!(merged.width, 640.0);
        assert_eq!(merged.text, "hello");
        assert_eq!(merged.height, base.height);
        assert_eq!(merged.box_shadow, base.box_shadow);
        assert_eq!(merged.gradient, base.gradient);
        assert_eq!(merged.filter, base.filter);
    }
}
