//! CSS text generation.
//!
//! The per-property value functions here are the single source of truth for
//! how a state renders: the preview surface feeds them into inline style and
//! the exporter wraps them into declaration blocks, so the two can never
//! drift apart.

use serde::{Deserialize, Serialize};

use crate::element::ElementState;
use crate::properties::{BorderRadius, BoxShadow, Filter, Gradient, GradientKind, Transform};

/// Output flavor of the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Css,
    Scss,
    Tailwind,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Tailwind => "tailwind",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "scss" => ExportFormat::Scss,
            "tailwind" => ExportFormat::Tailwind,
            _ => ExportFormat::Css,
        }
    }

    pub fn all() -> [ExportFormat; 3] {
        [
            ExportFormat::Css,
            ExportFormat::Scss,
            ExportFormat::Tailwind,
        ]
    }

    /// Label shown on the format switcher.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Css => "CSS",
            ExportFormat::Scss => "SCSS",
            ExportFormat::Tailwind => "Tailwind",
        }
    }
}

/// `[inset ]<h>px <v>px <blur>px <spread>px <color>`
pub fn box_shadow_value(shadow: &BoxShadow) -> String {
    format!(
        "{}{}px {}px {}px {}px {}",
        if shadow.inset { "inset " } else { "" },
        shadow.horizontal_offset,
        shadow.vertical_offset,
        shadow.blur_radius,
        shadow.spread_radius,
        shadow.color,
    )
}

/// One value when all corners share it, otherwise the four-value shorthand
/// in top-left, top-right, bottom-right, bottom-left order.
pub fn border_radius_value(radius: &BorderRadius) -> String {
    let unit = radius.unit.as_str();
    if radius.all {
        format!("{}{}", radius.top_left, unit)
    } else {
        format!(
            "{}{} {}{} {}{} {}{}",
            radius.top_left,
            unit,
            radius.top_right,
            unit,
            radius.bottom_right,
            unit,
            radius.bottom_left,
            unit,
        )
    }
}

/// Space-joined transform functions, skipping those at identity. Empty when
/// the whole transform is identity. Emission order is fixed:
/// translate, scale, rotate, skewX, skewY.
pub fn transform_value(transform: &Transform) -> String {
    let mut parts: Vec<String> = Vec::new();

    if transform.translate_x != 0.0 || transform.translate_y != 0.0 {
        parts.push(format!(
            "translate({}px, {}px)",
            transform.translate_x, transform.translate_y
        ));
    }
    if transform.scale_x != 1.0 || transform.scale_y != 1.0 {
        parts.push(format!("scale({}, {})", transform.scale_x, transform.scale_y));
    }
    if transform.rotate != 0.0 {
        parts.push(format!("rotate({}deg)", transform.rotate));
    }
    if transform.skew_x != 0.0 {
        parts.push(format!("skewX({}deg)", transform.skew_x));
    }
    if transform.skew_y != 0.0 {
        parts.push(format!("skewY({}deg)", transform.skew_y));
    }

    parts.join(" ")
}

/// Gradient function with stops sorted ascending by position. The sort works
/// on a local copy; the stored stop order stays as edited.
pub fn gradient_value(gradient: &Gradient) -> String {
    let mut sorted = gradient.stops.clone();
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
    let stops = sorted
        .iter()
        .map(|stop| format!("{} {}%", stop.color, stop.position))
        .collect::<Vec<_>>()
        .join(", ");

    match gradient.kind {
        GradientKind::Linear => format!("linear-gradient({}deg, {})", gradient.angle, stops),
        GradientKind::Radial => format!("radial-gradient(circle, {})", stops),
        GradientKind::Conic => format!("conic-gradient(from {}deg, {})", gradient.angle, stops),
    }
}

/// Space-joined filter functions, skipping those at their neutral value.
/// Empty when everything is neutral. Emission order is fixed: blur,
/// brightness, contrast, grayscale, hue-rotate, invert, opacity, saturate,
/// sepia.
pub fn filter_value(filter: &Filter) -> String {
    let mut parts: Vec<String> = Vec::new();

    if filter.blur > 0.0 {
        parts.push(format!("blur({}px)", filter.blur));
    }
    if filter.brightness != 100.0 {
        parts.push(format!("brightness({}%)", filter.brightness));
    }
    if filter.contrast != 100.0 {
        parts.push(format!("contrast({}%)", filter.contrast));
    }
    if filter.grayscale > 0.0 {
        parts.push(format!("grayscale({}%)", filter.grayscale));
    }
    if filter.hue_rotate != 0.0 {
        parts.push(format!("hue-rotate({}deg)", filter.hue_rotate));
    }
    if filter.invert > 0.0 {
        parts.push(format!("invert({}%)", filter.invert));
    }
    if filter.opacity != 100.0 {
        parts.push(format!("opacity({}%)", filter.opacity));
    }
    if filter.saturate != 100.0 {
        parts.push(format!("saturate({}%)", filter.saturate));
    }
    if filter.sepia > 0.0 {
        parts.push(format!("sepia({}%)", filter.sepia));
    }

    parts.join(" ")
}

/// Declaration lines for `state`, base properties first, then the property
/// groups. Transform and filter lines are omitted entirely at identity.
fn declarations(state: &ElementState) -> Vec<String> {
    let mut lines = vec![
        format!("width: {}px;", state.width),
        format!("height: {}px;", state.height),
        format!("background-color: {};", state.background_color),
        format!("color: {};", state.color),
        format!("font-family: {};", state.font_family),
        format!("font-size: {}px;", state.font_size),
        format!("font-weight: {};", state.font_weight),
    ];

    lines.push(format!("box-shadow: {};", box_shadow_value(&state.box_shadow)));
    lines.push(format!(
        "border-radius: {};",
        border_radius_value(&state.border_radius)
    ));

    let transform = transform_value(&state.transform);
    if !transform.is_empty() {
        lines.push(format!("transform: {};", transform));
    }

    lines.push(format!("background: {};", gradient_value(&state.gradient)));

    let filter = filter_value(&state.filter);
    if !filter.is_empty() {
        lines.push(format!("filter: {};", filter));
    }

    lines
}

/// Generated code for the element in the requested format.
///
/// The Tailwind output is a fixed placeholder, not a real conversion; a
/// faithful class mapping would need a dedicated translation table.
pub fn generate(state: &ElementState, format: ExportFormat) -> String {
    match format {
        ExportFormat::Css => {
            format!(".element {{\n  {}\n}}", declarations(state).join("\n  "))
        }
        ExportFormat::Scss => {
            format!(
                ".element {{\n  {}\n\n  &:hover {{\n    // Add hover styles here\n  }}\n}}",
                declarations(state).join("\n  ")
            )
        }
        ExportFormat::Tailwind => concat!(
            "<!-- This is a simplified Tailwind conversion -->\n",
            "<div class=\"w-[300px] h-[200px] bg-white text-gray-800 rounded shadow-lg transform ...\"></div>",
        )
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{ColorStop, RadiusUnit};

    #[test]
    fn test_export_format_round_trip() {
        for format in ExportFormat::all() {
            assert_eq!(ExportFormat::from_str(format.as_str()), format);
        }
        assert_eq!(ExportFormat::from_str("bogus"), ExportFormat::Css);
    }

    #[test]
    fn test_default_css_contains_base_declarations() {
        let css = generate(&ElementState::default(), ExportFormat::Css);
        assert!(css.contains("width: 300px;"));
        assert!(css.contains("height: 200px;"));
        assert!(css.contains("background-color: #ffffff;"));
        assert!(css.contains("font-size: 18px;"));
        assert!(css.starts_with(".element {"));
    }

    #[test]
    fn test_box_shadow_value_inset() {
        let shadow = BoxShadow {
            inset: true,
            ..BoxShadow::default()
        };
        assert_eq!(box_shadow_value(&shadow), "inset 5px 5px 10px 0px rgba(0, 0, 0, 0.2)");
    }

    #[test]
    fn test_border_radius_single_value_when_all() {
        assert_eq!(border_radius_value(&BorderRadius::default()), "8px");
    }

    #[test]
    fn test_border_radius_four_values_in_corner_order() {
        let radius = BorderRadius {
            top_left: 1.0,
            top_right: 2.0,
            bottom_right: 3.0,
            bottom_left: 4.0,
            unit: RadiusUnit::Percent,
            all: false,
        };
        assert_eq!(border_radius_value(&radius), "1% 2% 3% 4%");
    }

    #[test]
    fn test_identity_transform_emits_no_declaration() {
        let css = generate(&ElementState::default(), ExportFormat::Css);
        assert!(!css.contains("transform:"));
    }

    #[test]
    fn test_rotate_only_transform() {
        let mut state = ElementState::default();
        state.transform.rotate = 45.0;
        let css = generate(&state, ExportFormat::Css);
        assert!(css.contains("transform: rotate(45deg);"));
    }

    #[test]
    fn test_transform_function_order_is_fixed() {
        let transform = Transform {
            translate_x: 10.0,
            scale_x: 2.0,
            rotate: 30.0,
            skew_y: 5.0,
            ..Transform::default()
        };
        assert_eq!(
            transform_value(&transform),
            "translate(10px, 0px) scale(2, 1) rotate(30deg) skewY(5deg)"
        );
    }

    #[test]
    fn test_gradient_stops_sorted_for_output_only() {
        let gradient = Gradient {
            kind: GradientKind::Linear,
            angle: 90.0,
            stops: vec![
                ColorStop {
                    color: "#222222".to_string(),
                    position: 80.0,
                },
                ColorStop {
                    color: "#111111".to_string(),
                    position: 20.0,
                },
            ],
        };
        assert_eq!(
            gradient_value(&gradient),
            "linear-gradient(90deg, #111111 20%, #222222 80%)"
        );
        // The model keeps the edit order.
        assert_eq!(gradient.stops[0].position, 80.0);
    }

    #[test]
    fn test_radial_and_conic_shapes() {
        let mut gradient = Gradient::default();
        gradient.kind = GradientKind::Radial;
        assert!(gradient_value(&gradient).starts_with("radial-gradient(circle, "));

        gradient.kind = GradientKind::Conic;
        gradient.angle = 45.0;
        assert!(gradient_value(&gradient).starts_with("conic-gradient(from 45deg, "));
    }

    #[test]
    fn test_neutral_filter_emits_no_declaration() {
        let css = generate(&ElementState::default(), ExportFormat::Css);
        assert!(!css.contains("filter:"));
    }

    #[test]
    fn test_filter_skips_neutral_functions() {
        let filter = Filter {
            blur: 2.0,
            brightness: 120.0,
            hue_rotate: 90.0,
            ..Filter::default()
        };
        assert_eq!(
            filter_value(&filter),
            "blur(2px) brightness(120%) hue-rotate(90deg)"
        );
    }

    #[test]
    fn test_scss_appends_hover_rule() {
        let scss = generate(&ElementState::default(), ExportFormat::Scss);
        assert!(scss.starts_with(".element {"));
        assert!(scss.ends_with("&:hover {\n    // Add hover styles here\n  }\n}"));
    }

    #[test]
    fn test_tailwind_is_fixed_placeholder() {
        let a = generate(&ElementState::default(), ExportFormat::Tailwind);
        let mut state = ElementState::default();
        state.width = 999.0;
        let b = generate(&state, ExportFormat::Tailwind);
        assert_eq!(a, b);
        assert!(a.starts_with("<!-- This is a simplified Tailwind conversion -->"));
    }

    #[test]
    fn test_generated_block_uses_shared_value_functions() {
        let mut state = ElementState::default();
        state.transform.rotate = 10.0;
        state.filter.sepia = 30.0;
        let css = generate(&state, ExportFormat::Css);

        assert!(css.contains(&format!("box-shadow: {};", box_shadow_value(&state.box_shadow))));
        assert!(css.contains(&format!(
            "border-radius: {};",
            border_radius_value(&state.border_radius)
        )));
        assert!(css.contains(&format!("transform: {};", transform_value(&state.transform))));
        assert!(css.contains(&format!("background: {};", gradient_value(&state.gradient))));
        assert!(css.contains(&format!("filter: {};", filter_value(&state.filter))));
    }
}
