use leptos::prelude::*;
use model::css;

use crate::state::use_visualizer;
use model::ResponsiveMode;

/// Live preview of the edited element.
///
/// The inline style is computed with the same value functions the code
/// panel exports, so what is previewed is exactly what is generated. The
/// gradient is set as `background` after `background-color`, mirroring the
/// generated declaration order where the gradient wins.
#[component]
pub fn PreviewPanel() -> impl IntoView {
    let ctx = use_visualizer();
    let state = move || ctx.state();

    let stage_width = move || match ctx.responsive_mode() {
        ResponsiveMode::Desktop => "100%",
        ResponsiveMode::Tablet => "768px",
        ResponsiveMode::Mobile => "375px",
    };

    view! {
        <div class="preview-panel">
            <div class="preview-panel__stage" style:max-width=stage_width>
                <div
                    class="preview-panel__element"
                    style:width=move || format!("{}px", state().width)
                    style:height=move || format!("{}px", state().height)
                    style:background-color=move || state().background_color
                    style:color=move || state().color
                    style:font-family=move || state().font_family
                    style:font-size=move || format!("{}px", state().font_size)
                    style:font-weight=move || state().font_weight
                    style:box-shadow=move || css::box_shadow_value(&state().box_shadow)
                    style:border-radius=move || css::border_radius_value(&state().border_radius)
                    style:transform=move || css::transform_value(&state().transform)
                    style:background=move || css::gradient_value(&state().gradient)
                    style:filter=move || css::filter_value(&state().filter)
                >
                    {move || state().text}
                </div>
            </div>
        </div>
    }
}
