use leptos::prelude::*;
use model::ResponsiveMode;

use crate::shared::icons::icon;
use crate::state::use_visualizer;

fn mode_icon(mode: ResponsiveMode) -> &'static str {
    match mode {
        ResponsiveMode::Desktop => "monitor",
        ResponsiveMode::Tablet => "tablet",
        ResponsiveMode::Mobile => "smartphone",
    }
}

/// Segmented preview-viewport switcher.
#[component]
pub fn ResponsiveToggle() -> impl IntoView {
    let ctx = use_visualizer();

    view! {
        <div class="responsive-toggle">
            {ResponsiveMode::all()
                .into_iter()
                .map(|mode| {
                    let is_active = move || ctx.responsive_mode() == mode;
                    view! {
                        <button
                            class="responsive-toggle__btn"
                            class:is-active=is_active
                            title=mode.display_name()
                            on:click=move |_| ctx.set_responsive_mode(mode)
                        >
                            {icon(mode_icon(mode))}
                            <span class="responsive-toggle__label">{mode.display_name()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
