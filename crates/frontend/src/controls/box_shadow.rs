use leptos::prelude::*;
use model::BoxShadowUpdate;

use crate::shared::components::ui::{Checkbox, ColorPicker, Slider};
use crate::state::use_visualizer;

#[component]
pub fn BoxShadowControl() -> impl IntoView {
    let ctx = use_visualizer();
    let shadow = move || ctx.state().box_shadow;

    view! {
        <div class="control">
            <Slider
                label="Horizontal offset"
                min=-50.0
                max=50.0
                value=Signal::derive(move || shadow().horizontal_offset)
                value_label=Signal::derive(move || format!("{}px", shadow().horizontal_offset))
                on_input=Callback::new(move |v| {
                    ctx.update_box_shadow(BoxShadowUpdate {
                        horizontal_offset: Some(v),
                        ..Default::default()
                    })
                })
            />
            <Slider
                label="Vertical offset"
                min=-50.0
                max=50.0
                value=Signal::derive(move || shadow().vertical_offset)
                value_label=Signal::derive(move || format!("{}px", shadow().vertical_offset))
                on_input=Callback::new(move |v| {
                    ctx.update_box_shadow(BoxShadowUpdate {
                        vertical_offset: Some(v),
                        ..Default::default()
                    })
                })
            />
            <Slider
                label="Blur radius"
                min=0.0
                max=100.0
                value=Signal::derive(move || shadow().blur_radius)
                value_label=Signal::derive(move || format!("{}px", shadow().blur_radius))
                on_input=Callback::new(move |v| {
                    ctx.update_box_shadow(BoxShadowUpdate {
                        blur_radius: Some(v),
                        ..Default::default()
                    })
                })
            />
            <Slider
                label="Spread radius"
                min=-50.0
                max=50.0
                value=Signal::derive(move || shadow().spread_radius)
                value_label=Signal::derive(move || format!("{}px", shadow().spread_radius))
                on_input=Callback::new(move |v| {
                    ctx.update_box_shadow(BoxShadowUpdate {
                        spread_radius: Some(v),
                        ..Default::default()
                    })
                })
            />
            <ColorPicker
                label="Shadow color"
                value=Signal::derive(move || shadow().color)
                on_input=Callback::new(move |c| {
                    ctx.update_box_shadow(BoxShadowUpdate { color: Some(c), ..Default::default() })
                })
            />
            <Checkbox
                label="Inset"
                checked=Signal::derive(move || shadow().inset)
                on_change=Callback::new(move |checked| {
                    ctx.update_box_shadow(BoxShadowUpdate {
                        inset: Some(checked),
                        ..Default::default()
                    })
                })
            />
        </div>
    }
}
