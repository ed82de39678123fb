use leptos::prelude::*;
use model::ElementUpdate;

use crate::shared::components::ui::{ColorPicker, Input, Select, Slider};
use crate::state::use_visualizer;

fn font_family_options() -> Vec<(String, String)> {
    ["sans-serif", "serif", "monospace", "cursive"]
        .into_iter()
        .map(|f| (f.to_string(), f.to_string()))
        .collect()
}

fn font_weight_options() -> Vec<(String, String)> {
    ["300", "400", "500", "600", "700", "800"]
        .into_iter()
        .map(|w| (w.to_string(), w.to_string()))
        .collect()
}

/// Top-level element fields: dimensions, colors, text and font.
#[component]
pub fn ElementControl() -> impl IntoView {
    let ctx = use_visualizer();
    let state = move || ctx.state();

    view! {
        <div class="control">
            <Slider
                label="Width"
                min=50.0
                max=800.0
                value=Signal::derive(move || state().width)
                value_label=Signal::derive(move || format!("{}px", state().width))
                on_input=Callback::new(move |v| {
                    ctx.update_element(ElementUpdate { width: Some(v), ..Default::default() })
                })
            />
            <Slider
                label="Height"
                min=50.0
                max=600.0
                value=Signal::derive(move || state().height)
                value_label=Signal::derive(move || format!("{}px", state().height))
                on_input=Callback::new(move |v| {
                    ctx.update_element(ElementUpdate { height: Some(v), ..Default::default() })
                })
            />
            <ColorPicker
                label="Background"
                value=Signal::derive(move || state().background_color)
                on_input=Callback::new(move |c| {
                    ctx.update_element(ElementUpdate {
                        background_color: Some(c),
                        ..Default::default()
                    })
                })
            />
            <ColorPicker
                label="Text color"
                value=Signal::derive(move || state().color)
                on_input=Callback::new(move |c| {
                    ctx.update_element(ElementUpdate { color: Some(c), ..Default::default() })
                })
            />
            <Input
                label="Text"
                value=Signal::derive(move || state().text)
                on_input=Callback::new(move |t| {
                    ctx.update_element(ElementUpdate { text: Some(t), ..Default::default() })
                })
            />
            <Select
                label="Font family"
                value=Signal::derive(move || state().font_family)
                options=Signal::derive(font_family_options)
                on_change=Callback::new(move |f| {
                    ctx.update_element(ElementUpdate { font_family: Some(f), ..Default::default() })
                })
            />
            <Slider
                label="Font size"
                min=8.0
                max=72.0
                value=Signal::derive(move || state().font_size)
                value_label=Signal::derive(move || format!("{}px", state().font_size))
                on_input=Callback::new(move |v| {
                    ctx.update_element(ElementUpdate { font_size: Some(v), ..Default::default() })
                })
            />
            <Select
                label="Font weight"
                value=Signal::derive(move || state().font_weight)
                options=Signal::derive(font_weight_options)
                on_change=Callback::new(move |w| {
                    ctx.update_element(ElementUpdate { font_weight: Some(w), ..Default::default() })
                })
            />
        </div>
    }
}
