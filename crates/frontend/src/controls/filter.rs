use leptos::prelude::*;
use model::FilterUpdate;

use crate::shared::components::ui::Slider;
use crate::state::use_visualizer;

#[component]
pub fn FilterControl() -> impl IntoView {
    let ctx = use_visualizer();
    let filter = move || ctx.state().filter;

    view! {
        <div class="control">
            <Slider
                label="Blur"
                min=0.0
                max=20.0
                value=Signal::derive(move || filter().blur)
                value_label=Signal::derive(move || format!("{}px", filter().blur))
                on_input=Callback::new(move |v| {
                    ctx.update_filter(FilterUpdate { blur: Some(v), ..Default::default() })
                })
            />
            <Slider
                label="Brightness"
                min=0.0
                max=200.0
                value=Signal::derive(move || filter().brightness)
                value_label=Signal::derive(move || format!("{}%", filter().brightness))
                on_input=Callback::new(move |v| {
                    ctx.update_filter(FilterUpdate { brightness: Some(v), ..Default::default() })
                })
            />
            <Slider
                label="Contrast"
                min=0.0
                max=200.0
                value=Signal::derive(move || filter().contrast)
                value_label=Signal::derive(move || format!("{}%", filter().contrast))
                on_input=Callback::new(move |v| {
                    ctx.update_filter(FilterUpdate { contrast: Some(v), ..Default::default() })
                })
            />
            <Slider
                label="Grayscale"
                min=0.0
                max=100.0
                value=Signal::derive(move || filter().grayscale)
                value_label=Signal::derive(move || format!("{}%", filter().grayscale))
                on_input=Callback::new(move |v| {
                    ctx.update_filter(FilterUpdate { grayscale: Some(v), ..Default::default() })
                })
            />
            <Slider
                label="Hue rotate"
                min=0.0
                max=360.0
                value=Signal::derive(move || filter().hue_rotate)
                value_label=Signal::derive(move || format!("{}°", filter().hue_rotate))
                on_input=Callback::new(move |v| {
                    ctx.update_filter(FilterUpdate { hue_rotate: Some(v), ..Default::default() })
                })
            />
            <Slider
                label="Invert"
                min=0.0
                max=100.0
                value=Signal::derive(move || filter().invert)
                value_label=Signal::derive(move || format!("{}%", filter().invert))
                on_input=Callback::new(move |v| {
                    ctx.update_filter(FilterUpdate { invert: Some(v), ..Default::default() })
                })
            />
            <Slider
                label="Opacity"
                min=0.0
                max=100.0
                value=Signal::derive(move || filter().opacity)
                value_label=Signal::derive(move || format!("{}%", filter().opacity))
                on_input=Callback::new(move |v| {
                    ctx.update_filter(FilterUpdate { opacity: Some(v), ..Default::default() })
                })
            />
            <Slider
                label="Saturate"
                min=0.0
                max=200.0
                value=Signal::derive(move || filter().saturate)
                value_label=Signal::derive(move || format!("{}%", filter().saturate))
                on_input=Callback::new(move |v| {
                    ctx.update_filter(FilterUpdate { saturate: Some(v), ..Default::default() })
                })
            />
            <Slider
                label="Sepia"
                min=0.0
                max=100.0
                value=Signal::derive(move || filter().sepia)
                value_label=Signal::derive(move || format!("{}%", filter().sepia))
                on_input=Callback::new(move |v| {
                    ctx.update_filter(FilterUpdate { sepia: Some(v), ..Default::default() })
                })
            />
        </div>
    }
}
