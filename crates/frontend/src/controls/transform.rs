use leptos::prelude::*;
use model::TransformUpdate;

use crate::shared::components::ui::Slider;
use crate::state::use_visualizer;

#[component]
pub fn TransformControl() -> impl IntoView {
    let ctx = use_visualizer();
    let transform = move || ctx.state().transform;

    view! {
        <div class="control">
            <Slider
                label="Translate X"
                min=-100.0
                max=100.0
                value=Signal::derive(move || transform().translate_x)
                value_label=Signal::derive(move || format!("{}px", transform().translate_x))
                on_input=Callback::new(move |v| {
                    ctx.update_transform(TransformUpdate {
                        translate_x: Some(v),
                        ..Default::default()
                    })
                })
            />
            <Slider
                label="Translate Y"
                min=-100.0
                max=100.0
                value=Signal::derive(move || transform().translate_y)
                value_label=Signal::derive(move || format!("{}px", transform().translate_y))
                on_input=Callback::new(move |v| {
                    ctx.update_transform(TransformUpdate {
                        translate_y: Some(v),
                        ..Default::default()
                    })
                })
            />
            <Slider
                label="Scale X"
                min=0.1
                max=3.0
                step=0.1
                value=Signal::derive(move || transform().scale_x)
                on_input=Callback::new(move |v| {
                    ctx.update_transform(TransformUpdate {
                        scale_x: Some(v),
                        ..Default::default()
                    })
                })
            />
            <Slider
                label="Scale Y"
                min=0.1
                max=3.0
                step=0.1
                value=Signal::derive(move || transform().scale_y)
                on_input=Callback::new(move |v| {
                    ctx.update_transform(TransformUpdate {
                        scale_y: Some(v),
                        ..Default::default()
                    })
                })
            />
            <Slider
                label="Rotate"
                min=-180.0
                max=180.0
                value=Signal::derive(move || transform().rotate)
                value_label=Signal::derive(move || format!("{}°", transform().rotate))
                on_input=Callback::new(move |v| {
                    ctx.update_transform(TransformUpdate {
                        rotate: Some(v),
                        ..Default::default()
                    })
                })
            />
            <Slider
                label="Skew X"
                min=-45.0
                max=45.0
                value=Signal::derive(move || transform().skew_x)
                value_label=Signal::derive(move || format!("{}°", transform().skew_x))
                on_input=Callback::new(move |v| {
                    ctx.update_transform(TransformUpdate {
                        skew_x: Some(v),
                        ..Default::default()
                    })
                })
            />
            <Slider
                label="Skew Y"
                min=-45.0
                max=45.0
                value=Signal::derive(move || transform().skew_y)
                value_label=Signal::derive(move || format!("{}°", transform().skew_y))
                on_input=Callback::new(move |v| {
                    ctx.update_transform(TransformUpdate {
                        skew_y: Some(v),
                        ..Default::default()
                    })
                })
            />
        </div>
    }
}
