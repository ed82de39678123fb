use leptos::prelude::*;
use model::{ColorStop, Gradient, GradientKind, GradientUpdate};

use crate::shared::components::ui::{Button, ColorPicker, Slider};
use crate::shared::icons::icon;
use crate::state::use_visualizer;

#[component]
pub fn GradientControl() -> impl IntoView {
    let ctx = use_visualizer();
    let gradient = move || ctx.state().gradient;

    // Stop edits go through the context as a full replacement list.
    let set_stop = move |index: usize, edit: &dyn Fn(&mut ColorStop)| {
        let mut stops = gradient().stops;
        if let Some(stop) = stops.get_mut(index) {
            edit(stop);
            ctx.update_gradient(GradientUpdate {
                stops: Some(stops),
                ..Default::default()
            });
        }
    };

    view! {
        <div class="control">
            <div class="control__segmented">
                {GradientKind::all()
                    .into_iter()
                    .map(|kind| {
                        let is_active = move || gradient().kind == kind;
                        view! {
                            <button
                                class="control__segment-btn"
                                class:is-active=is_active
                                on:click=move |_| {
                                    ctx.update_gradient(GradientUpdate {
                                        kind: Some(kind),
                                        ..Default::default()
                                    })
                                }
                            >
                                {kind.as_str()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            // Radial gradients ignore the angle.
            <Show when=move || gradient().kind != GradientKind::Radial>
                <Slider
                    label="Angle"
                    min=0.0
                    max=360.0
                    value=Signal::derive(move || gradient().angle)
                    value_label=Signal::derive(move || format!("{}°", gradient().angle))
                    on_input=Callback::new(move |v| {
                        ctx.update_gradient(GradientUpdate {
                            angle: Some(v),
                            ..Default::default()
                        })
                    })
                />
            </Show>

            <div class="control__row">
                <span class="field__label">"Color stops"</span>
                <Button
                    variant="ghost"
                    class="control__icon-btn"
                    title="Add color stop"
                    disabled=Signal::derive(move || {
                        gradient().stops.len() >= Gradient::MAX_STOPS
                    })
                    on_click=Callback::new(move |_| ctx.add_gradient_stop())
                >
                    {icon("plus")}
                </Button>
            </div>

            <For
                each=move || 0..gradient().stops.len()
                key=|index| *index
                children=move |index| {
                    // A removal can re-render a row whose index is already
                    // gone; fall back to a neutral stop for that frame.
                    let stop = move || {
                        gradient().stops.get(index).cloned().unwrap_or(ColorStop {
                            color: "#ffffff".to_string(),
                            position: 0.0,
                        })
                    };
                    view! {
                        <div class="control__stop-row">
                            <ColorPicker
                                value=Signal::derive(move || stop().color)
                                on_input=Callback::new(move |color: String| {
                                    set_stop(index, &|s| s.color = color.clone());
                                })
                            />
                            <Slider
                                label=""
                                min=0.0
                                max=100.0
                                value=Signal::derive(move || stop().position)
                                value_label=Signal::derive(move || format!("{}%", stop().position))
                                on_input=Callback::new(move |position: f64| {
                                    set_stop(index, &|s| s.position = position);
                                })
                            />
                            <Show when=move || { gradient().stops.len() > Gradient::MIN_STOPS }>
                                <Button
                                    variant="ghost"
                                    class="control__icon-btn"
                                    title="Remove color stop"
                                    on_click=Callback::new(move |_| {
                                        ctx.remove_gradient_stop(index)
                                    })
                                >
                                    {icon("x")}
                                </Button>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}
