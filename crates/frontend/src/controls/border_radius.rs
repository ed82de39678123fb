use leptos::prelude::*;
use model::{BorderRadiusUpdate, RadiusUnit};

use crate::shared::components::ui::{Checkbox, Select, Slider};
use crate::state::use_visualizer;

fn unit_options() -> Vec<(String, String)> {
    RadiusUnit::all()
        .into_iter()
        .map(|u| (u.as_str().to_string(), u.as_str().to_string()))
        .collect()
}

#[component]
pub fn BorderRadiusControl() -> impl IntoView {
    let ctx = use_visualizer();
    let radius = move || ctx.state().border_radius;
    let unit_label = move |v: f64| format!("{}{}", v, radius().unit.as_str());

    let corner_slider = move |label: &'static str,
                             get: fn(&model::BorderRadius) -> f64,
                             set: fn(f64) -> BorderRadiusUpdate| {
        view! {
            <Slider
                label=label
                min=0.0
                max=100.0
                value=Signal::derive(move || get(&radius()))
                value_label=Signal::derive(move || unit_label(get(&radius())))
                on_input=Callback::new(move |v| ctx.update_border_radius(set(v)))
            />
        }
    };

    view! {
        <div class="control">
            <Checkbox
                label="All corners"
                checked=Signal::derive(move || radius().all)
                on_change=Callback::new(move |checked| {
                    ctx.update_border_radius(BorderRadiusUpdate {
                        all: Some(checked),
                        ..Default::default()
                    })
                })
            />
            <Select
                label="Unit"
                value=Signal::derive(move || radius().unit.as_str().to_string())
                options=Signal::derive(unit_options)
                on_change=Callback::new(move |u: String| {
                    ctx.update_border_radius(BorderRadiusUpdate {
                        unit: Some(RadiusUnit::from_str(&u)),
                        ..Default::default()
                    })
                })
            />
            <Show
                when=move || radius().all
                fallback=move || {
                    view! {
                        {corner_slider("Top left", |r| r.top_left, |v| BorderRadiusUpdate {
                            top_left: Some(v),
                            ..Default::default()
                        })}
                        {corner_slider("Top right", |r| r.top_right, |v| BorderRadiusUpdate {
                            top_right: Some(v),
                            ..Default::default()
                        })}
                        {corner_slider("Bottom right", |r| r.bottom_right, |v| BorderRadiusUpdate {
                            bottom_right: Some(v),
                            ..Default::default()
                        })}
                        {corner_slider("Bottom left", |r| r.bottom_left, |v| BorderRadiusUpdate {
                            bottom_left: Some(v),
                            ..Default::default()
                        })}
                    }
                }
            >
                // With the flag set only the shared value is edited; it is
                // stored in top_left and emitted as the single shorthand.
                {corner_slider("Radius", |r| r.top_left, |v| BorderRadiusUpdate {
                    top_left: Some(v),
                    ..Default::default()
                })}
            </Show>
        </div>
    }
}
