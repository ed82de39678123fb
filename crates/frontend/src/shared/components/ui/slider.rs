use leptos::prelude::*;

/// Range slider with a label row showing the current value.
///
/// The widget owns its min/max/step constraints; the state layer accepts
/// whatever number the slider reports.
#[component]
pub fn Slider(
    /// Label text
    #[prop(into)]
    label: String,
    /// Lower bound
    min: f64,
    /// Upper bound
    max: f64,
    /// Step, 1 when omitted
    #[prop(optional)]
    step: Option<f64>,
    /// Current value
    #[prop(into)]
    value: Signal<f64>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<f64>>,
    /// Value label override (e.g. "45°"); plain number when omitted
    #[prop(optional, into)]
    value_label: MaybeProp<String>,
) -> impl IntoView {
    let shown_value = move || {
        value_label
            .get()
            .unwrap_or_else(|| format!("{}", value.get()))
    };

    view! {
        <div class="field field--slider">
            <div class="field__row">
                <label class="field__label">{label}</label>
                <span class="field__value">{shown_value}</span>
            </div>
            <input
                type="range"
                class="field__range"
                min=min
                max=max
                step=step.unwrap_or(1.0)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        if let Ok(parsed) = event_target_value(&ev).parse::<f64>() {
                            handler.run(parsed);
                        }
                    }
                }
            />
        </div>
    }
}
