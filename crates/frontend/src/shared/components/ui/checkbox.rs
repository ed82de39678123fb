use leptos::prelude::*;

/// Checkbox with a trailing label
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <label class="field field--checkbox">
            <input
                type="checkbox"
                class="field__checkbox"
                checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class="field__label">{label}</span>
        </label>
    }
}
