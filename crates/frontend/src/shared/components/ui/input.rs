use leptos::prelude::*;

/// Text input with label support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            {move || label.get().map(|l| view! {
                <label class="field__label">{l}</label>
            })}
            <input
                type="text"
                class="field__input"
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
