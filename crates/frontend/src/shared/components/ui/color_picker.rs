use leptos::prelude::*;

/// Color picker: a native swatch input paired with a free-form text input.
///
/// The text input accepts any CSS color string (hex, rgba, named); the
/// swatch only reflects hex values, which the browser clamps on its own.
#[component]
pub fn ColorPicker(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current color string
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
) -> impl IntoView {
    let emit = move |color: String| {
        if let Some(handler) = on_input {
            handler.run(color);
        }
    };

    view! {
        <div class="field field--color">
            {move || label.get().map(|l| view! {
                <label class="field__label">{l}</label>
            })}
            <div class="field__row">
                <input
                    type="color"
                    class="field__swatch"
                    prop:value=move || value.get()
                    on:input=move |ev| emit(event_target_value(&ev))
                />
                <input
                    type="text"
                    class="field__input field__input--color"
                    prop:value=move || value.get()
                    on:input=move |ev| emit(event_target_value(&ev))
                />
            </div>
        </div>
    }
}
