use leptos::prelude::*;

use crate::shared::icons::icon;

/// Collapsible wrapper around one group of property widgets.
#[component]
pub fn PropertySection(
    /// Section title
    #[prop(into)]
    title: String,
    /// Icon name passed to the icon lookup
    icon_name: &'static str,
    /// Start expanded
    #[prop(optional)]
    default_open: bool,
    children: Children,
) -> impl IntoView {
    let (open, set_open) = signal(default_open);

    view! {
        <section class="control-section">
            <button
                class="control-section__header"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="control-section__title">{icon(icon_name)} {title}</span>
                <span class="control-section__chevron" class:is-open=move || open.get()>
                    {icon("chevron-down")}
                </span>
            </button>
            <div
                class="control-section__body"
                style:display=move || if open.get() { "block" } else { "none" }
            >
                {children()}
            </div>
        </section>
    }
}
