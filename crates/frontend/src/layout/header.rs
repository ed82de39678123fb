use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::state::use_visualizer;
use crate::visualizer::ResponsiveToggle;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_visualizer();

    view! {
        <header class="header">
            <div class="header__left">
                <span class="header__title">"CSS Visualizer"</span>
                <div class="header__history">
                    <button
                        class="header__icon-btn"
                        title="Undo"
                        disabled=move || !ctx.can_undo()
                        on:click=move |_| ctx.undo()
                    >
                        {icon("undo")}
                    </button>
                    <button
                        class="header__icon-btn"
                        title="Redo"
                        disabled=move || !ctx.can_redo()
                        on:click=move |_| ctx.redo()
                    >
                        {icon("redo")}
                    </button>
                    <Button
                        variant="secondary"
                        class="header__reset-btn"
                        title="Reset to defaults"
                        on_click=Callback::new(move |_| ctx.reset())
                    >
                        "Reset"
                    </Button>
                </div>
            </div>
            <div class="header__actions">
                <ResponsiveToggle />
                <ThemeToggle />
            </div>
        </header>
    }
}
