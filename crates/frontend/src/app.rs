use crate::layout::{Header, Sidebar};
use crate::shared::theme::ThemeContext;
use crate::state::VisualizerContext;
use crate::visualizer::{CodePanel, PreviewPanel};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide theme and visualizer state to the whole app via context.
    // Both restore themselves from localStorage before the first render.
    provide_context(ThemeContext::restore());
    provide_context(VisualizerContext::restore());

    view! {
        <div class="app">
            <Header />
            <div class="app__content">
                <aside class="app__sidebar">
                    <Sidebar />
                </aside>
                <main class="app__main">
                    <PreviewPanel />
                    <CodePanel />
                </main>
            </div>
        </div>
    }
}
