//! Theme management module for the application.
//!
//! Provides a context-based theme system with light and dark modes.
//! Theme preference is persisted in localStorage.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::icons::icon;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for the `data-theme`
    /// attribute and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse theme from string.
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

const THEME_STORAGE_KEY: &str = "visualizerTheme";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Set the `data-theme` attribute on body; the stylesheet keys off it.
fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Load the stored preference and apply it immediately.
    pub fn restore() -> Self {
        let initial = load_theme_from_storage();
        apply_theme(initial);
        Self {
            theme: RwSignal::new(initial),
        }
    }

    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    pub fn toggle_theme(&self) {
        self.set_theme(self.theme.get().toggled());
    }
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Provide it at the app root.")
}

/// Light/dark toggle button.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="header__icon-btn"
            title="Toggle theme"
            on:click=move |_| ctx.toggle_theme()
        >
            {move || match ctx.theme.get() {
                Theme::Light => icon("moon"),
                Theme::Dark => icon("sun"),
            }}
        </button>
    }
}
