//! Visualizer state container.
//!
//! One `VisualizerContext` owns the editor (history + current element) and
//! the two UI settings, all behind reactive signals. Every widget mutates
//! state through the methods here; each mutation is followed by a
//! synchronous save of the full snapshot, so the stored document always
//! matches what is on screen.

use leptos::prelude::*;
use model::{
    BorderRadiusUpdate, BoxShadowUpdate, Editor, ElementState, ElementUpdate, ExportFormat,
    FilterUpdate, GradientUpdate, PersistedState, ResponsiveMode, TransformUpdate,
};

use crate::shared::storage;

#[derive(Clone, Copy)]
pub struct VisualizerContext {
    editor: RwSignal<Editor>,
    responsive_mode: RwSignal<ResponsiveMode>,
    export_format: RwSignal<ExportFormat>,
}

impl VisualizerContext {
    /// Build the context from the stored snapshot, falling back to defaults
    /// when nothing (or something unreadable) is stored.
    pub fn restore() -> Self {
        let persisted = storage::load().unwrap_or_default();
        Self {
            editor: RwSignal::new(Editor::with_state(persisted.element_property)),
            responsive_mode: RwSignal::new(persisted.responsive_mode),
            export_format: RwSignal::new(persisted.export_format),
        }
    }

    /// Reactive clone of the current element state.
    pub fn state(&self) -> ElementState {
        self.editor.with(|editor| editor.state().clone())
    }

    pub fn responsive_mode(&self) -> ResponsiveMode {
        self.responsive_mode.get()
    }

    pub fn export_format(&self) -> ExportFormat {
        self.export_format.get()
    }

    /// Code for the current state in the selected format, reactive in both.
    pub fn generated_code(&self) -> String {
        let format = self.export_format.get();
        self.editor.with(|editor| model::css::generate(editor.state(), format))
    }

    pub fn can_undo(&self) -> bool {
        self.editor.with(|editor| editor.can_undo())
    }

    pub fn can_redo(&self) -> bool {
        self.editor.with(|editor| editor.can_redo())
    }

    fn save(&self) {
        let snapshot = PersistedState {
            element_property: self.editor.with_untracked(|editor| editor.state().clone()),
            responsive_mode: self.responsive_mode.get_untracked(),
            export_format: self.export_format.get_untracked(),
        };
        storage::save(&snapshot);
    }

    pub fn update_element(&self, update: ElementUpdate) {
        self.editor.update(|editor| editor.update_element(update));
        self.save();
    }

    pub fn update_box_shadow(&self, update: BoxShadowUpdate) {
        self.editor.update(|editor| editor.update_box_shadow(update));
        self.save();
    }

    pub fn update_border_radius(&self, update: BorderRadiusUpdate) {
        self.editor
            .update(|editor| editor.update_border_radius(update));
        self.save();
    }

    pub fn update_transform(&self, update: TransformUpdate) {
        self.editor.update(|editor| editor.update_transform(update));
        self.save();
    }

    pub fn update_gradient(&self, update: GradientUpdate) {
        self.editor.update(|editor| editor.update_gradient(update));
        self.save();
    }

    pub fn update_filter(&self, update: FilterUpdate) {
        self.editor.update(|editor| editor.update_filter(update));
        self.save();
    }

    /// The add button is disabled at the stop ceiling, so a refusal here is
    /// only reachable through stale UI; it is logged and dropped.
    pub fn add_gradient_stop(&self) {
        let mut result = Ok(());
        self.editor.update(|editor| result = editor.add_gradient_stop());
        if let Err(err) = result {
            log::warn!("add stop refused: {err}");
            return;
        }
        self.save();
    }

    pub fn remove_gradient_stop(&self, index: usize) {
        let mut result = Ok(());
        self.editor
            .update(|editor| result = editor.remove_gradient_stop(index));
        if let Err(err) = result {
            log::warn!("remove stop refused: {err}");
            return;
        }
        self.save();
    }

    pub fn undo(&self) {
        self.editor.update(|editor| {
            editor.undo();
        });
        self.save();
    }

    pub fn redo(&self) {
        self.editor.update(|editor| {
            editor.redo();
        });
        self.save();
    }

    pub fn reset(&self) {
        self.editor.update(|editor| editor.reset());
        self.save();
    }

    pub fn set_responsive_mode(&self, mode: ResponsiveMode) {
        self.responsive_mode.set(mode);
        self.save();
    }

    pub fn set_export_format(&self, format: ExportFormat) {
        self.export_format.set(format);
        self.save();
    }
}

/// Hook to read the visualizer context.
pub fn use_visualizer() -> VisualizerContext {
    use_context::<VisualizerContext>()
        .expect("VisualizerContext not found. Provide it at the app root.")
}
