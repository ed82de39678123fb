//! Mutation API over the history.
//!
//! The editor is the single owner of the history; every operation clones the
//! current state, merges the change and pushes the result. Consumers read
//! `state()` and never mutate it in place.

use crate::element::ElementState;
use crate::error::EditError;
use crate::history::History;
use crate::properties::{ColorStop, Gradient};
use crate::update::{
    BorderRadiusUpdate, BoxShadowUpdate, ElementUpdate, FilterUpdate, GradientUpdate,
    TransformUpdate,
};

#[derive(Debug, Clone)]
pub struct Editor {
    history: History,
}

impl Editor {
    /// Editor seeded with the default element.
    pub fn new() -> Self {
        Self::with_state(ElementState::default())
    }

    /// Editor seeded with a restored state (e.g. from persistence).
    pub fn with_state(state: ElementState) -> Self {
        Self {
            history: History::new(state),
        }
    }

    pub fn state(&self) -> &ElementState {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn update_element(&mut self, update: ElementUpdate) {
        let next = update.apply(self.state());
        self.history.push(next);
    }

    pub fn update_box_shadow(&mut self, update: BoxShadowUpdate) {
        let mut next = self.state().clone();
        next.box_shadow = update.apply(&next.box_shadow);
        self.history.push(next);
    }

    pub fn update_border_radius(&mut self, update: BorderRadiusUpdate) {
        let mut next = self.state().clone();
        next.border_radius = update.apply(&next.border_radius);
        self.history.push(next);
    }

    pub fn update_transform(&mut self, update: TransformUpdate) {
        let mut next = self.state().clone();
        next.transform = update.apply(&next.transform);
        self.history.push(next);
    }

    pub fn update_gradient(&mut self, update: GradientUpdate) {
        let mut next = self.state().clone();
        next.gradient = update.apply(&next.gradient);
        self.history.push(next);
    }

    pub fn update_filter(&mut self, update: FilterUpdate) {
        let mut next = self.state().clone();
        next.filter = update.apply(&next.filter);
        self.history.push(next);
    }

    /// Append a white stop positioned at the rounded mean of the existing
    /// stop positions. Refused once the gradient holds `MAX_STOPS`.
    pub fn add_gradient_stop(&mut self) -> Result<(), EditError> {
        let stops = &self.state().gradient.stops;
        if stops.len() >= Gradient::MAX_STOPS {
            return Err(EditError::StopCeiling);
        }
        // The two-stop floor makes the empty branch unreachable.
        let position = if stops.is_empty() {
            0.0
        } else {
            let sum: f64 = stops.iter().map(|stop| stop.position).sum();
            (sum / stops.len() as f64).round()
        };

        let mut next = self.state().clone();
        next.gradient.stops.push(ColorStop {
            color: "#ffffff".to_string(),
            position,
        });
        self.history.push(next);
        Ok(())
    }

    /// Remove the stop at `index`. Refused at the two-stop floor and for
    /// indices past the end; later stops shift down by one.
    pub fn remove_gradient_stop(&mut self, index: usize) -> Result<(), EditError> {
        let stops = &self.state().gradient.stops;
        if stops.len() <= Gradient::MIN_STOPS {
            return Err(EditError::StopFloor);
        }
        if index >= stops.len() {
            return Err(EditError::StopOutOfRange(index));
        }

        let mut next = self.state().clone();
        next.gradient.stops.remove(index);
        self.history.push(next);
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Push the defaults as a new entry. Reset is an undoable action, not a
    /// history wipe.
    pub fn reset(&mut self) {
        self.history.push(ElementState::default());
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::GradientKind;

    #[test]
    fn test_update_merges_and_records_history() {
        let mut editor = Editor::new();
        editor.update_box_shadow(BoxShadowUpdate {
            inset: Some(true),
            ..Default::default()
        });

        assert!(editor.state().box_shadow.inset);
        assert_eq!(editor.state().box_shadow.blur_radius, 10.0);
        assert!(editor.can_undo());

        editor.undo();
        assert!(!editor.state().box_shadow.inset);
    }

    #[test]
    fn test_sibling_properties_unchanged_by_update() {
        let mut editor = Editor::new();
        let before = editor.state().clone();
        editor.update_filter(FilterUpdate {
            blur: Some(4.0),
            ..Default::default()
        });

        let after = editor.state();
        assert_eq!(after.filter.blur, 4.0);
        assert_eq!(after.box_shadow, before.box_shadow);
        assert_eq!(after.border_radius, before.border_radius);
        assert_eq!(after.transform, before.transform);
        assert_eq!(after.gradient, before.gradient);
        assert_eq!(after.width, before.width);
    }

    #[test]
    fn test_add_stop_uses_rounded_mean_position() {
        let mut editor = Editor::new();
        // Defaults sit at 0 and 100, so the new stop lands at 50.
        editor.add_gradient_stop().unwrap();

        let stops = &editor.state().gradient.stops;
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[2].color, "#ffffff");
        assert_eq!(stops[2].position, 50.0);
    }

    #[test]
    fn test_add_stop_refused_at_ceiling() {
        let mut editor = Editor::new();
        for _ in 0..3 {
            editor.add_gradient_stop().unwrap();
        }
        assert_eq!(editor.state().gradient.stops.len(), 5);
        assert_eq!(editor.add_gradient_stop(), Err(EditError::StopCeiling));
        assert_eq!(editor.state().gradient.stops.len(), 5);
    }

    #[test]
    fn test_remove_stop_refused_at_floor() {
        let mut editor = Editor::new();
        let before = editor.state().gradient.stops.clone();
        assert_eq!(editor.remove_gradient_stop(0), Err(EditError::StopFloor));
        assert_eq!(editor.state().gradient.stops, before);
        assert_eq!(before.len(), 2);
    }

    #[test]
    fn test_remove_stop_shifts_later_indices() {
        let mut editor = Editor::new();
        editor.add_gradient_stop().unwrap();
        editor.remove_gradient_stop(1).unwrap();

        let stops = &editor.state().gradient.stops;
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].position, 0.0);
        // The former index 2 (the added stop at 50) moved down to index 1.
        assert_eq!(stops[1].position, 50.0);
    }

    #[test]
    fn test_remove_stop_out_of_range() {
        let mut editor = Editor::new();
        editor.add_gradient_stop().unwrap();
        assert_eq!(
            editor.remove_gradient_stop(7),
            Err(EditError::StopOutOfRange(7))
        );
    }

    #[test]
    fn test_reset_is_undoable() {
        let mut editor = Editor::new();
        editor.update_gradient(GradientUpdate {
            kind: Some(GradientKind::Radial),
            ..Default::default()
        });
        editor.reset();
        assert_eq!(editor.state(), &ElementState::default());

        editor.undo();
        assert_eq!(editor.state().gradient.kind, GradientKind::Radial);
    }

    #[test]
    fn test_mutation_after_undo_discards_redo() {
        let mut editor = Editor::new();
        editor.update_element(ElementUpdate {
            width: Some(400.0),
            ..Default::default()
        });
        editor.undo();
        editor.update_element(ElementUpdate {
            width: Some(500.0),
            ..Default::default()
        });

        assert!(!editor.redo());
        assert_eq!(editor.state().width, 500.0);
    }
}
