//! Linear undo/redo history over element states.
//!
//! The history owns the only mutable copy of the current state. New states
//! enter exclusively through `push`, which discards any redoable tail first:
//! a mutation issued after an undo permanently drops the previously-redoable
//! future (standard editor undo semantics, not a version-control DAG).

use chrono::{DateTime, Utc};

use crate::element::ElementState;

/// One point in history: the full element state and when it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub state: ElementState,
    pub timestamp: DateTime<Utc>,
}

/// Snapshot log plus an index pointing at the current entry.
/// `0 <= index < entries.len()` holds from construction on.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl History {
    pub fn new(initial: ElementState) -> Self {
        Self {
            entries: vec![HistoryEntry {
                state: initial,
                timestamp: Utc::now(),
            }],
            index: 0,
        }
    }

    /// The state at the current index.
    pub fn current(&self) -> &ElementState {
        &self.entries[self.index].state
    }

    /// Drop the redoable tail, append `state` and make it current.
    pub fn push(&mut self, state: ElementState) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            state,
            timestamp: Utc::now(),
        });
        self.index = self.entries.len() - 1;
    }

    /// Step back one entry. Returns false (and changes nothing) at the
    /// oldest entry.
    pub fn undo(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one entry. Returns false (and changes nothing) at the
    /// newest entry.
    pub fn redo(&mut self) -> bool {
        if self.index < self.entries.len() - 1 {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index < self.entries.len() - 1
    }

    /// Number of recorded entries; never zero after construction.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_width(width: f64) -> ElementState {
        ElementState {
            width,
            ..ElementState::default()
        }
    }

    #[test]
    fn test_push_then_undo_returns_previous_state() {
        let s1 = state_with_width(100.0);
        let s2 = state_with_width(200.0);
        let mut history = History::new(ElementState::default());
        history.push(s1.clone());
        history.push(s2.clone());

        assert_eq!(history.current(), &s2);
        assert!(history.undo());
        assert_eq!(history.current(), &s1);
    }

    #[test]
    fn test_push_after_undo_discards_forward_history() {
        let s1 = state_with_width(100.0);
        let s2 = state_with_width(200.0);
        let s3 = state_with_width(300.0);
        let mut history = History::new(ElementState::default());
        history.push(s1);
        history.push(s2);
        history.undo();
        history.push(s3.clone());

        // The undone branch is gone for good.
        assert!(!history.redo());
        assert_eq!(history.current(), &s3);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut history = History::new(ElementState::default());
        assert!(!history.undo());
        assert_eq!(history.index(), 0);
        assert_eq!(history.current(), &ElementState::default());
    }

    #[test]
    fn test_redo_at_end_is_noop() {
        let mut history = History::new(ElementState::default());
        history.push(state_with_width(100.0));
        assert!(!history.redo());
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn test_can_undo_redo_flags() {
        let mut history = History::new(ElementState::default());
        assert!(!history.can_undo());
        assert!(!history.can_redo());

        history.push(state_with_width(100.0));
        assert!(history.can_undo());
        assert!(!history.can_redo());

        history.undo();
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }
}
