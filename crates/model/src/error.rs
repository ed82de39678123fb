//! Errors for refused structural edits.
//!
//! Numeric ranges are a widget concern and never rejected here; only edits
//! that would break a structural invariant of the model are refused.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// Removing a stop would leave the gradient with fewer than two.
    #[error("a gradient needs at least 2 color stops")]
    StopFloor,
    /// Adding a stop would exceed the supported maximum.
    #[error("a gradient holds at most 5 color stops")]
    StopCeiling,
    /// The stop index does not exist.
    #[error("no color stop at index {0}")]
    StopOutOfRange(usize),
}
