//! Data model and core logic for the CSS visualizer.
//!
//! Everything in this crate is plain data and pure functions: the element
//! state, its five CSS property groups, partial updates, the undo/redo
//! history, CSS text generation and the persisted-state document. The crate
//! has no browser dependencies, so all of it is testable natively.

pub mod css;
pub mod editor;
pub mod element;
pub mod error;
pub mod history;
pub mod persist;
pub mod properties;
pub mod update;

pub use css::ExportFormat;
pub use editor::Editor;
pub use element::ElementState;
pub use error::EditError;
pub use history::{History, HistoryEntry};
pub use persist::{PersistedState, ResponsiveMode};
pub use properties::{
    BorderRadius, BoxShadow, ColorStop, Filter, Gradient, GradientKind, RadiusUnit, Transform,
};
pub use update::{
    BorderRadiusUpdate, BoxShadowUpdate, ElementUpdate, FilterUpdate, GradientUpdate,
    TransformUpdate,
};
