pub mod code_panel;
pub mod preview_panel;
pub mod responsive_toggle;

pub use code_panel::CodePanel;
pub use preview_panel::PreviewPanel;
pub use responsive_toggle::ResponsiveToggle;
