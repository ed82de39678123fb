pub mod button;
pub mod checkbox;
pub mod color_picker;
pub mod input;
pub mod select;
pub mod slider;

pub use button::Button;
pub use checkbox::Checkbox;
pub use color_picker::ColorPicker;
pub use input::Input;
pub use select::Select;
pub use slider::Slider;
