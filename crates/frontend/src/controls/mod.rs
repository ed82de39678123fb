pub mod border_radius;
pub mod box_shadow;
pub mod element;
pub mod filter;
pub mod gradient;
pub mod section;
pub mod transform;

pub use border_radius::BorderRadiusControl;
pub use box_shadow::BoxShadowControl;
pub use element::ElementControl;
pub use filter::FilterControl;
pub use gradient::GradientControl;
pub use section::PropertySection;
pub use transform::TransformControl;
