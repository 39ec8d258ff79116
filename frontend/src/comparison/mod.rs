pub mod loader;
pub mod position;
pub mod slider;
pub mod tracker;

pub use slider::BeforeAfterSlider;
