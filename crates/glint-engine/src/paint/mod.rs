//! Color types shared between the GUI, the renderers and the demos.
//!
//! Two representations exist side by side:
//! - [`Color`]: linear premultiplied alpha, consumed by the GUI renderers.
//! - [`Rgba`]: straight alpha, the form users edit and the demo shaders blend.

pub mod color;
pub mod rgba;

pub use color::Color;
pub use rgba::Rgba;
