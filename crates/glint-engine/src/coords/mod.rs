//! Geometry shared by the renderers, the GUI and the demos.
//!
//! GUI space is logical pixels with the origin at the top-left and +Y down.
//! Renderers convert to NDC in their vertex shaders, either through a viewport
//! uniform or through an orthographic matrix built by [`ortho`].

mod ortho;
mod rect;
mod vec2;
mod viewport;

pub use ortho::{ortho, window_ortho, Mat4};
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
