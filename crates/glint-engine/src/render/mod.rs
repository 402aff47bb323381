//! GPU rendering.
//!
//! Each renderer owns its pipelines and buffers and creates them lazily on
//! first use. GUI geometry is in logical pixels (top-left origin, +Y down) and
//! reaches NDC through a viewport uniform; the demo renderers take clip-space
//! or window-space vertices directly.

mod ctx;
mod draw_list;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use draw_list::DrawListRenderer;
pub use shapes::quad::QuadRenderer;
pub use shapes::rounded_rect::RoundedRectRenderer;
pub use shapes::sdf_rect::{SdfRectRenderer, SdfRectUniform};
pub use shapes::text::TextRenderer;
pub use shapes::vertex::{corner_quad, ColoredVertex, CornerColors, CORNER_QUAD_INDICES};
