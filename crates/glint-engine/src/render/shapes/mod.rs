//! Shape renderers.

mod atlas;
pub(crate) mod common;

pub mod quad;
pub mod rounded_rect;
pub mod sdf_rect;
pub mod text;
pub mod vertex;
