//! Glint engine crate.
//!
//! Owns the platform loop, the GPU context and the renderers shared by the
//! tutorial programs. The rounded-rectangle distance function lives in [`sdf`]
//! so it can be exercised without a GPU.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod sdf;
pub mod text;
