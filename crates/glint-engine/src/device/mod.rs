//! GPU device and surface management.
//!
//! - creates the wgpu instance, adapter, device and queue
//! - configures the window surface and acquires frames
//! - compiles shaders and reports their diagnostics

mod gpu;
mod shader;

pub use gpu::{choose_surface_format, Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
pub use shader::{create_wgsl_module, format_diagnostic, log_shader_diagnostics, DiagnosticLevel};
