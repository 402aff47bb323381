//! GPU types and helpers shared by the shape renderers.

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Viewport};

// ── blend ─────────────────────────────────────────────────────────────────

/// Blend for premultiplied colors (GUI).
pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING
}

/// Blend for straight-alpha colors (`SrcAlpha, OneMinusSrcAlpha`).
pub(super) fn straight_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState::ALPHA_BLENDING
}

pub(super) fn triangle_list() -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        polygon_mode: wgpu::PolygonMode::Fill,
        unclipped_depth: false,
        conservative: false,
    }
}

// ── uniforms ──────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2],
}

impl ViewportUniform {
    pub(super) fn new(viewport: Viewport) -> Self {
        Self {
            viewport: viewport.clamped(),
            _pad: [0.0; 2],
        }
    }
}

/// Layout entry for a uniform buffer of type `T` at `binding`.
pub(super) fn uniform_entry<T>(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: NonZeroU64::new(std::mem::size_of::<T>() as u64),
        },
        count: None,
    }
}

// ── unit quad for instanced shapes ────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Grows an instance buffer to hold at least `required` elements of `T`.
pub(super) fn ensure_instance_buffer<T>(
    device: &wgpu::Device,
    label: &str,
    buffer: &mut Option<wgpu::Buffer>,
    capacity: &mut usize,
    required: usize,
) {
    if required <= *capacity && buffer.is_some() {
        return;
    }
    let new_cap = required.next_power_of_two().max(64);
    *buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (new_cap * std::mem::size_of::<T>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    }));
    *capacity = new_cap;
}

// ── scissor ───────────────────────────────────────────────────────────────

/// Converts a logical clip rect to a physical scissor `(x, y, w, h)`.
///
/// `None` clip covers the whole surface. Returns `None` when the result has
/// no area, in which case the draw is skipped.
pub(crate) fn logical_clip_to_scissor(
    clip: Option<Rect>,
    scale: f32,
    surface: (u32, u32),
) -> Option<(u32, u32, u32, u32)> {
    let (sw, sh) = surface;

    let (x, y, w, h) = match clip {
        None => (0, 0, sw, sh),
        Some(r) => {
            let r = r.normalized();
            let to_px = |v: f32, max: u32| ((v * scale).round().max(0.0) as u32).min(max);
            let x0 = to_px(r.origin.x, sw);
            let y0 = to_px(r.origin.y, sh);
            let x1 = to_px(r.origin.x + r.size.x, sw);
            let y1 = to_px(r.origin.y + r.size.y, sh);
            (x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
        }
    };

    (w > 0 && h > 0).then_some((x, y, w, h))
}

/// Parses and validates WGSL offline with naga, panicking with the
/// compiler's report on failure.
#[cfg(test)]
pub(super) fn validate_wgsl(label: &str, source: &str) -> wgpu::naga::Module {
    use wgpu::naga::valid::{Capabilities, ValidationFlags, Validator};

    let module = wgpu::naga::front::wgsl::parse_str(source)
        .unwrap_or_else(|e| panic!("{label}: {}", e.emit_to_string_with_path(source, label)));
    Validator::new(ValidationFlags::all(), Capabilities::default())
        .validate(&module)
        .unwrap_or_else(|e| panic!("{label}: {}", e.emit_to_string_with_path(source, label)));
    module
}
