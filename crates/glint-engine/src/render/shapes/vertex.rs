use bytemuck::{Pod, Zeroable};

use crate::paint::Rgba;

/// Vertex shared by the quad and SDF rectangle pipelines (36 bytes).
///
///  offset  0  pos    [f32; 3]  loc 0
///  offset 12  color  [f32; 4]  loc 1
///  offset 28  uv     [f32; 2]  loc 2
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    pub pos: [f32; 3],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

impl ColoredVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3, // pos
        1 => Float32x4, // color
        2 => Float32x2  // uv
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColoredVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Fill color at each corner of a quad, interpolated across it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CornerColors {
    pub upper_left: Rgba,
    pub upper_right: Rgba,
    pub lower_right: Rgba,
    pub lower_left: Rgba,
}

impl Default for CornerColors {
    /// Red, green, blue and yellow clockwise from the upper left.
    fn default() -> Self {
        Self {
            upper_left: Rgba::RED,
            upper_right: Rgba::GREEN,
            lower_right: Rgba::BLUE,
            lower_left: Rgba::YELLOW,
        }
    }
}

/// Index order for the two triangles of a [`corner_quad`].
pub const CORNER_QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Four vertices spanning `[x1, y1, x2, y2]`, in the order
/// `(x1, y1)`, `(x2, y1)`, `(x2, y2)`, `(x1, y2)`.
///
/// UVs run from `(0, 1)` at the first vertex to `(1, 0)` at the third, so
/// `v` grows from `y2` towards `y1`.
pub fn corner_quad(rect: [f32; 4], colors: &CornerColors) -> [ColoredVertex; 4] {
    let [x1, y1, x2, y2] = rect;
    [
        ColoredVertex { pos: [x1, y1, 0.0], color: colors.upper_left.to_array(), uv: [0.0, 1.0] },
        ColoredVertex { pos: [x2, y1, 0.0], color: colors.upper_right.to_array(), uv: [1.0, 1.0] },
        ColoredVertex { pos: [x2, y2, 0.0], color: colors.lower_right.to_array(), uv: [1.0, 0.0] },
        ColoredVertex { pos: [x1, y2, 0.0], color: colors.lower_left.to_array(), uv: [0.0, 0.0] },
    ]
}
