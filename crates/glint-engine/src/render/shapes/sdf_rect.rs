use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Mat4;
use crate::device::create_wgsl_module;
use crate::render::{RenderCtx, RenderTarget};
use crate::sdf::RoundedRectParams;

use super::common::{straight_alpha_blend, triangle_list, uniform_entry};
use super::vertex::{ColoredVertex, CORNER_QUAD_INDICES};

/// Uniform block of `sdf_rect.wgsl` (112 bytes).
///
///  offset   0  mvp               mat4x4<f32>
///  offset  64  border_color      vec4<f32>
///  offset  80  rect_size         vec2<f32>
///  offset  88  radius            f32
///  offset  92  border_thickness  f32
///  offset  96  edge_softness     f32
///  offset 100  padding to a 16-byte multiple
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SdfRectUniform {
    pub mvp: Mat4,
    pub border_color: [f32; 4],
    pub rect_size: [f32; 2],
    pub radius: f32,
    pub border_thickness: f32,
    pub edge_softness: f32,
    pub _pad: [f32; 3],
}

impl SdfRectUniform {
    pub fn new(mvp: Mat4, params: &RoundedRectParams) -> Self {
        Self {
            mvp,
            border_color: params.border_color.to_array(),
            rect_size: [params.size.x, params.size.y],
            radius: params.radius,
            border_thickness: params.border_thickness,
            edge_softness: params.edge_softness,
            _pad: [0.0; 3],
        }
    }
}

/// Draws a rounded rectangle in window pixels, shaded by a signed distance
/// field in the fragment shader.
///
/// Vertex colors are straight alpha and blended with `SrcAlpha,
/// OneMinusSrcAlpha`.
#[derive(Default)]
pub struct SdfRectRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    ubo: Option<wgpu::Buffer>,
    vbo: Option<wgpu::Buffer>,
    ibo: Option<wgpu::Buffer>,
}

impl SdfRectRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `vertices` (window pixels) with the projection of the current
    /// viewport.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        vertices: &[ColoredVertex; 4],
        params: &RoundedRectParams,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_buffers(ctx);
        self.ensure_bindings(ctx);

        let (Some(pipeline), Some(bind_group), Some(ubo), Some(vbo), Some(ibo)) = (
            self.pipeline.as_ref(),
            self.bind_group.as_ref(),
            self.ubo.as_ref(),
            self.vbo.as_ref(),
            self.ibo.as_ref(),
        ) else {
            return;
        };

        let uniform = SdfRectUniform::new(ctx.window_projection(), params);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&uniform));
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(vertices));

        let mut rpass = target.begin_load_pass("glint sdf_rect pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..CORNER_QUAD_INDICES.len() as u32, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = create_wgsl_module(ctx.device, "sdf_rect.wgsl", include_str!("shaders/sdf_rect.wgsl"));

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("glint sdf_rect bgl"),
            entries: &[uniform_entry::<SdfRectUniform>(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });

        let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("glint sdf_rect pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("glint sdf_rect pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[ColoredVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(straight_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: triangle_list(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        self.bind_group = None;
    }

    fn ensure_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.vbo.is_some() && self.ibo.is_some() && self.ubo.is_some() {
            return;
        }

        log::info!("Initialize buffers");

        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("glint sdf_rect vbo"),
            size: (4 * std::mem::size_of::<ColoredVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glint sdf_rect ibo"),
            contents: bytemuck::cast_slice(&CORNER_QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
        self.ubo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("glint sdf_rect ubo"),
            size: std::mem::size_of::<SdfRectUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.bind_group = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() {
            return;
        }
        let (Some(bgl), Some(ubo)) = (self.bind_group_layout.as_ref(), self.ubo.as_ref()) else {
            return;
        };

        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glint sdf_rect bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::common::validate_wgsl;
    use crate::coords::{ortho, Vec2};
    use crate::paint::Rgba;

    #[test]
    fn uniform_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<SdfRectUniform>(), 112);

        let params = RoundedRectParams {
            size: Vec2::new(200.0, 150.0),
            radius: 12.0,
            border_thickness: 3.0,
            edge_softness: 1.5,
            border_color: Rgba::YELLOW,
        };
        let u = SdfRectUniform::new(ortho(0.0, 640.0, 480.0, 0.0, -1.0, 1.0), &params);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&u));

        assert_eq!(&floats[16..20], &[1.0, 1.0, 0.0, 1.0]);
        assert_eq!(&floats[20..22], &[200.0, 150.0]);
        assert_eq!(floats[22], 12.0);
        assert_eq!(floats[23], 3.0);
        assert_eq!(floats[24], 1.5);
    }

    #[test]
    fn wgsl_uniform_offsets_match_rust_layout() {
        use wgpu::naga::TypeInner;

        let module = validate_wgsl("sdf_rect.wgsl", include_str!("shaders/sdf_rect.wgsl"));
        let (_, ty) = module
            .types
            .iter()
            .find(|(_, ty)| ty.name.as_deref() == Some("Uniforms"))
            .expect("Uniforms struct");
        let TypeInner::Struct { members, span } = &ty.inner else {
            panic!("Uniforms is not a struct");
        };

        assert_eq!(*span as usize, std::mem::size_of::<SdfRectUniform>());
        let offsets: Vec<(&str, u32)> = members
            .iter()
            .map(|m| (m.name.as_deref().unwrap_or(""), m.offset))
            .collect();
        assert_eq!(
            offsets,
            [
                ("mvp", std::mem::offset_of!(SdfRectUniform, mvp) as u32),
                ("border_color", std::mem::offset_of!(SdfRectUniform, border_color) as u32),
                ("rect_size", std::mem::offset_of!(SdfRectUniform, rect_size) as u32),
                ("radius", std::mem::offset_of!(SdfRectUniform, radius) as u32),
                ("border_thickness", std::mem::offset_of!(SdfRectUniform, border_thickness) as u32),
                ("edge_softness", std::mem::offset_of!(SdfRectUniform, edge_softness) as u32),
            ]
        );
        assert_eq!(offsets.iter().map(|(_, o)| *o).collect::<Vec<_>>(), [0, 64, 80, 88, 92, 96]);
    }

    #[test]
    fn mvp_occupies_first_sixteen_floats() {
        let params = RoundedRectParams {
            size: Vec2::new(1.0, 1.0),
            radius: 0.0,
            border_thickness: 0.0,
            edge_softness: 0.0,
            border_color: Rgba::transparent(),
        };
        let mvp = ortho(0.0, 640.0, 480.0, 0.0, -1.0, 1.0);
        let u = SdfRectUniform::new(mvp, &params);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&u));
        assert_eq!(floats[0], 2.0 / 640.0);
        assert_eq!(floats[5], -2.0 / 480.0);
        assert_eq!(floats[12], -1.0);
        assert_eq!(floats[13], 1.0);
    }
}
