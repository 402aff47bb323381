use wgpu::util::DeviceExt;

use crate::device::create_wgsl_module;
use crate::render::{RenderCtx, RenderTarget};

use super::common::triangle_list;
use super::vertex::{ColoredVertex, CORNER_QUAD_INDICES};

/// Draws one vertex-colored quad given directly in clip space.
///
/// The vertex buffer is created on first use and rewritten every frame.
#[derive(Default)]
pub struct QuadRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    vbo: Option<wgpu::Buffer>,
    ibo: Option<wgpu::Buffer>,
}

impl QuadRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        vertices: &[ColoredVertex; 4],
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_buffers(ctx);

        let (Some(pipeline), Some(vbo), Some(ibo)) =
            (self.pipeline.as_ref(), self.vbo.as_ref(), self.ibo.as_ref())
        else {
            return;
        };

        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(vertices));

        let mut rpass = target.begin_load_pass("glint quad pass");
        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..CORNER_QUAD_INDICES.len() as u32, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = create_wgsl_module(ctx.device, "quad.wgsl", include_str!("shaders/quad.wgsl"));

        let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("glint quad pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("glint quad pipeline"),
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
                    blend: Some(wgpu::BlendState::REPLACE),
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
    }

    fn ensure_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.vbo.is_some() && self.ibo.is_some() {
            return;
        }

        log::info!("Initialize buffers");

        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("glint quad vbo"),
            size: (4 * std::mem::size_of::<ColoredVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glint quad ibo"),
            contents: bytemuck::cast_slice(&CORNER_QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}
