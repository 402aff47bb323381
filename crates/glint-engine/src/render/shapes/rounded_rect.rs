use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::device::create_wgsl_module;
use crate::render::RenderCtx;
use crate::scene::RoundedRectCmd;

use super::common::{
    ensure_instance_buffer, premul_alpha_blend, triangle_list, uniform_entry, QuadVertex,
    ViewportUniform, QUAD_INDICES, QUAD_VERTICES,
};

/// Instanced renderer for `DrawCmd::RoundedRect`.
///
/// Each instance is a unit quad stretched over the rectangle; the fragment
/// shader cuts the corners and draws the border from a distance field.
#[derive(Default)]
pub struct RoundedRectRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

impl RoundedRectRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads this frame's instances. Must run before the pass opens.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, instances: &[RoundedRectInstance]) {
        if instances.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        if let Some(ubo) = self.viewport_ubo.as_ref() {
            ctx.queue
                .write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::new(ctx.viewport)));
        }

        ensure_instance_buffer::<RoundedRectInstance>(
            ctx.device,
            "glint rounded_rect instance vbo",
            &mut self.instance_vbo,
            &mut self.instance_capacity,
            instances.len(),
        );
        if let Some(vbo) = self.instance_vbo.as_ref() {
            ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(instances));
        }
    }

    /// Draws the prepared instances in `range`.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, range: Range<u32>) {
        let (Some(pipeline), Some(bind_group), Some(quad_vbo), Some(quad_ibo), Some(instances)) = (
            self.pipeline.as_ref(),
            self.bind_group.as_ref(),
            self.quad_vbo.as_ref(),
            self.quad_ibo.as_ref(),
            self.instance_vbo.as_ref(),
        ) else {
            return;
        };

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instances.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, range);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = create_wgsl_module(
            ctx.device,
            "rounded_rect.wgsl",
            include_str!("shaders/rounded_rect.wgsl"),
        );

        let bind_group_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("glint rounded_rect bgl"),
            entries: &[uniform_entry::<ViewportUniform>(0, wgpu::ShaderStages::VERTEX)],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("glint rounded_rect pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("glint rounded_rect pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout(), RoundedRectInstance::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
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
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return; };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("glint rounded_rect viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glint rounded_rect bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }
        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glint rounded_rect quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glint rounded_rect quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

/// Instance data layout (80 bytes):
///
///  offset  0  origin        [f32; 2]  loc 1
///  offset  8  size          [f32; 2]  loc 2
///  offset 16  params        [f32; 4]  loc 3  (radius, border width, gradient dir)
///  offset 32  color0        [f32; 4]  loc 4
///  offset 48  color1        [f32; 4]  loc 5
///  offset 64  border_color  [f32; 4]  loc 6
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct RoundedRectInstance {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    pub params: [f32; 4],
    pub color0: [f32; 4],
    pub color1: [f32; 4],
    pub border_color: [f32; 4],
}

impl RoundedRectInstance {
    const ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x4, // params
        4 => Float32x4, // color0
        5 => Float32x4, // color1
        6 => Float32x4  // border_color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RoundedRectInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// Builds the instance for `cmd`, or `None` when it covers no area.
    pub fn from_cmd(cmd: &RoundedRectCmd) -> Option<Self> {
        let r = cmd.rect.normalized();
        if r.is_empty() {
            return None;
        }

        let (c0, c1, dir) = cmd.fill.resolve();
        let (border_width, border_color) = match cmd.border {
            Some(b) => (b.width.max(0.0), b.color.to_array()),
            None => (0.0, [0.0; 4]),
        };

        Some(Self {
            origin: [r.origin.x, r.origin.y],
            size: [r.size.x, r.size.y],
            params: [cmd.radius.max(0.0), border_width, dir[0], dir[1]],
            color0: c0.to_array(),
            color1: c1.to_array(),
            border_color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;
    use crate::scene::{Border, Fill};

    #[test]
    fn instance_is_eighty_bytes() {
        assert_eq!(std::mem::size_of::<RoundedRectInstance>(), 80);
    }

    #[test]
    fn negative_extent_is_normalized() {
        let cmd = RoundedRectCmd {
            rect: Rect::new(10.0, 10.0, -4.0, 6.0),
            radius: 2.0,
            fill: Fill::Solid(Color::WHITE),
            border: Some(Border::new(1.5, Color::BLACK)),
        };
        let inst = RoundedRectInstance::from_cmd(&cmd).unwrap();
        assert_eq!(inst.origin, [6.0, 10.0]);
        assert_eq!(inst.size, [4.0, 6.0]);
        assert_eq!(inst.params, [2.0, 1.5, 0.0, 0.0]);
        assert_eq!(inst.border_color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn empty_rect_is_skipped() {
        let cmd = RoundedRectCmd {
            rect: Rect::new(0.0, 0.0, 0.0, 10.0),
            radius: 0.0,
            fill: Fill::Solid(Color::WHITE),
            border: None,
        };
        assert!(RoundedRectInstance::from_cmd(&cmd).is_none());
    }

    #[test]
    fn gradient_fill_sets_direction() {
        let cmd = RoundedRectCmd {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            radius: -3.0,
            fill: Fill::Horizontal(Color::BLACK, Color::WHITE),
            border: None,
        };
        let inst = RoundedRectInstance::from_cmd(&cmd).unwrap();
        assert_eq!(inst.params, [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(inst.color0, Color::BLACK.to_array());
        assert_eq!(inst.color1, Color::WHITE.to_array());
    }
}
