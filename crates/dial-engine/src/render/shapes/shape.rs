use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;
use crate::scene::{CircleCmd, LineCmd};

use super::common::{instanced_pipeline, InstanceBuffer, Quad, ViewportUniform};

const KIND_CIRCLE: f32 = 0.0;
const KIND_LINE: f32 = 1.0;

/// Instance data layout (48 bytes):
///
///  offset  0  p0      [f32; 2]   loc 1  (circle center / segment start)
///  offset  8  p1      [f32; 2]   loc 2  (segment end; unused for circles)
///  offset 16  params  [f32; 4]   loc 3  (.x = radius or half width, .y = kind)
///  offset 32  color   [f32; 4]   loc 4  (premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(crate) struct ShapeInstance {
    p0: [f32; 2],
    p1: [f32; 2],
    params: [f32; 4],
    color: [f32; 4],
}

impl ShapeInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // p0
        2 => Float32x2, // p1
        3 => Float32x4, // params
        4 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// `None` for circles that would not cover any pixel.
    pub(crate) fn circle(cmd: &CircleCmd) -> Option<Self> {
        if !(cmd.radius > 0.0) || !cmd.center.is_finite() {
            return None;
        }
        let c = [cmd.center.x, cmd.center.y];
        Some(Self {
            p0: c,
            p1: c,
            params: [cmd.radius, KIND_CIRCLE, 0.0, 0.0],
            color: cmd.color.to_array(),
        })
    }

    /// `None` for zero-length or zero-width segments.
    pub(crate) fn line(cmd: &LineCmd) -> Option<Self> {
        if !(cmd.width > 0.0) || !(cmd.length() > 0.0) {
            return None;
        }
        Some(Self {
            p0: [cmd.start.x, cmd.start.y],
            p1: [cmd.end.x, cmd.end.y],
            params: [cmd.width * 0.5, KIND_LINE, 0.0, 0.0],
            color: cmd.color.to_array(),
        })
    }
}

/// Instanced SDF pipeline for circles and line segments.
pub(crate) struct ShapePipeline {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,
    quad: Option<Quad>,
    instances: InstanceBuffer<ShapeInstance>,
}

impl Default for ShapePipeline {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            viewport_ubo: None,
            quad: None,
            instances: InstanceBuffer::new("dial shape instance vbo"),
        }
    }
}

impl ShapePipeline {
    /// Creates GPU resources on first use and uploads this frame's instances.
    pub(crate) fn prepare(&mut self, ctx: &RenderCtx<'_>, instances: &[ShapeInstance]) {
        if instances.is_empty() {
            return;
        }
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        if self.quad.is_none() {
            self.quad = Some(Quad::new(ctx, "dial shape quad"));
        }
        if let Some(ubo) = self.viewport_ubo.as_ref() {
            ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));
        }
        self.instances.upload(ctx, instances);
    }

    /// Draws `range` of the instances uploaded by the last [`prepare`](Self::prepare).
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, range: Range<u32>) {
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad) = self.quad.as_ref() else { return };
        let Some(instance_vbo) = self.instances.buffer() else { return };

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        quad.bind(rpass);
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.draw_indexed(0..Quad::INDEX_COUNT, 0, range);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("dial shape shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/shape.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("dial shape bgl"),
            entries: &[ViewportUniform::layout_entry(0)],
        });

        let pipeline =
            instanced_pipeline(ctx, "dial shape pipeline", &shader, &bgl, ShapeInstance::layout());

        log::debug!("shape pipeline built for {:?}", ctx.surface_format);
        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ViewportUniform::create_buffer(ctx, "dial shape viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("dial shape bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn circle_instance_carries_radius_and_kind() {
        let cmd = CircleCmd::new(Vec2::new(10.0, 20.0), 5.0, Color::WHITE);
        let inst = ShapeInstance::circle(&cmd).unwrap();
        assert_eq!(inst.p0, [10.0, 20.0]);
        assert_eq!(inst.params[0], 5.0);
        assert_eq!(inst.params[1], KIND_CIRCLE);
        assert_eq!(inst.color, Color::WHITE.to_array());
    }

    #[test]
    fn line_instance_uses_half_width() {
        let cmd = LineCmd::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), 4.0, Color::BLACK);
        let inst = ShapeInstance::line(&cmd).unwrap();
        assert_eq!(inst.p1, [0.0, 10.0]);
        assert_eq!(inst.params[0], 2.0);
        assert_eq!(inst.params[1], KIND_LINE);
    }

    #[test]
    fn degenerate_shapes_are_skipped() {
        let dot = CircleCmd::new(Vec2::new(1.0, 1.0), 0.0, Color::BLACK);
        assert!(ShapeInstance::circle(&dot).is_none());

        let nan = CircleCmd::new(Vec2::new(1.0, 1.0), f32::NAN, Color::BLACK);
        assert!(ShapeInstance::circle(&nan).is_none());

        let point = LineCmd::new(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0), 2.0, Color::BLACK);
        assert!(ShapeInstance::line(&point).is_none());

        let hairless = LineCmd::new(Vec2::new(0.0, 0.0), Vec2::new(3.0, 3.0), 0.0, Color::BLACK);
        assert!(ShapeInstance::line(&hairless).is_none());
    }
}
