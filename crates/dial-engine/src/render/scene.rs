use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

use super::batch::{Pipe, RunList};
use super::shapes::glyph::{GlyphInstance, GlyphPipeline};
use super::shapes::shape::{ShapeInstance, ShapePipeline};
use super::{RenderCtx, RenderTarget};

/// Paints a [`DrawList`] in one render pass.
///
/// Circles and line segments go through an SDF pipeline, text through a
/// glyph-atlas pipeline. Commands are visited in paint order and grouped into
/// runs, so a later circle still covers earlier text and vice versa.
#[derive(Default)]
pub struct SceneRenderer {
    shapes: ShapePipeline,
    glyphs: GlyphPipeline,
    shape_instances: Vec<ShapeInstance>,
    glyph_instances: Vec<GlyphInstance>,
    runs: RunList,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `draw_list` into `target`, painting over its current contents.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        fonts: &FontSystem,
    ) {
        self.shape_instances.clear();
        self.glyph_instances.clear();
        self.runs.clear();

        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Circle(cmd) => {
                    if let Some(inst) = ShapeInstance::circle(cmd) {
                        Self::push_shape(&mut self.shape_instances, &mut self.runs, inst);
                    }
                }
                DrawCmd::Line(cmd) => {
                    if let Some(inst) = ShapeInstance::line(cmd) {
                        Self::push_shape(&mut self.shape_instances, &mut self.runs, inst);
                    }
                }
                DrawCmd::Text(cmd) => {
                    let start = self.glyph_instances.len() as u32;
                    self.glyphs.push_text(ctx, cmd, fonts, &mut self.glyph_instances);
                    let end = self.glyph_instances.len() as u32;
                    self.runs.push(Pipe::Glyph, start..end);
                }
            }
        }

        // Every instance of the frame is uploaded before the pass is recorded;
        // queue writes are ordered before the submit that consumes them.
        self.shapes.prepare(ctx, &self.shape_instances);
        self.glyphs.prepare(ctx, &self.glyph_instances);

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("dial scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for run in self.runs.runs() {
            match run.pipe {
                Pipe::Shape => self.shapes.draw(&mut rpass, run.instances.clone()),
                Pipe::Glyph => self.glyphs.draw(&mut rpass, run.instances.clone()),
            }
        }

        log::trace!(
            "scene pass: {} items, {} shape / {} glyph instances, {} runs",
            draw_list.len(),
            self.shape_instances.len(),
            self.glyph_instances.len(),
            self.runs.runs().len()
        );
    }

    fn push_shape(instances: &mut Vec<ShapeInstance>, runs: &mut RunList, inst: ShapeInstance) {
        let start = instances.len() as u32;
        instances.push(inst);
        runs.push(Pipe::Shape, start..start + 1);
    }
}
