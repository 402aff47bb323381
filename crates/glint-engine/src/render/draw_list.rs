use std::ops::Range;

use crate::coords::Rect;
use crate::render::shapes::common::logical_clip_to_scissor;
use crate::render::shapes::rounded_rect::{RoundedRectInstance, RoundedRectRenderer};
use crate::render::shapes::text::{GlyphInstance, TextRenderer};
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum BatchKind {
    RoundedRect,
    Text,
}

/// Consecutive instances of one kind sharing a clip rect.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Batch {
    pub kind: BatchKind,
    pub clip: Option<Rect>,
    pub range: Range<u32>,
}

/// Groups paint-ordered instances into as few draw calls as possible
/// without reordering anything.
#[derive(Debug, Default)]
pub(crate) struct BatchPlanner {
    batches: Vec<Batch>,
    rects: u32,
    glyphs: u32,
}

impl BatchPlanner {
    pub(crate) fn clear(&mut self) {
        self.batches.clear();
        self.rects = 0;
        self.glyphs = 0;
    }

    /// Appends `count` instances of `kind` under `clip`.
    pub(crate) fn push(&mut self, kind: BatchKind, clip: Option<Rect>, count: u32) {
        if count == 0 {
            return;
        }

        let cursor = match kind {
            BatchKind::RoundedRect => &mut self.rects,
            BatchKind::Text => &mut self.glyphs,
        };
        let start = *cursor;
        *cursor += count;

        if let Some(last) = self.batches.last_mut() {
            if last.kind == kind && last.clip == clip && last.range.end == start {
                last.range.end = start + count;
                return;
            }
        }

        self.batches.push(Batch {
            kind,
            clip,
            range: start..start + count,
        });
    }

    pub(crate) fn batches(&self) -> &[Batch] {
        &self.batches
    }
}

/// Renders a [`DrawList`] in paint order within a single render pass.
///
/// Rounded rects and text are interleaved as recorded, so a panel drawn on
/// top of another hides the text beneath it.
#[derive(Default)]
pub struct DrawListRenderer {
    rects: RoundedRectRenderer,
    text: TextRenderer,

    rect_instances: Vec<RoundedRectInstance>,
    glyph_instances: Vec<GlyphInstance>,
    planner: BatchPlanner,
}

impl DrawListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        fonts: &FontSystem,
    ) {
        self.rect_instances.clear();
        self.glyph_instances.clear();
        self.planner.clear();

        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::RoundedRect(cmd) => {
                    if let Some(inst) = RoundedRectInstance::from_cmd(cmd) {
                        self.rect_instances.push(inst);
                        self.planner.push(BatchKind::RoundedRect, item.clip_rect, 1);
                    }
                }
                DrawCmd::Text(cmd) => {
                    let before = self.glyph_instances.len();
                    self.text.layout_text(ctx, fonts, cmd, &mut self.glyph_instances);
                    let added = (self.glyph_instances.len() - before) as u32;
                    self.planner.push(BatchKind::Text, item.clip_rect, added);
                }
            }
        }

        if self.planner.batches().is_empty() {
            return;
        }

        self.rects.prepare(ctx, &self.rect_instances);
        self.text.prepare(ctx, &self.glyph_instances);

        let mut rpass = target.begin_load_pass("glint draw list pass");

        for batch in self.planner.batches() {
            let Some((x, y, w, h)) =
                logical_clip_to_scissor(batch.clip, ctx.scale_factor, ctx.physical_size)
            else {
                continue;
            };
            rpass.set_scissor_rect(x, y, w, h);

            match batch.kind {
                BatchKind::RoundedRect => self.rects.draw(&mut rpass, batch.range.clone()),
                BatchKind::Text => self.text.draw(&mut rpass, batch.range.clone()),
            }
        }
    }
}
