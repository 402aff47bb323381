use glint_engine::coords::{Rect, Vec2};

use crate::id::display_label;
use crate::ui::Ui;

impl Ui<'_> {
    /// A box that flips `value` when clicked. Returns `true` on the frame it
    /// flips.
    pub fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        let id = self.widget_id(label);
        let text = display_label(label);

        let style = &self.ctx.style;
        let square = style.frame_height();
        let gap = style.item_inner_spacing;
        let fp = style.frame_padding;
        let rounding = style.frame_rounding;
        let text_w = self.ctx.text_width(text);

        let width = if text_w > 0.0 { square + gap + text_w } else { square };
        let item = self.next_item(Vec2::new(width, square));
        let resp = self.interact(id, item.rect);

        if resp.clicked {
            *value = !*value;
        }

        let style = &self.ctx.style;
        let bg = style.frame_color(resp.hovered, resp.active);
        let mark = style.check_mark;

        let origin = item.rect.origin;
        let box_rect = Rect::new(origin.x, origin.y, square, square);
        self.ctx.draw_list.push_solid_rounded_rect(item.z, box_rect, rounding, bg);
        if *value {
            let pad = (square / 6.0).floor().max(1.0);
            self.ctx
                .draw_list
                .push_solid_rounded_rect(item.z.above(1), box_rect.inset(pad), rounding, mark);
        }

        self.draw_text(text, Vec2::new(origin.x + square + gap, origin.y + fp.y), item.z.above(1));
        resp.clicked
    }
}
