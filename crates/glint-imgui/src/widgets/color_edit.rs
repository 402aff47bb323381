use glint_engine::coords::{Rect, Vec2};
use glint_engine::paint::{Color, Rgba};
use glint_engine::scene::{Border, Fill};

use crate::id::display_label;
use crate::ui::Ui;

const CHANNELS: [&str; 4] = ["R", "G", "B", "A"];

impl Ui<'_> {
    /// Four channel sliders over `[0, 1]` followed by a preview swatch.
    ///
    /// Channels show as `R:255` style bytes. The swatch's right half carries
    /// the alpha, the left half is opaque.
    pub fn color_edit4(&mut self, label: &str, color: &mut Rgba) -> bool {
        let id = self.widget_id(label);
        let text = display_label(label);

        let style = &self.ctx.style;
        let total_w = style.item_width;
        let square = style.frame_height();
        let gap = style.item_inner_spacing;
        let fp = style.frame_padding;
        let border = Border::new(1.0, style.border);
        let rounding = style.frame_rounding;
        let text_w = self.ctx.text_width(text);

        let sliders_w = (total_w - square - gap).max(0.0);
        let channel_w = ((sliders_w - gap * 3.0) / 4.0).max(1.0);

        let width = if text_w > 0.0 { total_w + gap + text_w } else { total_w };
        let item = self.next_item(Vec2::new(width, square));
        let origin = item.rect.origin;

        let mut changed = false;
        for (i, name) in CHANNELS.into_iter().enumerate() {
            let frame = Rect::new(origin.x + i as f32 * (channel_w + gap), origin.y, channel_w, square);
            if let Some(ch) = color.channel_mut(i) {
                changed |= self.slider_frame(id.with(name), frame, item.z, ch, 0.0, 1.0, |v| {
                    format!("{name}:{}", Rgba::channel_u8(v))
                });
            }
        }

        let swatch = Rect::new(origin.x + total_w - square, origin.y, square, square);
        let opaque = Color::from_straight(color.r, color.g, color.b, 1.0);
        self.ctx.draw_list.push_rounded_rect(
            item.z,
            swatch,
            rounding,
            Fill::Horizontal(opaque, Color::from(*color)),
            Some(border),
        );

        self.draw_text(
            text,
            Vec2::new(origin.x + total_w + gap, origin.y + fp.y),
            item.z.above(1),
        );
        changed
    }
}

#[cfg(test)]
mod tests {
    use glint_engine::coords::Viewport;
    use glint_engine::scene::DrawCmd;

    use super::*;
    use crate::{Context, UiInput};

    fn border_frame(ctx: &mut Context, input: UiInput, c: &mut Rgba) -> bool {
        let mut ui = ctx.frame(input, Viewport::new(640.0, 480.0));
        let changed = ui.window("Debug", |ui| ui.color_edit4("Border Color", c));
        ui.finish();
        changed
    }

    #[test]
    fn dragging_a_channel_edits_only_that_channel() {
        let mut ctx = Context::new();
        let mut c = Rgba::new(1.0, 1.0, 0.0, 1.0);
        border_frame(&mut ctx, UiInput::default(), &mut c);

        // Red slider spans x = 68..109.25 on the first row.
        let press = UiInput {
            mouse_pos: Some(Vec2::new(68.0, 95.0)),
            mouse_down: true,
            mouse_pressed: true,
            mouse_released: false,
        };
        assert!(border_frame(&mut ctx, press, &mut c));
        assert_eq!(c, Rgba::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn swatch_previews_the_color() {
        let mut ctx = Context::new();
        let mut c = Rgba::new(0.0, 0.0, 1.0, 0.5);
        border_frame(&mut ctx, UiInput::default(), &mut c);

        let swatch = ctx.draw_list().items().iter().find_map(|i| match &i.cmd {
            DrawCmd::RoundedRect(r) if matches!(r.fill, Fill::Horizontal(..)) => Some(r.fill),
            _ => None,
        });
        assert_eq!(
            swatch,
            Some(Fill::Horizontal(
                Color::from_straight(0.0, 0.0, 1.0, 1.0),
                Color::from_straight(0.0, 0.0, 1.0, 0.5),
            ))
        );
    }
}
