use glint_engine::coords::{Rect, Vec2};
use glint_engine::scene::ZIndex;

use crate::id::{Id, display_label};
use crate::ui::Ui;

/// Space kept between the frame and the grab.
const GRAB_PADDING: f32 = 2.0;

/// Position of `value` along `[min, max]` as a fraction in `[0, 1]`.
pub(crate) fn value_to_t(value: f32, min: f32, max: f32) -> f32 {
    if max == min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Inverse of [`value_to_t`]; `t` is clamped first.
pub(crate) fn t_to_value(t: f32, min: f32, max: f32) -> f32 {
    min + (max - min) * t.clamp(0.0, 1.0)
}

/// Fraction selected by a pointer at `x` over a slider `frame`. The grab is
/// centred on the pointer.
pub(crate) fn pointer_to_t(x: f32, frame: Rect, grab_w: f32) -> f32 {
    let usable = frame.size.x - GRAB_PADDING * 2.0 - grab_w;
    if usable <= 0.0 {
        return 0.0;
    }
    ((x - frame.origin.x - GRAB_PADDING - grab_w * 0.5) / usable).clamp(0.0, 1.0)
}

impl Ui<'_> {
    /// Horizontal slider over `[min, max]`. Pressing or dragging anywhere on
    /// the frame moves the value to the pointer. Returns `true` when the value
    /// changed.
    pub fn slider_float(&mut self, label: &str, value: &mut f32, min: f32, max: f32) -> bool {
        let id = self.widget_id(label);
        let text = display_label(label);

        let style = &self.ctx.style;
        let frame_w = style.item_width;
        let frame_h = style.frame_height();
        let gap = style.item_inner_spacing;
        let fp = style.frame_padding;
        let text_w = self.ctx.text_width(text);

        let width = if text_w > 0.0 { frame_w + gap + text_w } else { frame_w };
        let item = self.next_item(Vec2::new(width, frame_h));
        let frame = Rect::from_origin_size(item.rect.origin, Vec2::new(frame_w, frame_h));

        let changed = self.slider_frame(id, frame, item.z, value, min, max, |v| format!("{v:.3}"));
        self.draw_text(
            text,
            Vec2::new(frame.max().x + gap, frame.origin.y + fp.y),
            item.z.above(1),
        );
        changed
    }

    /// Frame, grab and centred value text of a slider occupying `frame`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn slider_frame(
        &mut self,
        id: Id,
        frame: Rect,
        z: ZIndex,
        value: &mut f32,
        min: f32,
        max: f32,
        format: impl Fn(f32) -> String,
    ) -> bool {
        let resp = self.interact(id, frame);
        let grab_w = self.ctx.style.grab_min_size.min(frame.size.x - GRAB_PADDING * 2.0).max(0.0);

        let mut changed = false;
        if resp.active && (self.input.mouse_down || self.input.mouse_pressed) {
            if let Some(p) = self.input.mouse_pos {
                let new = t_to_value(pointer_to_t(p.x, frame, grab_w), min, max);
                if new != *value {
                    *value = new;
                    changed = true;
                }
            }
        }

        let style = &self.ctx.style;
        let bg = style.frame_color(resp.hovered, resp.active);
        let grab_color = if resp.active { style.slider_grab_active } else { style.slider_grab };
        let rounding = style.frame_rounding;

        let usable = (frame.size.x - GRAB_PADDING * 2.0 - grab_w).max(0.0);
        let t = value_to_t(*value, min, max);
        let grab = Rect::new(
            frame.origin.x + GRAB_PADDING + t * usable,
            frame.origin.y + GRAB_PADDING,
            grab_w,
            (frame.size.y - GRAB_PADDING * 2.0).max(0.0),
        );

        let dl = &mut self.ctx.draw_list;
        dl.push_solid_rounded_rect(z, frame, rounding, bg);
        dl.push_solid_rounded_rect(z.above(1), grab, rounding, grab_color);

        let shown = format(*value);
        let shown_w = self.ctx.text_width(&shown);
        let fp_y = self.ctx.style.frame_padding.y;
        let origin = Vec2::new(frame.center().x - shown_w * 0.5, frame.origin.y + fp_y);
        self.draw_text(&shown, origin, z.above(1));

        changed
    }
}

#[cfg(test)]
mod tests {
    use glint_engine::coords::Viewport;

    use super::*;
    use crate::{Context, UiInput};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-4
    }

    #[test]
    fn t_maps_range_ends() {
        assert_eq!(value_to_t(10.0, 10.0, 300.0), 0.0);
        assert_eq!(value_to_t(300.0, 10.0, 300.0), 1.0);
        assert!(close(value_to_t(155.0, 10.0, 300.0), 0.5));
    }

    #[test]
    fn t_is_clamped() {
        assert_eq!(value_to_t(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(value_to_t(50.0, 0.0, 10.0), 1.0);
        assert_eq!(t_to_value(1.5, 0.0, 100.0), 100.0);
        assert_eq!(t_to_value(-1.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn empty_range_does_not_divide_by_zero() {
        assert_eq!(value_to_t(3.0, 3.0, 3.0), 0.0);
        assert_eq!(t_to_value(0.7, 3.0, 3.0), 3.0);
    }

    #[test]
    fn pointer_centres_the_grab() {
        let frame = Rect::new(0.0, 0.0, 200.0, 19.0);
        assert_eq!(pointer_to_t(0.0, frame, 10.0), 0.0);
        assert_eq!(pointer_to_t(7.0, frame, 10.0), 0.0);
        assert!(close(pointer_to_t(100.0, frame, 10.0), 0.5));
        assert_eq!(pointer_to_t(500.0, frame, 10.0), 1.0);
    }

    fn radius_frame(ctx: &mut Context, input: UiInput, v: &mut f32) -> bool {
        let mut ui = ctx.frame(input, Viewport::new(640.0, 480.0));
        let changed = ui.window("Debug", |ui| ui.slider_float("Corner Radius", v, 0.0, 100.0));
        ui.finish();
        changed
    }

    fn input(x: f32, pressed: bool, down: bool) -> UiInput {
        UiInput {
            mouse_pos: Some(Vec2::new(x, 95.0)),
            mouse_down: down,
            mouse_pressed: pressed,
            mouse_released: !down,
        }
    }

    #[test]
    fn press_then_drag_sets_value() {
        let mut ctx = Context::new();
        let mut v = 0.0;
        radius_frame(&mut ctx, UiInput::default(), &mut v);

        // Frame starts at x = 68; grab centre sits 7 px in, 186 px of travel.
        assert!(radius_frame(&mut ctx, input(168.0, true, true), &mut v));
        assert!(close(v, 50.0), "got {v}");

        // Dragging past the end clamps, even outside the window.
        assert!(radius_frame(&mut ctx, input(900.0, false, true), &mut v));
        assert_eq!(v, 100.0);

        assert!(!radius_frame(&mut ctx, input(100.0, false, false), &mut v));
        assert_eq!(v, 100.0);
    }

    #[test]
    fn hover_alone_leaves_value() {
        let mut ctx = Context::new();
        let mut v = 25.0;
        radius_frame(&mut ctx, UiInput::default(), &mut v);
        let hover = UiInput { mouse_pos: Some(Vec2::new(200.0, 95.0)), ..UiInput::default() };
        assert!(!radius_frame(&mut ctx, hover, &mut v));
        assert_eq!(v, 25.0);
    }
}
