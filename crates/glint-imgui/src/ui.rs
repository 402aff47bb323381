use glint_engine::coords::{Rect, Vec2, Viewport};
use glint_engine::scene::{Border, Fill, ZIndex};

use crate::context::Context;
use crate::id::{Id, display_label};
use crate::input::UiInput;

/// Title of the window that collects widgets declared outside any window.
pub const IMPLICIT_WINDOW: &str = "Debug";

/// Summary of a finished frame.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameOutput {
    /// The pointer is over a GUI window or a widget holds the mouse.
    pub wants_mouse: bool,
}

/// Mouse interaction of one widget this frame.
#[derive(Debug, Copy, Clone, Default)]
pub(crate) struct Response {
    pub hovered: bool,
    /// Holding the mouse, including the frame it is released in.
    pub active: bool,
    /// Pressed and released over the widget.
    pub clicked: bool,
}

/// Space handed to a widget by the window layout.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Item {
    pub rect: Rect,
    /// Layer for the widget's frame. Text goes one above.
    pub z: ZIndex,
}

struct WindowFrame {
    id: Id,
    title: String,
    pos: Vec2,
    z: ZIndex,
    cursor: Vec2,
    content_max: Vec2,
}

/// One frame of GUI declarations.
///
/// Obtained from [`Context::frame`]. Widgets are plain method calls that
/// draw themselves and report whether they changed the value they edit.
pub struct Ui<'a> {
    pub(crate) ctx: &'a mut Context,
    pub(crate) input: UiInput,
    viewport: Viewport,
    stack: Vec<WindowFrame>,
}

impl<'a> Ui<'a> {
    pub(crate) fn new(ctx: &'a mut Context, input: UiInput, viewport: Viewport) -> Self {
        Self { ctx, input, viewport, stack: Vec::new() }
    }

    /// Declares a titled window and lays out the widgets `f` adds to it.
    ///
    /// The window sizes itself to its content and can be dragged by its
    /// title bar. It is kept inside the viewport.
    pub fn window<R>(&mut self, title: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.begin_window(title);
        let r = f(self);
        self.end_window();
        r
    }

    /// Closes any open window and finishes the frame.
    pub fn finish(mut self) -> FrameOutput {
        while !self.stack.is_empty() {
            self.end_window();
        }
        if !self.input.mouse_down {
            self.ctx.active = None;
        }
        FrameOutput {
            wants_mouse: self.ctx.hovered_window.is_some() || self.ctx.active.is_some(),
        }
    }

    fn begin_window(&mut self, title: &str) {
        let id = Id::window(title);
        let state = self.ctx.ensure_window(id);

        let wp = self.ctx.style.window_padding;
        let fp = self.ctx.style.frame_padding;
        let title_h = self.ctx.style.frame_height();
        let title_text = display_label(title);
        let title_w = self.ctx.text_width(title_text);

        let mut pos = state.pos;

        let bar = Rect::new(pos.x, pos.y, state.size.x, title_h);
        let bar_id = id.with("#title");
        let bar_resp = self.interact_in(id, bar_id, bar);
        if bar_resp.active {
            if let Some(p) = self.input.mouse_pos {
                if bar_resp.hovered && self.input.mouse_pressed {
                    self.ctx.drag_offset = p - pos;
                }
                if self.input.mouse_down {
                    pos = p - self.ctx.drag_offset;
                }
            }
        }

        pos = clamp_to_viewport(pos, state.size, self.viewport);
        if let Some(w) = self.ctx.windows.get_mut(&id) {
            w.pos = pos;
        }

        let cursor = Vec2::new(pos.x + wp.x, pos.y + title_h + wp.y);
        self.stack.push(WindowFrame {
            id,
            title: title.to_owned(),
            pos,
            z: self.ctx.window_z(id),
            cursor,
            content_max: Vec2::new(pos.x + fp.x * 2.0 + title_w - wp.x, cursor.y),
        });
    }

    fn end_window(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };

        let style = &self.ctx.style;
        let wp = style.window_padding;
        let fp = style.frame_padding;
        let title_h = style.frame_height();
        let size = Vec2::new(
            frame.content_max.x - frame.pos.x + wp.x,
            frame.content_max.y - frame.pos.y + wp.y,
        );

        let focused = self.ctx.is_front_window(frame.id);
        let title_bg = if focused { style.title_bg_active } else { style.title_bg };
        let window_bg = style.window_bg;
        let border = Border::new(style.window_border, style.border);
        let rounding = style.window_rounding;

        let dl = &mut self.ctx.draw_list;
        dl.push_rounded_rect(
            frame.z,
            Rect::from_origin_size(frame.pos, size),
            rounding,
            Fill::Solid(window_bg),
            Some(border),
        );
        dl.push_solid_rounded_rect(
            frame.z.above(1),
            Rect::new(frame.pos.x, frame.pos.y, size.x, title_h),
            rounding,
            title_bg,
        );
        self.draw_text(display_label(&frame.title), frame.pos + fp, frame.z.above(3));

        let frame_count = self.ctx.frame_count;
        if let Some(w) = self.ctx.windows.get_mut(&frame.id) {
            w.size = size;
            w.last_frame = frame_count;
        }
    }

    fn ensure_window(&mut self) {
        if self.stack.is_empty() {
            self.begin_window(IMPLICIT_WINDOW);
        }
    }

    /// Id of `label` inside the current window.
    pub(crate) fn widget_id(&mut self, label: &str) -> Id {
        self.ensure_window();
        let title = self.stack.last().map(|f| f.title.as_str()).unwrap_or(IMPLICIT_WINDOW);
        Id::new(title, label)
    }

    /// Reserves the next row of the current window.
    pub(crate) fn next_item(&mut self, size: Vec2) -> Item {
        self.ensure_window();
        let spacing = self.ctx.style.item_spacing.y;
        let Some(frame) = self.stack.last_mut() else {
            return Item { rect: Rect::from_origin_size(Vec2::zero(), size), z: ZIndex::default() };
        };

        let rect = Rect::from_origin_size(frame.cursor, size);
        frame.cursor.y += size.y + spacing;
        frame.content_max = frame.content_max.max(rect.max());
        Item { rect, z: frame.z.above(2) }
    }

    /// Hit-tests `rect` for widget `id` in the current window.
    pub(crate) fn interact(&mut self, id: Id, rect: Rect) -> Response {
        self.ensure_window();
        let window = self.stack.last().map(|f| f.id).unwrap_or_else(|| Id::window(IMPLICIT_WINDOW));
        self.interact_in(window, id, rect)
    }

    fn interact_in(&mut self, window: Id, id: Id, rect: Rect) -> Response {
        let over = self.ctx.hovered_window == Some(window)
            && self.input.mouse_pos.is_some_and(|p| rect.contains(p));
        let hovered = over && self.ctx.active.is_none_or(|a| a == id);

        if hovered && self.input.mouse_pressed {
            self.ctx.active = Some(id);
        }

        let active = self.ctx.active == Some(id);
        let mut clicked = false;
        if active && self.input.mouse_released {
            clicked = hovered;
            self.ctx.active = None;
        }

        Response { hovered, active, clicked }
    }

    /// Draws `text` with its top-left corner at `origin`. No-op without a font.
    pub(crate) fn draw_text(&mut self, text: &str, origin: Vec2, z: ZIndex) {
        let Some(font) = self.ctx.font() else {
            return;
        };
        if text.is_empty() {
            return;
        }
        let size = self.ctx.style.font_size;
        let color = self.ctx.style.text;
        self.ctx.draw_list.push_text(z, text, font, size, color, origin);
    }
}

/// Keeps a window of `size` inside the viewport, preferring its top-left
/// corner when it does not fit.
pub(crate) fn clamp_to_viewport(pos: Vec2, size: Vec2, viewport: Viewport) -> Vec2 {
    let max_x = (viewport.width - size.x).max(0.0);
    let max_y = (viewport.height - size.y).max(0.0);
    Vec2::new(pos.x.min(max_x).max(0.0), pos.y.min(max_y).max(0.0))
}

#[cfg(test)]
mod tests {
    use glint_engine::scene::DrawCmd;

    use super::*;

    const VIEW: Viewport = Viewport::new(640.0, 480.0);

    fn idle() -> UiInput {
        UiInput::default()
    }

    fn at(x: f32, y: f32) -> UiInput {
        UiInput { mouse_pos: Some(Vec2::new(x, y)), ..UiInput::default() }
    }

    fn press(x: f32, y: f32) -> UiInput {
        UiInput { mouse_down: true, mouse_pressed: true, ..at(x, y) }
    }

    fn hold(x: f32, y: f32) -> UiInput {
        UiInput { mouse_down: true, ..at(x, y) }
    }

    fn release(x: f32, y: f32) -> UiInput {
        UiInput { mouse_released: true, ..at(x, y) }
    }

    fn debug_checkbox(ctx: &mut Context, input: UiInput, value: &mut bool) -> (bool, FrameOutput) {
        let mut ui = ctx.frame(input, VIEW);
        let changed = ui.window("Debug", |ui| ui.checkbox("Draw Rect", value));
        (changed, ui.finish())
    }

    fn rect_count(ctx: &Context) -> usize {
        ctx.draw_list()
            .items()
            .iter()
            .filter(|i| matches!(i.cmd, DrawCmd::RoundedRect(_)))
            .count()
    }

    #[test]
    fn window_sizes_itself_to_its_content() {
        let mut ctx = Context::new();
        let mut v = true;
        debug_checkbox(&mut ctx, idle(), &mut v);

        // Checkbox row: 19 px box, 4 px gap, 9 glyphs at 6.5 px.
        let r = ctx.window_rect("Debug").unwrap();
        assert_eq!(r.origin, Vec2::new(60.0, 60.0));
        assert_eq!(r.size, Vec2::new(97.5, 54.0));
    }

    #[test]
    fn click_toggles_checkbox() {
        let mut ctx = Context::new();
        let mut v = true;
        debug_checkbox(&mut ctx, idle(), &mut v);

        let (changed, out) = debug_checkbox(&mut ctx, press(75.0, 95.0), &mut v);
        assert!(!changed);
        assert!(v);
        assert!(out.wants_mouse);

        let (changed, _) = debug_checkbox(&mut ctx, release(75.0, 95.0), &mut v);
        assert!(changed);
        assert!(!v);
    }

    #[test]
    fn release_outside_does_not_toggle() {
        let mut ctx = Context::new();
        let mut v = false;
        debug_checkbox(&mut ctx, idle(), &mut v);
        debug_checkbox(&mut ctx, press(75.0, 95.0), &mut v);
        let (changed, _) = debug_checkbox(&mut ctx, release(300.0, 300.0), &mut v);
        assert!(!changed);
        assert!(!v);
    }

    #[test]
    fn checked_box_draws_a_mark() {
        let mut ctx = Context::new();
        let mut v = false;
        debug_checkbox(&mut ctx, idle(), &mut v);
        let unchecked = rect_count(&ctx);

        v = true;
        debug_checkbox(&mut ctx, idle(), &mut v);
        assert_eq!(rect_count(&ctx), unchecked + 1);
    }

    #[test]
    fn no_text_without_a_font() {
        let mut ctx = Context::new();
        let mut v = false;
        debug_checkbox(&mut ctx, idle(), &mut v);
        assert!(ctx.draw_list().items().iter().all(|i| !matches!(i.cmd, DrawCmd::Text(_))));
    }

    #[test]
    fn title_bar_drags_the_window() {
        let mut ctx = Context::new();
        let mut v = false;
        debug_checkbox(&mut ctx, idle(), &mut v);

        debug_checkbox(&mut ctx, press(70.0, 65.0), &mut v);
        debug_checkbox(&mut ctx, hold(170.0, 165.0), &mut v);
        assert_eq!(ctx.window_rect("Debug").unwrap().origin, Vec2::new(160.0, 160.0));

        debug_checkbox(&mut ctx, release(170.0, 165.0), &mut v);
        debug_checkbox(&mut ctx, at(400.0, 400.0), &mut v);
        assert_eq!(ctx.window_rect("Debug").unwrap().origin, Vec2::new(160.0, 160.0));
        assert!(!v);
    }

    #[test]
    fn dragging_stops_at_the_viewport_edge() {
        let mut ctx = Context::new();
        let mut v = false;
        debug_checkbox(&mut ctx, idle(), &mut v);
        debug_checkbox(&mut ctx, press(70.0, 65.0), &mut v);
        debug_checkbox(&mut ctx, hold(-100.0, 2000.0), &mut v);

        let r = ctx.window_rect("Debug").unwrap();
        assert_eq!(r.origin, Vec2::new(0.0, 480.0 - r.size.y));
    }

    #[test]
    fn wants_mouse_only_over_windows() {
        let mut ctx = Context::new();
        let mut v = false;
        debug_checkbox(&mut ctx, idle(), &mut v);

        let (_, over) = debug_checkbox(&mut ctx, at(100.0, 100.0), &mut v);
        assert!(over.wants_mouse);
        let (_, away) = debug_checkbox(&mut ctx, at(500.0, 400.0), &mut v);
        assert!(!away.wants_mouse);
    }

    #[test]
    fn widgets_outside_a_window_go_to_debug() {
        let mut ctx = Context::new();
        let mut ui = ctx.frame(idle(), VIEW);
        ui.text("hello");
        ui.finish();
        assert!(ctx.window_rect(IMPLICIT_WINDOW).is_some());
    }

    #[test]
    fn pressing_a_window_raises_it() {
        let mut ctx = Context::new();
        let frame = |ctx: &mut Context, input| {
            let mut ui = ctx.frame(input, VIEW);
            ui.window("One", |ui| ui.text("first window"));
            ui.window("Two", |ui| ui.text("second window"));
            ui.finish();
        };
        frame(&mut ctx, idle());

        let one = Id::window("One");
        let two = Id::window("Two");
        assert!(ctx.window_z(two) > ctx.window_z(one));

        // "One" sits at (60, 60), "Two" at (80, 80); (65, 65) only hits "One".
        frame(&mut ctx, press(65.0, 65.0));
        assert!(ctx.window_z(one) > ctx.window_z(two));
    }

    #[test]
    fn clamp_keeps_windows_on_screen() {
        let size = Vec2::new(100.0, 50.0);
        assert_eq!(clamp_to_viewport(Vec2::new(-5.0, 10.0), size, VIEW), Vec2::new(0.0, 10.0));
        assert_eq!(clamp_to_viewport(Vec2::new(600.0, 470.0), size, VIEW), Vec2::new(540.0, 430.0));
        let huge = Vec2::new(1000.0, 1000.0);
        assert_eq!(clamp_to_viewport(Vec2::new(30.0, 30.0), huge, VIEW), Vec2::zero());
    }
}
