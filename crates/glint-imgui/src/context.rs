use std::collections::HashMap;

use glint_engine::coords::{Rect, Vec2, Viewport};
use glint_engine::render::{DrawListRenderer, RenderCtx, RenderTarget};
use glint_engine::scene::{DrawList, ZIndex};
use glint_engine::text::{FontId, FontLoadError, FontSystem};

use crate::id::Id;
use crate::input::UiInput;
use crate::style::Style;
use crate::ui::Ui;

/// Draw layers reserved per window: background, title bar, widget frames,
/// widget text.
pub(crate) const LAYERS_PER_WINDOW: i32 = 4;

/// Where a window shows up the first time it is declared.
const FIRST_WINDOW_POS: Vec2 = Vec2::new(60.0, 60.0);
/// Offset between windows created in the same session.
const WINDOW_CASCADE: Vec2 = Vec2::new(20.0, 20.0);

#[derive(Debug, Copy, Clone)]
pub(crate) struct WindowState {
    pub pos: Vec2,
    /// Size measured when the window was last declared.
    pub size: Vec2,
    /// Frame in which the window was last declared.
    pub last_frame: u64,
}

impl WindowState {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.pos, self.size)
    }
}

/// GUI state that outlives a frame.
///
/// Windows are remembered by title: their position, measured size and
/// stacking order carry over, as does the widget currently held by the mouse.
/// Everything else is rebuilt by [`frame`](Self::frame) each redraw.
pub struct Context {
    pub style: Style,
    pub fonts: FontSystem,
    font: Option<FontId>,

    pub(crate) windows: HashMap<Id, WindowState>,
    /// Back to front.
    pub(crate) window_order: Vec<Id>,
    next_window_pos: Vec2,

    /// Widget (or title bar) captured by a mouse press.
    pub(crate) active: Option<Id>,
    /// Pointer offset from the window origin while dragging a title bar.
    pub(crate) drag_offset: Vec2,
    /// Topmost window under the pointer, from last frame's window rects.
    pub(crate) hovered_window: Option<Id>,

    pub(crate) draw_list: DrawList,
    pub(crate) frame_count: u64,
}

impl Context {
    pub fn new() -> Self {
        Self::with_style(Style::dark())
    }

    pub fn with_style(style: Style) -> Self {
        Self {
            style,
            fonts: FontSystem::new(),
            font: None,
            windows: HashMap::new(),
            window_order: Vec::new(),
            next_window_pos: FIRST_WINDOW_POS,
            active: None,
            drag_offset: Vec2::zero(),
            hovered_window: None,
            draw_list: DrawList::new(),
            frame_count: 0,
        }
    }

    /// Loads a font. The first font loaded becomes the GUI font.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let id = self.fonts.load_font(bytes)?;
        if self.font.is_none() {
            self.font = Some(id);
        }
        Ok(id)
    }

    pub fn set_font(&mut self, font: FontId) {
        self.font = Some(font);
    }

    #[inline]
    pub fn font(&self) -> Option<FontId> {
        self.font
    }

    /// Starts a frame. Declare windows and widgets on the returned [`Ui`],
    /// then call [`Ui::finish`].
    pub fn frame(&mut self, input: UiInput, viewport: Viewport) -> Ui<'_> {
        self.frame_count += 1;
        self.draw_list.clear();

        self.hovered_window = input.mouse_pos.and_then(|p| self.window_at(p));
        if input.mouse_pressed {
            if let Some(id) = self.hovered_window {
                self.bring_to_front(id);
            }
        }

        Ui::new(self, input, viewport)
    }

    /// Draws the last finished frame.
    pub fn paint(
        &mut self,
        renderer: &mut DrawListRenderer,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
    ) {
        renderer.render(ctx, target, &mut self.draw_list, &self.fonts);
    }

    /// Draw list of the last frame.
    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Screen rect of a window as of its last declaration.
    pub fn window_rect(&self, title: &str) -> Option<Rect> {
        self.windows.get(&Id::window(title)).map(WindowState::rect)
    }

    /// Width of `text` at the style's font size.
    ///
    /// Without a font the width is estimated at half an em per character, so
    /// layout stays stable whether or not a font could be loaded.
    pub(crate) fn text_width(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        match self.font {
            Some(font) => self.fonts.measure_text(text, font, self.style.font_size).x,
            None => text.chars().count() as f32 * self.style.font_size * 0.5,
        }
    }

    /// Registers `id` on first use and returns its state.
    pub(crate) fn ensure_window(&mut self, id: Id) -> WindowState {
        if let Some(state) = self.windows.get(&id) {
            return *state;
        }

        let state = WindowState {
            pos: self.next_window_pos,
            size: Vec2::zero(),
            last_frame: 0,
        };
        self.next_window_pos += WINDOW_CASCADE;
        self.windows.insert(id, state);
        self.window_order.push(id);
        state
    }

    /// Base draw layer of a window, higher for windows nearer the front.
    pub(crate) fn window_z(&self, id: Id) -> ZIndex {
        let slot = self
            .window_order
            .iter()
            .position(|w| *w == id)
            .unwrap_or(self.window_order.len());
        ZIndex::new(slot as i32 * LAYERS_PER_WINDOW)
    }

    #[inline]
    pub(crate) fn is_front_window(&self, id: Id) -> bool {
        self.window_order.last() == Some(&id)
    }

    fn bring_to_front(&mut self, id: Id) {
        if let Some(i) = self.window_order.iter().position(|w| *w == id) {
            let id = self.window_order.remove(i);
            self.window_order.push(id);
        }
    }

    /// Topmost window drawn last frame that contains `p`.
    fn window_at(&self, p: Vec2) -> Option<Id> {
        let last = self.frame_count.saturating_sub(1);
        self.window_order.iter().rev().copied().find(|id| {
            self.windows
                .get(id)
                .is_some_and(|w| w.last_frame == last && w.last_frame > 0 && w.rect().contains(p))
        })
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_font_bytes_leave_no_font() {
        let mut ctx = Context::new();
        assert!(ctx.load_font(b"not a font").is_err());
        assert_eq!(ctx.font(), None);
    }

    #[test]
    fn new_windows_cascade_and_stack_on_top() {
        let mut ctx = Context::new();
        let a = ctx.ensure_window(Id::window("A"));
        let b = ctx.ensure_window(Id::window("B"));

        assert_eq!(a.pos, FIRST_WINDOW_POS);
        assert_eq!(b.pos, FIRST_WINDOW_POS + WINDOW_CASCADE);
        assert!(ctx.is_front_window(Id::window("B")));
        assert_eq!(ctx.window_z(Id::window("A")), ZIndex::new(0));
        assert_eq!(ctx.window_z(Id::window("B")), ZIndex::new(LAYERS_PER_WINDOW));
    }

    #[test]
    fn known_windows_keep_their_state() {
        let mut ctx = Context::new();
        let id = Id::window("A");
        ctx.ensure_window(id);
        ctx.ensure_window(id);
        assert_eq!(ctx.window_order.len(), 1);
    }

    #[test]
    fn text_width_without_font_is_half_an_em_per_char() {
        let ctx = Context::new();
        assert_eq!(ctx.text_width(""), 0.0);
        assert_eq!(ctx.text_width("abcd"), 4.0 * 13.0 * 0.5);
    }
}
