use glint_engine::coords::Vec2;
use glint_engine::input::{InputFrame, InputState, MouseButton};

/// Pointer state for one GUI frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct UiInput {
    /// Cursor position in logical pixels, `None` when outside the window.
    pub mouse_pos: Option<Vec2>,
    /// Primary button held.
    pub mouse_down: bool,
    /// Primary button went down this frame.
    pub mouse_pressed: bool,
    /// Primary button went up this frame.
    pub mouse_released: bool,
}

impl UiInput {
    pub fn from_engine(state: &InputState, frame: &InputFrame) -> Self {
        Self {
            mouse_pos: state.pointer_pos.map(|(x, y)| Vec2::new(x, y)),
            mouse_down: state.button_down(MouseButton::Left),
            mouse_pressed: frame.button_pressed(MouseButton::Left),
            mouse_released: frame.button_released(MouseButton::Left),
        }
    }
}
