//! State and shared plumbing of the three tutorial programs.
//!
//! The binaries under `src/bin` only wire these pieces to the runtime, so
//! everything that reacts to input can be tested without a window.

pub mod fonts;
pub mod overlay;
pub mod quad_demo;
pub mod sdf_demo;

use glint_engine::device::GpuInit;
use glint_engine::input::{InputFrame, Key};
use glint_engine::paint::Color;

/// Background of every demo window.
pub const CLEAR_COLOR: Color = Color::from_premul(0.3, 0.3, 0.3, 1.0);

/// GPU setup shared by the demos.
///
/// Colors are written to the surface as-is, so a linear surface format is
/// preferred.
pub fn gpu_init() -> GpuInit {
    GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    }
}

/// ESC closes every demo.
#[inline]
pub fn exit_requested(input: &InputFrame) -> bool {
    input.key_pressed(Key::Escape)
}

#[cfg(test)]
mod tests {
    use glint_engine::input::{InputEvent, InputState, KeyEvent, KeyState};

    use super::*;

    #[test]
    fn escape_press_requests_exit() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        assert!(!exit_requested(&frame));

        let esc = KeyEvent { key: Key::Escape, state: KeyState::Pressed, repeat: false };
        state.apply_event(&mut frame, InputEvent::Key(esc));
        assert!(exit_requested(&frame));
    }

    #[test]
    fn demos_render_to_a_linear_surface() {
        assert!(!gpu_init().prefer_srgb);
    }
}
