//! Gradient quad moved around clip space with W/A/S/D.

use glint_engine::input::{Key, KeyEvent};
use glint_engine::render::{ColoredVertex, CornerColors, corner_quad};
use glint_imgui::Ui;

/// Distance moved per key event, in clip-space units.
pub const STEP: f32 = 0.01;
/// Side length of the quad, in clip-space units.
pub const SIDE: f32 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct QuadDemo {
    /// `[x1, y1, x2, y2]` in clip space.
    pub rect: [f32; 4],
    pub colors: CornerColors,
    pub draw_rect: bool,
}

impl Default for QuadDemo {
    fn default() -> Self {
        Self {
            rect: [0.5, 0.5, 1.0, 1.0],
            colors: CornerColors::default(),
            draw_rect: true,
        }
    }
}

impl QuadDemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the quad one step. The leading edge stops at the clip-space
    /// border and the opposite edge follows at [`SIDE`].
    pub fn handle_key(&mut self, key: Key) {
        let [x1, y1, x2, y2] = &mut self.rect;
        match key {
            Key::W => {
                *y2 = (*y2 + STEP).min(1.0);
                *y1 = *y2 - SIDE;
            }
            Key::S => {
                *y1 = (*y1 - STEP).max(-1.0);
                *y2 = *y1 + SIDE;
            }
            Key::D => {
                *x2 = (*x2 + STEP).min(1.0);
                *x1 = *x2 - SIDE;
            }
            Key::A => {
                *x1 = (*x1 - STEP).max(-1.0);
                *x2 = *x1 + SIDE;
            }
            _ => {}
        }
    }

    /// Applies this frame's key events in order. Every event moves the quad,
    /// so a tap steps twice (press and release) and a held key also steps on
    /// each auto-repeat.
    pub fn apply_keys(&mut self, events: &[KeyEvent]) {
        for ev in events {
            self.handle_key(ev.key);
        }
    }

    pub fn vertices(&self) -> [ColoredVertex; 4] {
        corner_quad(self.rect, &self.colors)
    }

    pub fn ui(&mut self, ui: &mut Ui<'_>) {
        ui.window("Debug", |ui| {
            ui.checkbox("Draw Rect", &mut self.draw_rect);
        });
    }
}

#[cfg(test)]
mod tests {
    use glint_engine::input::KeyState;

    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_rect(actual: [f32; 4], expected: [f32; 4]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() <= EPS, "{actual:?} != {expected:?}");
        }
    }

    fn press(key: Key, repeat: bool) -> KeyEvent {
        KeyEvent { key, state: KeyState::Pressed, repeat }
    }

    #[test]
    fn starts_in_the_upper_right_corner() {
        let d = QuadDemo::new();
        assert_eq!(d.rect, [0.5, 0.5, 1.0, 1.0]);
        assert!(d.draw_rect);
    }

    #[test]
    fn w_and_d_are_pinned_at_the_border() {
        let mut d = QuadDemo::new();
        d.handle_key(Key::W);
        d.handle_key(Key::D);
        assert_rect(d.rect, [0.5, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn s_moves_down_one_step() {
        let mut d = QuadDemo::new();
        d.handle_key(Key::S);
        assert_rect(d.rect, [0.5, 0.49, 1.0, 0.99]);
    }

    #[test]
    fn a_moves_left_one_step() {
        let mut d = QuadDemo::new();
        d.handle_key(Key::A);
        assert_rect(d.rect, [0.49, 0.5, 0.99, 1.0]);
    }

    #[test]
    fn reverse_key_undoes_a_step() {
        let mut d = QuadDemo::new();
        d.handle_key(Key::S);
        d.handle_key(Key::W);
        assert_rect(d.rect, [0.5, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn left_and_bottom_edges_stop_at_minus_one() {
        let mut d = QuadDemo::new();
        for _ in 0..500 {
            d.handle_key(Key::A);
            d.handle_key(Key::S);
        }
        assert_rect(d.rect, [-1.0, -1.0, -0.5, -0.5]);
    }

    #[test]
    fn side_length_is_preserved() {
        let mut d = QuadDemo::new();
        for key in [Key::A, Key::A, Key::S, Key::W, Key::D, Key::S, Key::A] {
            d.handle_key(key);
            let [x1, y1, x2, y2] = d.rect;
            assert!((x2 - x1 - SIDE).abs() <= EPS);
            assert!((y2 - y1 - SIDE).abs() <= EPS);
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut d = QuadDemo::new();
        d.handle_key(Key::Q);
        d.handle_key(Key::Space);
        assert_eq!(d.rect, [0.5, 0.5, 1.0, 1.0]);
    }

    fn release(key: Key) -> KeyEvent {
        KeyEvent { key, state: KeyState::Released, repeat: false }
    }

    #[test]
    fn a_tap_moves_on_press_and_on_release() {
        let mut d = QuadDemo::new();
        d.apply_keys(&[press(Key::A, false), release(Key::A)]);
        assert_rect(d.rect, [0.5 - 2.0 * STEP, 0.5, 1.0 - 2.0 * STEP, 1.0]);
    }

    #[test]
    fn held_key_steps_on_every_repeat() {
        let mut d = QuadDemo::new();
        d.apply_keys(&[press(Key::S, false), press(Key::S, true), press(Key::S, true), release(Key::S)]);
        assert_rect(d.rect, [0.5, 0.46, 1.0, 0.96]);
    }

    #[test]
    fn release_alone_still_steps() {
        let mut d = QuadDemo::new();
        d.apply_keys(&[release(Key::A)]);
        assert_rect(d.rect, [0.49, 0.5, 0.99, 1.0]);
    }

    #[test]
    fn vertices_follow_the_rect() {
        let mut d = QuadDemo::new();
        d.handle_key(Key::S);
        let v = d.vertices();
        assert_eq!(v[0].pos[..2], [d.rect[0], d.rect[1]]);
        assert_eq!(v[2].pos[..2], [d.rect[2], d.rect[3]]);
        assert_eq!(v[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(v[3].color, [1.0, 1.0, 0.0, 1.0]);
    }
}
