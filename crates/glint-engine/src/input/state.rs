use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, MouseButton, MouseButtonState, MouseWheelDelta};

/// Pixels per wheel line when converting touchpad deltas.
const PIXELS_PER_LINE: f32 = 20.0;

/// Current input state of the window.
///
/// Per-frame transitions are recorded into an [`InputFrame`].
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,

    /// Pointer position in logical pixels, `None` when outside the window.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,

    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an event to the held state and records deltas into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are never delivered to an unfocused window.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key(k) => {
                frame.key_events.push(*k);
                match k.state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(k.key) {
                            frame.keys_pressed.insert(k.key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(&k.key) {
                            frame.keys_released.insert(k.key);
                        }
                    }
                }
            }

            InputEvent::PointerButton { button, state } => match state {
                MouseButtonState::Pressed => {
                    if self.buttons_down.insert(*button) {
                        frame.buttons_pressed.insert(*button);
                    }
                }
                MouseButtonState::Released => {
                    if self.buttons_down.remove(button) {
                        frame.buttons_released.insert(*button);
                    }
                }
            },

            InputEvent::MouseWheel(delta) => {
                let (dx, dy) = match *delta {
                    MouseWheelDelta::Line { x, y } => (x, y),
                    MouseWheelDelta::Pixel { x, y } => (x / PIXELS_PER_LINE, y / PIXELS_PER_LINE),
                };
                frame.scroll.0 += dx;
                frame.scroll.1 += dy;
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyEvent;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key(KeyEvent { key, state, repeat })
    }

    #[test]
    fn repeats_are_recorded_but_not_pressed_twice() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed, true));
        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed, true));

        assert_eq!(frame.key_events.len(), 3);
        assert!(frame.key_pressed(Key::W));
        assert_eq!(frame.keys_pressed.len(), 1);
        assert!(state.key_down(Key::W));
    }

    #[test]
    fn release_clears_down_state() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::A, KeyState::Pressed, false));
        frame.clear();
        state.apply_event(&mut frame, key(Key::A, KeyState::Released, false));

        assert!(!state.key_down(Key::A));
        assert!(frame.keys_released.contains(&Key::A));
        assert!(!frame.key_pressed(Key::A));
    }

    #[test]
    fn button_transitions() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        let press = InputEvent::PointerButton {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
        };
        let release = InputEvent::PointerButton {
            button: MouseButton::Left,
            state: MouseButtonState::Released,
        };

        state.apply_event(&mut frame, press);
        assert!(frame.button_pressed(MouseButton::Left));
        assert!(state.button_down(MouseButton::Left));

        state.apply_event(&mut frame, release);
        assert!(frame.button_released(MouseButton::Left));
        assert!(!state.button_down(MouseButton::Left));
    }

    #[test]
    fn focus_loss_drops_held_input() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::D, KeyState::Pressed, false));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn pixel_scroll_is_converted_to_lines() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 1.0 }));
        state.apply_event(&mut frame, InputEvent::MouseWheel(MouseWheelDelta::Pixel { x: 0.0, y: 40.0 }));

        assert_eq!(frame.scroll, (0.0, 3.0));
    }

    #[test]
    fn pointer_tracking() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 3.0, y: 4.0 });
        assert_eq!(state.pointer_pos, Some((3.0, 4.0)));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }
}
