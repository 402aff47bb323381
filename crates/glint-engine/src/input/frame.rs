use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyEvent, MouseButton};

/// Per-frame input deltas.
///
/// `InputState` holds what is currently down; `InputFrame` holds what happened
/// since the last frame. The runtime clears it after every redraw.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keyboard transitions in arrival order, auto-repeats included.
    pub key_events: Vec<KeyEvent>,

    /// Keys that went down this frame (repeats excluded).
    pub keys_pressed: HashSet<Key>,

    pub keys_released: HashSet<Key>,

    pub buttons_pressed: HashSet<MouseButton>,

    pub buttons_released: HashSet<MouseButton>,

    /// Accumulated wheel movement in lines.
    pub scroll: (f32, f32),
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.key_events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.scroll = (0.0, 0.0);
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    #[inline]
    pub fn button_pressed(&self, btn: MouseButton) -> bool {
        self.buttons_pressed.contains(&btn)
    }

    #[inline]
    pub fn button_released(&self, btn: MouseButton) -> bool {
        self.buttons_released.contains(&btn)
    }
}
