use crate::coords::Vec2;

use super::types::{Key, MouseButton};

/// Edge-triggered input callbacks.
///
/// Every method defaults to a no-op; implement the ones a sketch cares about.
/// Events arrive once per frame, before `draw`, in this order: key presses, key
/// releases, then per button click / drag / press / release, then move, then wheel.
pub trait InputHandler {
    /// A key was dequeued from the backend's press queue. Auto-repeat calls this again.
    fn key_pressed(&mut self, key: Key) {
        let _ = key;
    }

    fn key_released(&mut self, key: Key) {
        let _ = key;
    }

    /// The button went down this frame.
    fn mouse_clicked(&mut self, button: MouseButton) {
        let _ = button;
    }

    /// The pointer moved while `button` was held.
    fn mouse_dragged(&mut self, button: MouseButton, delta: Vec2) {
        let _ = (button, delta);
    }

    /// The pointer moved with no button held.
    fn mouse_moved(&mut self, delta: Vec2) {
        let _ = delta;
    }

    /// Called every frame the button is held, not only on the first.
    fn mouse_pressed(&mut self, button: MouseButton) {
        let _ = button;
    }

    fn mouse_released(&mut self, button: MouseButton) {
        let _ = button;
    }

    fn mouse_wheel(&mut self, delta: Vec2) {
        let _ = delta;
    }
}
