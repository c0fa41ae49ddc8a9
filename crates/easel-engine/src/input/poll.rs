use crate::coords::Vec2;

use super::types::{Key, MouseButton};

/// Level-polled device state, as exposed by a backend.
///
/// Everything here describes "right now" (or "since the last poll" for the key queue,
/// press edges and deltas). Turning it into edge events is the job of
/// [`InputSynth`](super::InputSynth).
pub trait InputPoll {
    /// Pops the next key pressed since the last poll, `None` once the queue is empty.
    ///
    /// Auto-repeat may enqueue the same key more than once before it is released.
    fn pop_pressed_key(&mut self) -> Option<Key>;

    /// True when `key` is not currently held.
    fn is_key_up(&self, key: Key) -> bool;

    /// True when `button` went down since the last poll.
    fn is_button_pressed(&self, button: MouseButton) -> bool;

    fn is_button_down(&self, button: MouseButton) -> bool;

    fn is_button_up(&self, button: MouseButton) -> bool {
        !self.is_button_down(button)
    }

    /// Pointer movement since the last poll, logical pixels.
    fn pointer_delta(&self) -> Vec2;

    /// Wheel movement since the last poll, in lines.
    fn wheel_delta(&self) -> Vec2;

    /// Buttons to scan, in the order events are synthesized.
    fn mouse_buttons(&self) -> &[MouseButton] {
        &MouseButton::ALL
    }
}
