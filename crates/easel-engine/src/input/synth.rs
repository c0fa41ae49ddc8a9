use std::collections::BTreeSet;

use super::handler::InputHandler;
use super::poll::InputPoll;
use super::types::{Key, MouseButton};

/// Turns level-polled device state into edge-triggered callbacks.
///
/// Holds the down sets that persist between frames. Call [`synthesize`](Self::synthesize)
/// exactly once per frame; there is no event queue, anything the backend reports is
/// consumed in that pass.
///
/// The sets are ordered so that releases found in the same frame are reported in a
/// stable order.
#[derive(Debug, Default)]
pub struct InputSynth {
    keys_down: BTreeSet<Key>,
    buttons_down: BTreeSet<MouseButton>,
}

impl InputSynth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one frame of synthesis: keyboard, then mouse buttons, then wheel.
    pub fn synthesize<P, H>(&mut self, poll: &mut P, handler: &mut H)
    where
        P: InputPoll + ?Sized,
        H: InputHandler + ?Sized,
    {
        self.synthesize_keys(poll, handler);
        self.synthesize_buttons(poll, handler);
        synthesize_wheel(poll, handler);
    }

    fn synthesize_keys<P, H>(&mut self, poll: &mut P, handler: &mut H)
    where
        P: InputPoll + ?Sized,
        H: InputHandler + ?Sized,
    {
        // Repeats of a held key are forwarded; the set insert is then a no-op.
        while let Some(key) = poll.pop_pressed_key() {
            self.keys_down.insert(key);
            log::trace!("key_pressed({key})");
            handler.key_pressed(key);
        }

        let released: Vec<Key> = self
            .keys_down
            .iter()
            .copied()
            .filter(|&key| poll.is_key_up(key))
            .collect();

        for key in released {
            self.keys_down.remove(&key);
            log::trace!("key_released({key})");
            handler.key_released(key);
        }
    }

    fn synthesize_buttons<P, H>(&mut self, poll: &P, handler: &mut H)
    where
        P: InputPoll + ?Sized,
        H: InputHandler + ?Sized,
    {
        let delta = poll.pointer_delta();
        let moved = !delta.is_zero();

        for &button in poll.mouse_buttons() {
            if poll.is_button_pressed(button) {
                log::trace!("mouse_clicked({button})");
                handler.mouse_clicked(button);
            }

            let down = poll.is_button_down(button);

            if down && moved {
                log::trace!("mouse_dragged({button}, {delta:?})");
                handler.mouse_dragged(button, delta);
            }

            if down {
                log::trace!("mouse_pressed({button})");
                handler.mouse_pressed(button);
                self.buttons_down.insert(button);
            }

            if poll.is_button_up(button) && self.buttons_down.remove(&button) {
                log::trace!("mouse_released({button})");
                handler.mouse_released(button);
            }
        }

        if self.buttons_down.is_empty() && moved {
            log::trace!("mouse_moved({delta:?})");
            handler.mouse_moved(delta);
        }
    }

    /// True while `key` is in the down set (pressed and not yet released).
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// True while `button` is in the down set.
    pub fn is_button_held(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn keys_down(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys_down.iter().copied()
    }
}

fn synthesize_wheel<P, H>(poll: &P, handler: &mut H)
where
    P: InputPoll + ?Sized,
    H: InputHandler + ?Sized,
{
    let wheel = poll.wheel_delta();
    if !wheel.is_zero() {
        log::trace!("mouse_wheel({wheel:?})");
        handler.mouse_wheel(wheel);
    }
}
