use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use winit::keyboard::PhysicalKey;

use crate::coords::Vec2;
use crate::input::{InputPoll, Key, MouseButton};

/// Wheel pixels per line for touchpads that report pixel deltas.
pub(crate) const WHEEL_PIXELS_PER_LINE: f32 = 20.0;

/// Raw device state accumulated from window events.
///
/// A poll window runs from one [`begin_poll`](Self::begin_poll) to the next. Within
/// it, key presses queue up (repeats included), button press edges and wheel motion
/// accumulate, and the pointer delta is measured against the position at the start
/// of the window. Held sets always reflect the latest event.
///
/// Several physical keys can map to one [`Key`] (both Shifts, a digit and its
/// numpad twin), so a key stays held until every physical source is released.
#[derive(Debug, Default)]
pub(crate) struct DeviceInput {
    keys_held: HashMap<Key, HashSet<PhysicalKey>>,
    key_queue: VecDeque<Key>,

    buttons_held: BTreeSet<MouseButton>,
    button_edges: BTreeSet<MouseButton>,

    pointer: Vec2,
    poll_start: Vec2,
    has_pointer: bool,

    wheel: Vec2,
}

impl DeviceInput {
    /// Starts a new poll window. Unconsumed presses and deltas are dropped.
    pub(crate) fn begin_poll(&mut self) {
        self.key_queue.clear();
        self.button_edges.clear();
        self.wheel = Vec2::zero();
        self.poll_start = self.pointer;
    }

    pub(crate) fn key(&mut self, key: Key, source: PhysicalKey, pressed: bool) {
        if pressed {
            self.keys_held.entry(key).or_default().insert(source);
            self.key_queue.push_back(key);
        } else if let Some(sources) = self.keys_held.get_mut(&key) {
            sources.remove(&source);
            if sources.is_empty() {
                self.keys_held.remove(&key);
            }
        }
    }

    pub(crate) fn button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.buttons_held.insert(button);
            self.button_edges.insert(button);
        } else {
            self.buttons_held.remove(&button);
        }
    }

    /// Pointer position in logical pixels.
    pub(crate) fn pointer_moved(&mut self, at: Vec2) {
        if !self.has_pointer {
            // First sighting: no delta from the implicit origin.
            self.poll_start = at;
            self.has_pointer = true;
        }
        self.pointer = at;
    }

    pub(crate) fn wheel_lines(&mut self, lines: Vec2) {
        self.wheel = self.wheel + lines;
    }

    pub(crate) fn wheel_pixels(&mut self, pixels: Vec2) {
        self.wheel_lines(pixels / WHEEL_PIXELS_PER_LINE);
    }

    /// Releases everything held; the window no longer receives the matching releases.
    pub(crate) fn focus_lost(&mut self) {
        if !self.keys_held.is_empty() || !self.buttons_held.is_empty() {
            log::debug!("focus lost, releasing held keys and buttons");
        }
        self.keys_held.clear();
        self.buttons_held.clear();
    }

    pub(crate) fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub(crate) fn is_key_held(&self, key: Key) -> bool {
        self.keys_held.contains_key(&key)
    }
}

impl InputPoll for DeviceInput {
    fn pop_pressed_key(&mut self) -> Option<Key> {
        self.key_queue.pop_front()
    }

    fn is_key_up(&self, key: Key) -> bool {
        !self.is_key_held(key)
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.button_edges.contains(&button)
    }

    fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_held.contains(&button)
    }

    fn pointer_delta(&self) -> Vec2 {
        self.pointer - self.poll_start
    }

    fn wheel_delta(&self) -> Vec2 {
        self.wheel
    }
}
