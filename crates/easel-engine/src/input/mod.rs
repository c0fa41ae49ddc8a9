//! Input subsystem.
//!
//! Backends expose level state through [`InputPoll`]; [`InputSynth`] compares it
//! against the down sets it keeps between frames and calls [`InputHandler`] with
//! edge events. Nothing here depends on a windowing library.

mod handler;
mod poll;
mod synth;
mod types;

pub use handler::InputHandler;
pub use poll::InputPoll;
pub use synth::InputSynth;
pub use types::{Key, MouseButton};
