//! Time subsystem.
//!
//! - `FrameClock`: delta time, frame index and a smoothed frame rate
//! - `FramePacer`: deadline-based sleep that holds a target frame rate

mod frame_clock;
mod pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::FramePacer;
