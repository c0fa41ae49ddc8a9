use anyhow::Result;

use crate::coords::{Vec2, Viewport};
use crate::input::InputPoll;
use crate::scene::Rasterizer;

use super::config::WindowConfig;

/// Everything the frame loop needs from a platform: window lifecycle, frame bracket,
/// raw input, and a rasterizer for primitive commands.
///
/// Implementations are driven from a single thread; the runtime never calls into a
/// backend concurrently.
pub trait Backend: InputPoll + Rasterizer {
    /// Opens the window and rendering context. Failure is fatal to the run.
    fn init(&mut self, config: &WindowConfig) -> Result<()>;

    /// True once the user or platform asked to quit.
    fn should_close(&mut self) -> bool;

    /// Releases the window and rendering context. Called exactly once after a run.
    fn close(&mut self);

    fn toggle_fullscreen(&mut self);

    /// Current canvas size in logical pixels.
    fn screen_size(&self) -> Viewport;

    fn begin_frame(&mut self);

    /// Presents the frame, waits for pacing, and polls new input.
    fn end_frame(&mut self) -> Result<()>;

    /// `0` removes the cap.
    fn set_target_frame_rate(&mut self, fps: u32);

    /// Measured frames per second.
    fn frame_rate(&self) -> f32;

    /// Seconds between the two most recent presented frames; `0` before the first.
    fn delta_time(&self) -> f32;

    fn set_cursor_visible(&mut self, visible: bool);

    /// Pointer position in logical pixels; last known position when outside the window.
    fn pointer_position(&self) -> Vec2;
}
