use anyhow::Result;

use crate::input::InputHandler;

use super::ctx::Graphics;

/// Sketch contract implemented by user code.
///
/// Input callbacks come from the [`InputHandler`] supertrait. Everything has a no-op
/// default, so the smallest sketch is an empty `impl` pair.
///
/// Errors returned from `setup` or `draw` stop the loop and are returned from
/// [`run`](crate::run) as-is; the runtime does not retry.
pub trait Sketch: InputHandler {
    /// Called once, before the first frame.
    fn setup(&mut self, g: &mut Graphics<'_>) -> Result<()> {
        let _ = g;
        Ok(())
    }

    /// Called once per frame between begin-frame and end-frame, after input events.
    fn draw(&mut self, g: &mut Graphics<'_>) -> Result<()> {
        let _ = g;
        Ok(())
    }
}
