use super::{DrawCmd, DrawList};

/// Sink for primitive draw commands.
///
/// A backend implements this to put pixels on screen; [`DrawList`] implements it by
/// recording, which is what the backend buffers per frame and what tests inspect.
pub trait Rasterizer {
    fn submit(&mut self, cmd: DrawCmd);
}

impl Rasterizer for DrawList {
    #[inline]
    fn submit(&mut self, cmd: DrawCmd) {
        self.push(cmd);
    }
}
