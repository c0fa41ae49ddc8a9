/// What the backend should do after failing to acquire a surface texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame can render.
    Reconfigured,
    /// Transient; drop this frame's drawing.
    SkipFrame,
    /// Out of memory. The sketch cannot continue.
    Fatal,
}
