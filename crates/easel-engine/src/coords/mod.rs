//! Coordinate and geometry types shared by the sketch API and the renderer.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! The mesh renderer converts to NDC in its vertex shader using a viewport uniform.

mod transform;
mod vec2;
mod viewport;

pub use transform::Affine2;
pub use vec2::Vec2;
pub use viewport::Viewport;
