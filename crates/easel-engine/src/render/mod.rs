//! GPU rendering of the draw stream.
//!
//! Two stages:
//! - [`MeshBuilder`] tessellates `DrawCmd`s on the CPU into one triangle list,
//!   applying the transform stack and tracking the clear color;
//! - [`MeshRenderer`] uploads that list and draws it in a single pass.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod mesh;
mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
pub use tessellate::{MeshBuilder, MeshVertex};
