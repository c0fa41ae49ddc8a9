//! Desktop backend on winit and wgpu.
//!
//! The sketch loop owns control flow: each frame the backend renders, presents and
//! then pumps pending window events without blocking.

mod backend;
mod device_input;
mod host;
mod keymap;

pub use backend::WinitBackend;
