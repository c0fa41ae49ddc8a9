//! GPU device and window surface.
//!
//! Creates the wgpu adapter, device and queue for a window, keeps the surface
//! configured across resizes, and hands out one [`GpuFrame`] per presented frame.

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;
