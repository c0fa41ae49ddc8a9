//! Sketch-facing contracts and the frame loop.
//!
//! This module defines the interface between user sketches and whatever platform
//! backend drives them:
//! - [`Sketch`] / `InputHandler`: callbacks the runtime invokes
//! - [`Backend`]: what the runtime needs from a platform
//! - [`Runtime`]: the frame loop driver
//! - [`Graphics`]: the drawing context handed to `setup` and `draw`

mod app;
mod backend;
mod config;
mod ctx;
mod runtime;

pub use app::Sketch;
pub use backend::Backend;
pub use config::{SketchConfig, WindowConfig};
pub use ctx::{Graphics, SketchState};
pub use runtime::{Phase, Runtime};
