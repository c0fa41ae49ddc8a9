//! Easel engine crate.
//!
//! A small immediate-mode sketching runtime: a frame loop that turns polled device
//! state into input callbacks, a style state with stroked shape primitives, and a
//! winit/wgpu backend that tessellates and presents each frame.
//!
//! ```rust,ignore
//! use easel_engine::prelude::*;
//!
//! struct Dot;
//! impl InputHandler for Dot {}
//! impl Sketch for Dot {
//!     fn draw(&mut self, g: &mut Graphics<'_>) -> anyhow::Result<()> {
//!         g.background(30);
//!         let (x, y) = (g.mouse_x(), g.mouse_y());
//!         g.circle(x, y, 12.0);
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     easel_engine::run(SketchConfig::new().title("dot"), Dot)
//! }
//! ```

pub mod core;
pub mod coords;
pub mod device;
pub mod input;
pub mod logging;
pub mod math;
pub mod paint;
pub mod render;
pub mod scene;
pub mod style;
pub mod time;
pub mod window;

use anyhow::Result;

use crate::core::{Runtime, Sketch, SketchConfig};
use crate::window::WinitBackend;

/// Opens a window and runs `sketch` until it closes.
///
/// Initializes logging from `config.logging` (first call wins). Blocks the calling
/// thread, which must be the main thread.
pub fn run<S: Sketch>(config: SketchConfig, mut sketch: S) -> Result<()> {
    logging::init_logging(config.logging.clone());

    let backend = WinitBackend::new(config.gpu.clone());
    Runtime::new(backend, config).run(&mut sketch)
}

/// Everything a typical sketch needs.
pub mod prelude {
    pub use crate::core::{Graphics, Sketch, SketchConfig};
    pub use crate::coords::Vec2;
    pub use crate::input::{InputHandler, Key, MouseButton};
    pub use crate::math::*;
    pub use crate::paint::Color;
}
