//! Draw stream types.
//!
//! Responsibilities:
//! - define the primitive command set a rasterizer must handle (`DrawCmd`)
//! - record commands in order (`DrawList`)
//! - turn style + shape requests into outline and fill passes (`shapes`)

mod cmd;
mod list;
mod raster;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use raster::Rasterizer;
pub use shapes::ShapeRenderer;
