//! Paint model shared between the sketch API and the renderer.
//!
//! Sketches speak straight-alpha sRGB bytes. Vertices carry them as straight floats;
//! the mesh shader linearizes and premultiplies.

pub mod color;

pub use color::Color;
