//! Stroked shape primitives.
//!
//! Each shape reads the current [`StyleState`] and emits up to two commands:
//!
//! 1. an outline pass at nominal geometry in the stroke color, when
//!    `stroke_weight > 0`;
//! 2. a fill pass of the same kind in the fill color, shrunk by `2 × weight` so it
//!    sits inside the outline.
//!
//! Lines and points only have the outline pass; triangles only have the fill pass.
//! Inset geometry is not clamped: a shape thinner than twice the weight produces a
//! negative size and the rasterizer gets it as-is.

mod circle;
mod line;
mod rect;
mod triangle;

use crate::style::StyleState;

use super::{DrawCmd, Rasterizer};

/// Applies a style to shape requests and forwards the resulting primitives.
///
/// Borrowed for the duration of one call from `Graphics`; cheap to construct.
pub struct ShapeRenderer<'a, R: Rasterizer + ?Sized> {
    style: &'a StyleState,
    raster: &'a mut R,
}

impl<'a, R: Rasterizer + ?Sized> ShapeRenderer<'a, R> {
    #[inline]
    pub fn new(style: &'a StyleState, raster: &'a mut R) -> Self {
        Self { style, raster }
    }

    /// Amount to shrink a radius or extent by: twice the stroke weight.
    #[inline]
    fn inset(&self) -> f32 {
        self.style.weight() * 2.0
    }

    #[inline]
    fn emit(&mut self, cmd: DrawCmd) {
        self.raster.submit(cmd);
    }
}
