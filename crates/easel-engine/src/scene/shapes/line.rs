use crate::coords::Vec2;
use crate::scene::{DrawCmd, Rasterizer};

use super::ShapeRenderer;

impl<R: Rasterizer + ?Sized> ShapeRenderer<'_, R> {
    /// Segment from `from` to `to`, `stroke_weight` thick, in the stroke color.
    ///
    /// Draws nothing when the weight is zero.
    pub fn line(&mut self, from: Vec2, to: Vec2) {
        if !self.style.has_stroke() {
            return;
        }
        self.emit(DrawCmd::Line {
            from,
            to,
            thickness: self.style.weight(),
            color: self.style.stroke,
        });
    }

    /// Single pixel in the stroke color. A point has no interior, so no fill pass.
    pub fn point(&mut self, at: Vec2) {
        if !self.style.has_stroke() {
            return;
        }
        self.emit(DrawCmd::Pixel { at, color: self.style.stroke });
    }
}
