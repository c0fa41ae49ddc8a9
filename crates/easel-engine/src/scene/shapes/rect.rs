use crate::coords::Vec2;
use crate::scene::{DrawCmd, Rasterizer};

use super::ShapeRenderer;

impl<R: Rasterizer + ?Sized> ShapeRenderer<'_, R> {
    /// Rectangle anchored at its top-left corner.
    ///
    /// The fill pass is shifted by `+weight` on both axes so the inset is centered
    /// inside the outline.
    pub fn rect(&mut self, top_left: Vec2, width: f32, height: f32) {
        if self.style.has_stroke() {
            self.emit(DrawCmd::Rect { top_left, width, height, color: self.style.stroke });
        }
        let inset = self.inset();
        self.emit(DrawCmd::Rect {
            top_left: top_left + Vec2::splat(self.style.weight()),
            width: width - inset,
            height: height - inset,
            color: self.style.fill,
        });
    }

    pub fn square(&mut self, top_left: Vec2, extent: f32) {
        self.rect(top_left, extent, extent);
    }
}
