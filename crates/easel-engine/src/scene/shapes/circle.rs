use crate::coords::Vec2;
use crate::scene::{DrawCmd, Rasterizer};

use super::ShapeRenderer;

impl<R: Rasterizer + ?Sized> ShapeRenderer<'_, R> {
    /// Circle centered at `center`.
    pub fn circle(&mut self, center: Vec2, radius: f32) {
        if self.style.has_stroke() {
            self.emit(DrawCmd::Circle { center, radius, color: self.style.stroke });
        }
        let radius = radius - self.inset();
        self.emit(DrawCmd::Circle { center, radius, color: self.style.fill });
    }

    /// Ellipse centered at `center` with horizontal radius `width` and vertical
    /// radius `height`.
    pub fn ellipse(&mut self, center: Vec2, width: f32, height: f32) {
        if self.style.has_stroke() {
            self.emit(DrawCmd::Ellipse {
                center,
                radius_h: width,
                radius_v: height,
                color: self.style.stroke,
            });
        }
        let inset = self.inset();
        self.emit(DrawCmd::Ellipse {
            center,
            radius_h: width - inset,
            radius_v: height - inset,
            color: self.style.fill,
        });
    }
}
