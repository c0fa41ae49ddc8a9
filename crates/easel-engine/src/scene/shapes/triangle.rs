use crate::coords::Vec2;
use crate::scene::{DrawCmd, Rasterizer};

use super::ShapeRenderer;

impl<R: Rasterizer + ?Sized> ShapeRenderer<'_, R> {
    /// Filled triangle. Never outlined, whatever the stroke weight.
    pub fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        self.emit(DrawCmd::Triangle { a, b, c, color: self.style.fill });
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::Vec2;
    use crate::scene::{DrawCmd, DrawList, ShapeRenderer};
    use crate::style::StyleState;

    #[test]
    fn triangle_ignores_stroke() {
        let mut s = StyleState::default();
        s.set_stroke_weight(8);
        let (a, b, c) = (Vec2::zero(), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0));

        let mut list = DrawList::new();
        ShapeRenderer::new(&s, &mut list).triangle(a, b, c);

        assert_eq!(list.items(), &[DrawCmd::Triangle { a, b, c, color: s.fill }]);
    }
}
