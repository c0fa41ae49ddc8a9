use crate::coords::Vec2;
use crate::paint::Color;

/// Rasterizer command stream.
///
/// Every variant is one primitive call; shapes with an outline expand into two
/// commands before they get here. Transform commands share the stream so ordering
/// against shapes is preserved.
///
/// Extending:
/// - add a variant here
/// - emit it from a shape under `scene::shapes::*` or from `Graphics`
/// - tessellate it in `render::tessellate`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Discard everything drawn so far this frame and fill the canvas with `color`.
    Clear(Color),

    Circle { center: Vec2, radius: f32, color: Color },

    /// Axis-aligned ellipse given by horizontal and vertical radii.
    Ellipse { center: Vec2, radius_h: f32, radius_v: f32, color: Color },

    Rect { top_left: Vec2, width: f32, height: f32, color: Color },

    Triangle { a: Vec2, b: Vec2, c: Vec2, color: Color },

    Pixel { at: Vec2, color: Color },

    Line { from: Vec2, to: Vec2, thickness: f32, color: Color },

    PushMatrix,
    PopMatrix,
    Translate(Vec2),
    Rotate(f32),
    Scale(Vec2),
}
