use crate::paint::Color;

/// Current fill/stroke style.
///
/// Defaults: opaque white fill, opaque black stroke, 1 px stroke weight.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StyleState {
    pub fill: Color,
    pub stroke: Color,
    /// Outline width in device pixels. `0` disables outlines, points and lines.
    pub stroke_weight: u32,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            stroke: Color::BLACK,
            stroke_weight: 1,
        }
    }
}

impl StyleState {
    pub fn set_fill(&mut self, color: impl Into<Color>) {
        self.fill = color.into();
    }

    /// Fill becomes fully transparent; shapes still emit their fill pass.
    pub fn no_fill(&mut self) {
        self.fill = Color::TRANSPARENT;
    }

    pub fn set_stroke(&mut self, color: impl Into<Color>) {
        self.stroke = color.into();
    }

    /// Disables outlines by zeroing the weight. The stroke color is kept.
    pub fn no_stroke(&mut self) {
        self.stroke_weight = 0;
    }

    pub fn set_stroke_weight(&mut self, weight: u32) {
        self.stroke_weight = weight;
    }

    #[inline]
    pub fn has_stroke(&self) -> bool {
        self.stroke_weight > 0
    }

    /// Stroke weight as a float, for geometry.
    #[inline]
    pub fn weight(&self) -> f32 {
        self.stroke_weight as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = StyleState::default();
        assert_eq!(s.fill, Color::WHITE);
        assert_eq!(s.stroke, Color::BLACK);
        assert!(s.has_stroke());
    }

    #[test]
    fn no_stroke_keeps_color() {
        let mut s = StyleState::default();
        s.set_stroke((255, 0, 0));
        s.no_stroke();
        assert_eq!(s.stroke_weight, 0);
        assert_eq!(s.stroke, Color::rgb(255, 0, 0));
        assert!(!s.has_stroke());
    }

    #[test]
    fn no_fill_is_transparent() {
        let mut s = StyleState::default();
        s.no_fill();
        assert_eq!(s.fill.alpha(), 0);
    }

    #[test]
    fn latest_write_wins() {
        let mut s = StyleState::default();
        s.set_fill(10);
        s.set_fill(200);
        assert_eq!(s.fill, Color::gray(200));
    }
}
