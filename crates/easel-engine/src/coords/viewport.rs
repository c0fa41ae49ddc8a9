/// Canvas size in logical pixels.
///
/// The mesh renderer uploads this as its NDC conversion basis; the sketch API reports
/// it through `width()` / `height()`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Converts a physical drawable size into logical pixels.
    #[inline]
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self::new((width as f64 / scale) as f32, (height as f64 / scale) as f32)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_to_logical_divides_by_scale() {
        let v = Viewport::from_physical(1280, 720, 2.0);
        assert_eq!(v, Viewport::new(640.0, 360.0));
    }

    #[test]
    fn non_positive_scale_is_treated_as_one() {
        assert_eq!(Viewport::from_physical(10, 20, 0.0), Viewport::new(10.0, 20.0));
    }

    #[test]
    fn zero_area_is_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}
