/// Straight-alpha sRGB color, one byte per channel.
///
/// This is the color type sketches work with. Renderers convert it to premultiplied
/// `f32` at upload time, see [`Color::to_premul_f32`] and [`Color::to_linear_f32`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Opaque gray level.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::rgba(v, v, v, 255)
    }

    #[inline]
    pub const fn gray_alpha(v: u8, a: u8) -> Self {
        Self::rgba(v, v, v, a)
    }

    #[inline]
    pub const fn red(self) -> u8 {
        self.r
    }

    #[inline]
    pub const fn green(self) -> u8 {
        self.g
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.b
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        self.a
    }

    /// Linear interpolation between two colors, per channel.
    ///
    /// `amt` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, amt: f32) -> Color {
        let t = amt.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::rgba(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Straight-alpha `[r, g, b, a]` in `[0, 1]`, still sRGB encoded.
    #[inline]
    pub fn to_straight_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Premultiplied `[r, g, b, a]`, sRGB encoded.
    ///
    /// Suitable for non-sRGB render targets where values are written as-is.
    #[inline]
    pub fn to_premul_f32(self) -> [f32; 4] {
        let [r, g, b, a] = self.to_straight_f32();
        [r * a, g * a, b * a, a]
    }

    /// Premultiplied `[r, g, b, a]` in linear space.
    ///
    /// Suitable for sRGB render targets, which encode on write.
    #[inline]
    pub fn to_linear_f32(self) -> [f32; 4] {
        let [r, g, b, a] = self.to_straight_f32();
        [
            srgb_to_linear(r) * a,
            srgb_to_linear(g) * a,
            srgb_to_linear(b) * a,
            a,
        ]
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl From<u8> for Color {
    #[inline]
    fn from(v: u8) -> Self {
        Color::gray(v)
    }
}

impl From<(u8, u8)> for Color {
    #[inline]
    fn from((v, a): (u8, u8)) -> Self {
        Color::gray_alpha(v, a)
    }
}

impl From<(u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::rgba(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_is_opaque() {
        assert_eq!(Color::from(200), Color::rgba(200, 200, 200, 255));
    }

    #[test]
    fn tuple_conversions() {
        assert_eq!(Color::from((10, 20)), Color::rgba(10, 10, 10, 20));
        assert_eq!(Color::from((1, 2, 3)), Color::rgba(1, 2, 3, 255));
        assert_eq!(Color::from((1, 2, 3, 4)), Color::rgba(1, 2, 3, 4));
    }

    #[test]
    fn lerp_midpoint_includes_alpha() {
        let c = Color::rgba(0, 0, 0, 0).lerp(Color::rgba(200, 100, 50, 255), 0.5);
        assert_eq!(c, Color::rgba(100, 50, 25, 128));
    }

    #[test]
    fn lerp_clamps_amount() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn premul_scales_rgb_by_alpha() {
        let [r, g, b, a] = Color::rgba(255, 0, 255, 0).to_premul_f32();
        assert_eq!([r, g, b, a], [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn linear_keeps_endpoints() {
        let white = Color::WHITE.to_linear_f32();
        assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-5));
        assert_eq!(Color::BLACK.to_linear_f32(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn linear_darkens_mid_gray() {
        let [r, _, _, _] = Color::gray(128).to_linear_f32();
        assert!(r > 0.2 && r < 0.23);
    }
}
