use super::Vec2;

/// 2D affine transform.
///
/// Layout follows the column-major 2x3 convention:
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// ```
///
/// Rotation is clockwise on screen for positive angles because +Y points down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine2 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Affine2 {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, tx: 0.0, ty: 0.0 };

    #[inline]
    pub const fn translation(v: Vec2) -> Self {
        Self { tx: v.x, ty: v.y, ..Self::IDENTITY }
    }

    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self { a: c, b: s, c: -s, d: c, tx: 0.0, ty: 0.0 }
    }

    #[inline]
    pub const fn scaling(v: Vec2) -> Self {
        Self { a: v.x, d: v.y, ..Self::IDENTITY }
    }

    /// Returns `self ∘ rhs`: the result applies `rhs` first, then `self`.
    #[inline]
    pub fn then_local(self, rhs: Affine2) -> Affine2 {
        Affine2 {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            tx: self.a * rhs.tx + self.c * rhs.ty + self.tx,
            ty: self.b * rhs.tx + self.d * rhs.ty + self.ty,
        }
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vec2::new(3.0, -7.0);
        assert_eq!(Affine2::IDENTITY.apply(p), p);
    }

    #[test]
    fn translate_then_rotate_rotates_about_translated_origin() {
        // translate(10, 0) followed by rotate(90°): local +X maps to screen +Y.
        let m = Affine2::translation(Vec2::new(10.0, 0.0))
            .then_local(Affine2::rotation(core::f32::consts::FRAC_PI_2));
        assert!(approx(m.apply(Vec2::new(1.0, 0.0)), Vec2::new(10.0, 1.0)));
    }

    #[test]
    fn scale_applies_before_translation() {
        let m = Affine2::translation(Vec2::new(5.0, 5.0))
            .then_local(Affine2::scaling(Vec2::new(2.0, 3.0)));
        assert_eq!(m.apply(Vec2::new(1.0, 1.0)), Vec2::new(7.0, 8.0));
    }
}
