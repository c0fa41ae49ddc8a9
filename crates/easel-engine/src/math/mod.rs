//! Scalar helpers for sketches: range mapping, clamping, distances, angle units,
//! a seedable random source and 2D simplex noise.

mod calc;
mod noise;
mod random;

pub use calc::{constrain, degrees, dist, lerp, mag, map, norm, radians, sq};
pub use noise::Noise;
pub use random::Random;

pub const QUARTER_PI: f32 = core::f32::consts::FRAC_PI_4;
pub const HALF_PI: f32 = core::f32::consts::FRAC_PI_2;
pub const PI: f32 = core::f32::consts::PI;
pub const TWO_PI: f32 = core::f32::consts::TAU;
pub const TAU: f32 = core::f32::consts::TAU;
