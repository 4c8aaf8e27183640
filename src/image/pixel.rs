//! Floating-point RGBA pixel.

use std::ops::{Add, AddAssign, Mul, MulAssign};

/// Linear RGBA pixel with unclamped `f64` channels.
///
/// Channels are nominally in `[0, 1]`, but nothing here clamps them; values
/// are only clamped when quantized for saving.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// All channels zero; the accumulator identity.
    pub const ZERO: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a pixel from four channels.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque pixel.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Opaque gray with every color channel set to `v`.
    pub const fn gray(v: f64) -> Self {
        Self::rgb(v, v, v)
    }

    /// Linear interpolation `(1 - t) * self + t * other`, per channel.
    #[inline]
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        (1.0 - t) * self + t * other
    }

    /// Returns true if every channel is finite.
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl Add for Rgba {
    type Output = Rgba;

    #[inline]
    fn add(self, rhs: Rgba) -> Rgba {
        Rgba::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl AddAssign for Rgba {
    #[inline]
    fn add_assign(&mut self, rhs: Rgba) {
        *self = *self + rhs;
    }
}

impl Mul<Rgba> for f64 {
    type Output = Rgba;

    #[inline]
    fn mul(self, c: Rgba) -> Rgba {
        Rgba::new(self * c.r, self * c.g, self * c.b, self * c.a)
    }
}

impl Mul<f64> for Rgba {
    type Output = Rgba;

    #[inline]
    fn mul(self, s: f64) -> Rgba {
        s * self
    }
}

impl MulAssign<f64> for Rgba {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        *self = s * *self;
    }
}

/// Quantizes a channel to 8 bits, rounding and clamping to `[0, 255]`.
#[inline]
pub fn quantize_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Quantizes a channel to 16 bits, rounding and clamping to `[0, 65535]`.
#[inline]
pub fn quantize_u16(v: f64) -> u16 {
    (v * 65535.0).round().clamp(0.0, 65535.0) as u16
}
