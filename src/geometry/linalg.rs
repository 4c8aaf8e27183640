//! Minimal 3-vector and 3x3 matrix types for sphere rotations.

use std::ops::Mul;

/// A 3D vector; a direction on the unit sphere when built from `LatLong`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Dot product.
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

/// Row-major 3x3 matrix.
///
/// Used as a rotation. Orthonormality is assumed by the remap engine but
/// never checked; a skewed matrix distorts the output silently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    m: [f64; 9],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat3 {
    /// Creates a matrix from nine row-major entries.
    pub const fn from_rows(m: [f64; 9]) -> Self {
        Self { m }
    }

    /// The zero matrix.
    pub const fn zeros() -> Self {
        Self { m: [0.0; 9] }
    }

    /// The identity matrix.
    pub const fn identity() -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Returns the entry at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.m[3 * row + col]
    }

    /// Returns the row-major entries.
    pub fn as_array(&self) -> &[f64; 9] {
        &self.m
    }

    /// Transpose; the inverse of an orthonormal rotation.
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self {
            m: [m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]],
        }
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3 {
            x: v.x * m[0] + v.y * m[1] + v.z * m[2],
            y: v.x * m[3] + v.y * m[4] + v.z * m[5],
            z: v.x * m[6] + v.y * m[7] + v.z * m[8],
        }
    }
}

impl Mul<Vec3> for &Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        *self * v
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut out = Mat3::zeros();
        for r in 0..3 {
            for c in 0..3 {
                out.m[3 * r + c] = (0..3).map(|i| self.m[3 * r + i] * rhs.m[3 * i + c]).sum();
            }
        }
        out
    }
}
