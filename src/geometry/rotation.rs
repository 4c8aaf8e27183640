//! Axis rotations and roll/pitch/yaw composition.

use crate::geometry::linalg::Mat3;
use crate::util::math::deg_to_rad;
use crate::util::{PanoError, PanoResult};
use std::fmt;
use std::str::FromStr;

/// Rotation about the X axis; moves Y toward Z.
pub fn rot_x(r: f64) -> Mat3 {
    let (s, c) = r.sin_cos();
    Mat3::from_rows([1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c])
}

/// Rotation about the Y axis; moves X toward Z.
pub fn rot_y(r: f64) -> Mat3 {
    let (s, c) = r.sin_cos();
    Mat3::from_rows([c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c])
}

/// Rotation about the Z axis; moves X toward Y.
pub fn rot_z(r: f64) -> Mat3 {
    let (s, c) = r.sin_cos();
    Mat3::from_rows([c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0])
}

/// Principal axis of a single rotation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Roll, about X.
    Roll,
    /// Pitch, about Y.
    Pitch,
    /// Yaw, about Z.
    Yaw,
}

impl Axis {
    /// Rotation matrix for `angle_rad` about this axis.
    pub fn matrix(self, angle_rad: f64) -> Mat3 {
        match self {
            Axis::Roll => rot_x(angle_rad),
            Axis::Pitch => rot_y(angle_rad),
            Axis::Yaw => rot_z(angle_rad),
        }
    }

    /// Human-readable axis name.
    pub fn name(self) -> &'static str {
        match self {
            Axis::Roll => "Roll",
            Axis::Pitch => "Pitch",
            Axis::Yaw => "Yaw",
        }
    }

    fn from_symbol(symbol: char) -> PanoResult<Self> {
        match symbol.to_ascii_uppercase() {
            'R' => Ok(Axis::Roll),
            'P' => Ok(Axis::Pitch),
            'Y' => Ok(Axis::Yaw),
            _ => Err(PanoError::InvalidRotationOrder { symbol }),
        }
    }
}

/// Ordered sequence of axis rotations, e.g. `RPY` = roll, then pitch, then yaw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotationOrder {
    axes: Vec<Axis>,
}

impl Default for RotationOrder {
    fn default() -> Self {
        Self {
            axes: vec![Axis::Roll, Axis::Pitch, Axis::Yaw],
        }
    }
}

impl FromStr for RotationOrder {
    type Err = PanoError;

    /// Parses `R`, `P` and `Y` symbols case-insensitively. Any length and
    /// repetition is accepted; the empty string yields the identity.
    fn from_str(s: &str) -> PanoResult<Self> {
        let axes = s.chars().map(Axis::from_symbol).collect::<PanoResult<Vec<_>>>()?;
        Ok(Self { axes })
    }
}

impl fmt::Display for RotationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, axis) in self.axes.iter().enumerate() {
            if idx > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(axis.name())?;
        }
        Ok(())
    }
}

/// Outcome of composing a rotation from user angles.
#[derive(Clone, Debug, PartialEq)]
pub struct Composition {
    /// Combined rotation matrix.
    pub matrix: Mat3,
    /// Angles actually applied, in degrees, one per axis in the order.
    pub angles_deg: Vec<f64>,
    /// Number of axes that received no angle and defaulted to zero.
    pub defaulted: usize,
    /// Number of supplied angles beyond the order length, ignored.
    pub ignored: usize,
}

impl RotationOrder {
    /// Creates an order from an explicit axis list.
    pub fn new(axes: Vec<Axis>) -> Self {
        Self { axes }
    }

    /// Returns the axes in application order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Number of rotation steps.
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Returns true for the empty (identity) order.
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Composes the rotation for `angles_deg`, one angle per axis.
    ///
    /// Missing angles are treated as zero and surplus angles are dropped; both
    /// are counted in the returned [`Composition`] so callers can warn.
    pub fn compose(&self, angles_deg: &[f64]) -> Composition {
        let mut applied = Vec::with_capacity(self.axes.len());
        let mut matrix = Mat3::identity();
        for (idx, axis) in self.axes.iter().enumerate() {
            let angle = angles_deg.get(idx).copied().unwrap_or(0.0);
            applied.push(angle);
            matrix = matrix * axis.matrix(deg_to_rad(angle));
        }
        Composition {
            matrix,
            angles_deg: applied,
            defaulted: self.axes.len().saturating_sub(angles_deg.len()),
            ignored: angles_deg.len().saturating_sub(self.axes.len()),
        }
    }
}
