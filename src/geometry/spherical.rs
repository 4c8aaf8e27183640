//! Conversions between unit direction vectors and latitude/longitude.

use crate::geometry::linalg::Vec3;
use crate::util::math::TAU;

/// Tolerance used by `LatLong` equality.
const LATLONG_EPS: f64 = 1e-6;

/// A point on the sphere in radians.
///
/// `lat` lies in `[-pi/2, pi/2]`; `long` lies in `[0, 2pi)` when produced by
/// [`to_spherical`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

impl LatLong {
    /// Creates a coordinate from latitude and longitude in radians.
    pub const fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

impl PartialEq for LatLong {
    fn eq(&self, other: &Self) -> bool {
        (self.lat - other.lat).abs() < LATLONG_EPS && (self.long - other.long).abs() < LATLONG_EPS
    }
}

/// Converts a spherical coordinate to a unit direction vector.
#[inline]
pub fn to_vector(ll: LatLong) -> Vec3 {
    let (sin_lat, cos_lat) = ll.lat.sin_cos();
    let (sin_long, cos_long) = ll.long.sin_cos();
    Vec3::new(cos_long * cos_lat, sin_long * cos_lat, sin_lat)
}

/// Converts a direction vector to a spherical coordinate.
///
/// `v.z` must already lie in `[-1, 1]`; it is not clamped, so a vector that
/// drifted off the unit sphere yields a NaN latitude.
#[inline]
pub fn to_spherical(v: Vec3) -> LatLong {
    let mut long = v.y.atan2(v.x);
    while long < 0.0 {
        long += TAU;
    }
    LatLong {
        lat: v.z.asin(),
        long,
    }
}

#[cfg(test)]
mod tests {
    use super::{to_spherical, to_vector, LatLong};
    use crate::geometry::linalg::Vec3;
    use std::f64::consts::PI;

    #[test]
    fn longitude_is_normalized_into_full_turn() {
        let ll = to_spherical(Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(ll, LatLong::new(0.0, 1.5 * PI));
        assert!(ll.long >= 0.0 && ll.long < 2.0 * PI);
    }

    #[test]
    fn round_trip_through_vector() {
        let ll = LatLong::new(0.3, 4.0);
        let v = to_vector(ll);
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert_eq!(to_spherical(v), ll);
    }

    #[test]
    fn equality_uses_tolerance() {
        let a = LatLong::new(0.1, 0.2);
        assert_eq!(a, LatLong::new(0.1 + 5e-7, 0.2 - 5e-7));
        assert_ne!(a, LatLong::new(0.1 + 2e-6, 0.2));
    }
}
