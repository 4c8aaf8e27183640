//! Scalar helpers shared by the geometry and remap modules.

use std::f64::consts::PI;

/// Full turn in radians.
pub(crate) const TAU: f64 = 2.0 * PI;

/// Converts degrees to radians.
pub fn deg_to_rad(angle_deg: f64) -> f64 {
    PI / 180.0 * angle_deg
}

/// Converts radians to degrees.
pub fn rad_to_deg(angle_rad: f64) -> f64 {
    180.0 / PI * angle_rad
}

/// Longitude of column `xf` in an equirectangular grid of `width` columns.
#[inline]
pub(crate) fn column_longitude(xf: f64, width: usize) -> f64 {
    xf / (width as f64 - 1.0) * TAU
}

/// Latitude of row `yf` in an equirectangular grid of `height` rows.
#[inline]
pub(crate) fn row_latitude(yf: f64, height: usize) -> f64 {
    PI / 2.0 - yf / (height as f64 - 1.0) * PI
}

#[cfg(test)]
mod tests {
    use super::{column_longitude, deg_to_rad, rad_to_deg, row_latitude, TAU};
    use std::f64::consts::PI;

    #[test]
    fn deg_to_rad_matches_pi() {
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-12);
        assert!((rad_to_deg(PI / 2.0) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn grid_edges_span_the_sphere() {
        assert_eq!(column_longitude(0.0, 9), 0.0);
        assert!((column_longitude(8.0, 9) - TAU).abs() < 1e-12);
        assert!((row_latitude(0.0, 5) - PI / 2.0).abs() < 1e-12);
        assert!((row_latitude(2.0, 5)).abs() < 1e-12);
        assert!((row_latitude(4.0, 5) + PI / 2.0).abs() < 1e-12);
    }
}
