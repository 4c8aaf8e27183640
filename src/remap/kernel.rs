//! Per-pixel shading for the three remap modes.
//!
//! Each kernel answers one question: given destination pixel `(x, y)`, what
//! value does it receive? Kernels only read shared state, so the row drivers
//! may evaluate pixels in any order or on any thread.

use crate::geometry::{to_spherical, to_vector, LatLong, Mat3, Vec3};
use crate::image::sample::sample_bilinear;
use crate::image::{PixelGrid, Rgba};
use crate::remap::filter::FilterKernel;
use crate::remap::table::DirectionTable;
use crate::util::math::{column_longitude, row_latitude, TAU};
use std::f64::consts::PI;

/// Samples per axis of the legacy uniform supersampler.
pub(crate) const UNIFORM_SAMPLES: usize = 6;

/// Computes one destination pixel.
pub trait RemapKernel: Sync {
    /// Returns the value for destination pixel `(x, y)`.
    fn shade(&self, x: usize, y: usize) -> Rgba;
}

/// Maps a destination-sphere direction to clamped source pixel coordinates.
///
/// `z` is clamped into `[-1, 1]` first: rotating a pole direction can land a
/// hair outside the unit sphere, and `asin` would return NaN there.
#[inline]
pub(crate) fn source_coords(src: &PixelGrid, rotation: &Mat3, v: Vec3) -> (f64, f64) {
    let mut v = rotation * v;
    v.z = v.z.clamp(-1.0, 1.0);
    let ll = to_spherical(v);

    let max_x = src.width() as f64 - 1.0;
    let max_y = src.height() as f64 - 1.0;
    let src_x = ll.long / TAU * max_x;
    let src_y = (PI - (ll.lat + PI / 2.0)) / PI * max_y;
    (src_x.clamp(0.0, max_x), src_y.clamp(0.0, max_y))
}

#[inline]
fn sample_direction(src: &PixelGrid, rotation: &Mat3, v: Vec3) -> Rgba {
    let (sx, sy) = source_coords(src, rotation, v);
    sample_bilinear(src, sx, sy)
}

/// Gaussian-weighted `S x S` supersampling through a direction table.
pub(crate) struct FilteredKernel<'a> {
    pub(crate) src: &'a PixelGrid,
    pub(crate) rotation: Mat3,
    pub(crate) table: DirectionTable,
    pub(crate) filter: FilterKernel,
}

impl RemapKernel for FilteredKernel<'_> {
    fn shade(&self, x: usize, y: usize) -> Rgba {
        let samples = self.table.subsamples();
        let mut acc = Rgba::ZERO;
        for sub_y in 0..samples {
            for sub_x in 0..samples {
                let v = self.table.lookup(x, sub_x, y, sub_y);
                let value = sample_direction(self.src, &self.rotation, v);
                acc += self.filter.weight(sub_x, sub_y) * value;
            }
        }
        acc
    }
}

/// Fixed 6x6 box average with offsets `sub / 5`; kept for comparisons.
pub(crate) struct UniformKernel<'a> {
    pub(crate) src: &'a PixelGrid,
    pub(crate) rotation: Mat3,
    pub(crate) dst_width: usize,
    pub(crate) dst_height: usize,
}

impl RemapKernel for UniformKernel<'_> {
    fn shade(&self, x: usize, y: usize) -> Rgba {
        let step = 1.0 / (UNIFORM_SAMPLES - 1) as f64;
        let mut acc = Rgba::ZERO;
        for sub_y in 0..UNIFORM_SAMPLES {
            let lat = row_latitude(y as f64 + step * sub_y as f64, self.dst_height);
            for sub_x in 0..UNIFORM_SAMPLES {
                let long = column_longitude(x as f64 + step * sub_x as f64, self.dst_width);
                let v = to_vector(LatLong::new(lat, long));
                acc += sample_direction(self.src, &self.rotation, v);
            }
        }
        acc *= 1.0 / (UNIFORM_SAMPLES * UNIFORM_SAMPLES) as f64;
        acc
    }
}

/// One sample at each pixel center; no table and no weighting.
pub(crate) struct PreviewKernel<'a> {
    pub(crate) src: &'a PixelGrid,
    pub(crate) rotation: Mat3,
    pub(crate) dst_width: usize,
    pub(crate) dst_height: usize,
}

impl RemapKernel for PreviewKernel<'_> {
    fn shade(&self, x: usize, y: usize) -> Rgba {
        let lat = row_latitude(y as f64, self.dst_height);
        let long = column_longitude(x as f64, self.dst_width);
        sample_direction(self.src, &self.rotation, to_vector(LatLong::new(lat, long)))
    }
}
