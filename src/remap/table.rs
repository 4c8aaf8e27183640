//! Per-subsample direction vectors for an equirectangular output grid.
//!
//! Each output column contributes `S` longitudes and each row `S` latitudes.
//! Storing their sines and cosines separately makes a lookup two multiplies
//! and no trigonometry, while construction costs `O(S * (width + height))`
//! transcendental calls instead of `O(S^2 * width * height)`.

use crate::geometry::Vec3;
use crate::trace::trace_event;
use crate::util::math::{column_longitude, row_latitude};
use crate::util::{PanoError, PanoResult};

/// Sine/cosine cache indexed by `(pixel, subsample)`.
#[derive(Clone, Debug)]
pub struct DirectionTable {
    width: usize,
    height: usize,
    subsamples: usize,
    sin_long: Vec<f64>,
    cos_long: Vec<f64>,
    sin_lat: Vec<f64>,
    cos_lat: Vec<f64>,
}

impl DirectionTable {
    /// Builds the table for a `width x height` grid with `subsamples` samples
    /// per axis spanning `[-0.5, 0.5]` around each pixel center.
    ///
    /// Both sides must be at least 2 and `subsamples` at least 2.
    pub fn new(width: usize, height: usize, subsamples: usize) -> PanoResult<Self> {
        if width < 2 || height < 2 {
            return Err(PanoError::InvalidDimensions { width, height });
        }
        if subsamples < 2 {
            return Err(PanoError::InvalidSubsamples { subsamples });
        }

        let step = 1.0 / (subsamples - 1) as f64;
        let offset = |pixel: usize, sub: usize| pixel as f64 + step * sub as f64 - 0.5;

        let mut sin_long = Vec::with_capacity(width * subsamples);
        let mut cos_long = Vec::with_capacity(width * subsamples);
        for x in 0..width {
            for sub_x in 0..subsamples {
                let (s, c) = column_longitude(offset(x, sub_x), width).sin_cos();
                sin_long.push(s);
                cos_long.push(c);
            }
        }

        let mut sin_lat = Vec::with_capacity(height * subsamples);
        let mut cos_lat = Vec::with_capacity(height * subsamples);
        for y in 0..height {
            for sub_y in 0..subsamples {
                let (s, c) = row_latitude(offset(y, sub_y), height).sin_cos();
                sin_lat.push(s);
                cos_lat.push(c);
            }
        }

        trace_event!(
            "direction_table",
            width = width,
            height = height,
            subsamples = subsamples
        );

        Ok(Self {
            width,
            height,
            subsamples,
            sin_long,
            cos_long,
            sin_lat,
            cos_lat,
        })
    }

    /// Output width the table was built for.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Output height the table was built for.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Subsamples per axis.
    pub fn subsamples(&self) -> usize {
        self.subsamples
    }

    /// Direction for subsample `(sub_x, sub_y)` of output pixel `(x, y)`.
    #[inline]
    pub fn lookup(&self, x: usize, sub_x: usize, y: usize, sub_y: usize) -> Vec3 {
        debug_assert!(x < self.width && y < self.height);
        debug_assert!(sub_x < self.subsamples && sub_y < self.subsamples);
        let long = x * self.subsamples + sub_x;
        let lat = y * self.subsamples + sub_y;
        let cos_lat = self.cos_lat[lat];
        Vec3::new(
            self.cos_long[long] * cos_lat,
            self.sin_long[long] * cos_lat,
            self.sin_lat[lat],
        )
    }
}
