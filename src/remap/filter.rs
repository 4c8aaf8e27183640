//! Gaussian reconstruction filter over the subsample grid.

use crate::trace::trace_event;
use crate::util::{PanoError, PanoResult};

/// Normalized `S x S` weight table, row-major in `(sub_y, sub_x)`.
#[derive(Clone, Debug)]
pub struct FilterKernel {
    size: usize,
    weights: Vec<f64>,
}

impl FilterKernel {
    /// Builds `exp(-((x - S/2)^2 + (y - S/2)^2) / (2 * sigma))` and divides by
    /// the total so the weights sum to one.
    ///
    /// `size` must be odd; `sigma` must be finite and positive. Smaller sigma
    /// sharpens the output at the cost of more aliasing.
    pub fn gaussian(size: usize, sigma: f64) -> PanoResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(PanoError::InvalidSubsamples { subsamples: size });
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(PanoError::InvalidSigma);
        }

        let center = size as f64 / 2.0;
        let dist2: Vec<f64> = (0..size * size)
            .map(|idx| {
                let dx = (idx % size) as f64 - center;
                let dy = (idx / size) as f64 - center;
                dx * dx + dy * dy
            })
            .collect();

        // Exponents are shifted by the smallest distance so the peak weight is
        // exactly 1 and the sum cannot underflow for tiny sigma.
        let nearest = dist2.iter().copied().fold(f64::INFINITY, f64::min);
        let mut weights: Vec<f64> = dist2
            .iter()
            .map(|d| (-(d - nearest) / (2.0 * sigma)).exp())
            .collect();
        let sum: f64 = weights.iter().sum();
        for w in &mut weights {
            *w /= sum;
        }

        trace_event!("filter_kernel", size = size, sigma = sigma);
        Ok(Self { size, weights })
    }

    /// Subsamples per axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight for subsample `(sub_x, sub_y)`.
    #[inline]
    pub fn weight(&self, sub_x: usize, sub_y: usize) -> f64 {
        self.weights[sub_y * self.size + sub_x]
    }

    /// All weights, row-major.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}
