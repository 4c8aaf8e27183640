//! Rayon row-parallel driver (feature-gated).
//!
//! The destination buffer is split into disjoint row slices, one task per
//! row. Kernels only read shared state, so no locking is involved and the
//! output is bit-identical to the sequential driver.

use crate::image::PixelGrid;
use crate::remap::kernel::RemapKernel;
use rayon::prelude::*;

/// Shades every destination pixel, parallelizing over rows.
pub(crate) fn fill_rows_par<K: RemapKernel>(dst: &mut PixelGrid, kernel: &K) {
    let width = dst.width();
    dst.as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = kernel.shade(x, y);
            }
        });
}
