//! Sequential row driver.

use crate::image::PixelGrid;
use crate::remap::kernel::RemapKernel;

/// Shades every destination pixel in row-major order on the calling thread.
pub(crate) fn fill_rows<K: RemapKernel>(dst: &mut PixelGrid, kernel: &K) {
    let width = dst.width();
    for (y, row) in dst.as_mut_slice().chunks_mut(width).enumerate() {
        for (x, px) in row.iter_mut().enumerate() {
            *px = kernel.shade(x, y);
        }
    }
}
