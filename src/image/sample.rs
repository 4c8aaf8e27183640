//! Bilinear sampling with edge clamping.

use crate::image::{PixelGrid, Rgba};

/// Blends a 2x2 neighbourhood.
///
/// Layout is `[a, b, c, d]` with `a = (0, 0)`, `b = (1, 0)`, `c = (0, 1)`,
/// `d = (1, 1)`; `fx` and `fy` are the fractional offsets from `a`.
#[inline]
pub fn bilinear(fx: f64, fy: f64, [a, b, c, d]: [Rgba; 4]) -> Rgba {
    let top = a.lerp(b, fx);
    let bottom = c.lerp(d, fx);
    top.lerp(bottom, fy)
}

/// Samples `src` at fractional coordinates `(x, y)`.
///
/// The four neighbours at the floor/ceil combinations are read through
/// [`PixelGrid::get_clamped`], so coordinates outside the grid resolve to the
/// nearest edge instead of wrapping. Integer coordinates return the stored
/// pixel unchanged.
#[inline]
pub fn sample_bilinear(src: &PixelGrid, x: f64, y: f64) -> Rgba {
    let x0 = x.floor();
    let y0 = y.floor();
    let x1 = x.ceil();
    let y1 = y.ceil();
    let fx = x - x0;
    let fy = y - y0;

    let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
    let quad = [
        src.get_clamped(x0, y0),
        src.get_clamped(x1, y0),
        src.get_clamped(x0, y1),
        src.get_clamped(x1, y1),
    ];
    bilinear(fx, fy, quad)
}
