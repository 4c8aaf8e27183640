//! Double-rotation quality check.
//!
//! Rotating a panorama and then rotating it back should reproduce the input
//! up to resampling loss. The statistics here quantify that loss per color
//! channel, both on the float data and after quantizing to 8 bits.

use crate::geometry::Mat3;
use crate::image::{quantize_u8, PixelGrid, Rgba};
use crate::remap::{remap_with, RemapConfig};
use crate::trace::{trace_event, trace_span};
use crate::util::PanoResult;
use std::fmt;

/// Per-channel accumulator over the color channels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChannelStats {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ChannelStats {
    fn add_abs(&mut self, d: [f64; 3]) {
        self.r += d[0].abs();
        self.g += d[1].abs();
        self.b += d[2].abs();
    }

    fn add_sq(&mut self, d: [f64; 3]) {
        self.r += d[0] * d[0];
        self.g += d[1] * d[1];
        self.b += d[2] * d[2];
    }

    fn scaled(self, s: f64) -> Self {
        Self {
            r: self.r * s,
            g: self.g * s,
            b: self.b * s,
        }
    }

    /// Largest of the three channels.
    pub fn max(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }
}

/// Difference statistics between a source and its double-rotated copy.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundTripStats {
    /// Sum of absolute differences, float channels.
    pub sad: ChannelStats,
    /// Mean absolute difference, float channels.
    pub mad: ChannelStats,
    /// Sum of squared differences, float channels.
    pub ssd: ChannelStats,
    /// Sum of absolute differences, 8-bit channels.
    pub sad8: ChannelStats,
    /// Mean absolute difference, 8-bit channels.
    pub mad8: ChannelStats,
    /// Sum of squared differences, 8-bit channels.
    pub ssd8: ChannelStats,
}

impl RoundTripStats {
    /// Compares two equally sized grids.
    ///
    /// # Panics
    /// Panics if the grids differ in size.
    pub fn compare(a: &PixelGrid, b: &PixelGrid) -> Self {
        assert_eq!(
            (a.width(), a.height()),
            (b.width(), b.height()),
            "grids must have equal size"
        );
        let mut sad = ChannelStats::default();
        let mut ssd = ChannelStats::default();
        let mut sad8 = ChannelStats::default();
        let mut ssd8 = ChannelStats::default();

        for (pa, pb) in a.as_slice().iter().zip(b.as_slice()) {
            let d = diff(pa, pb);
            sad.add_abs(d);
            ssd.add_sq(d);
            let d8 = diff8(pa, pb);
            sad8.add_abs(d8);
            ssd8.add_sq(d8);
        }

        let inv_n = 1.0 / a.as_slice().len() as f64;
        Self {
            sad,
            mad: sad.scaled(inv_n),
            ssd,
            sad8,
            mad8: sad8.scaled(inv_n),
            ssd8,
        }
    }
}

fn diff(a: &Rgba, b: &Rgba) -> [f64; 3] {
    [a.r - b.r, a.g - b.g, a.b - b.b]
}

fn diff8(a: &Rgba, b: &Rgba) -> [f64; 3] {
    let q = |v: f64| f64::from(quantize_u8(v));
    [q(a.r) - q(b.r), q(a.g) - q(b.g), q(a.b) - q(b.b)]
}

/// Rotates `src` by `rotation`, rotates the result back with the transpose,
/// and reports how far the final image drifted from `src`.
pub fn double_rotate_test(
    src: &PixelGrid,
    rotation: &Mat3,
    cfg: &RemapConfig,
) -> PanoResult<RoundTripStats> {
    let _span = trace_span!("double_rotate_test", mode = cfg.mode.name()).entered();

    let mut rotated = PixelGrid::new(src.width(), src.height())?;
    remap_with(&mut rotated, src, rotation, cfg)?;

    let mut restored = PixelGrid::new(src.width(), src.height())?;
    remap_with(&mut restored, &rotated, &rotation.transpose(), cfg)?;

    let stats = RoundTripStats::compare(src, &restored);
    trace_event!("round_trip", mad = stats.mad.max(), mad8 = stats.mad8.max());
    Ok(stats)
}

fn write_block(f: &mut fmt::Formatter<'_>, title: &str, s: &ChannelStats) -> fmt::Result {
    writeln!(f, "{title}:")?;
    writeln!(f, "Red:\t{:.6}", s.r)?;
    writeln!(f, "Green:\t{:.6}", s.g)?;
    writeln!(f, "Blue:\t{:.6}", s.b)?;
    writeln!(f)
}

impl fmt::Display for RoundTripStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(f, "Sum of absolute differences (float)", &self.sad)?;
        write_block(f, "Mean absolute differences (float)", &self.mad)?;
        write_block(f, "Sum of squared differences (float)", &self.ssd)?;
        write_block(f, "Sum of absolute differences (RGB8)", &self.sad8)?;
        write_block(f, "Mean absolute differences (RGB8)", &self.mad8)?;
        write_block(f, "Sum of squared differences (RGB8)", &self.ssd8)
    }
}
