//! Spherical remap engine.
//!
//! The engine is an inverse warp: for every destination pixel it looks up the
//! pixel's direction on the output sphere, rotates it into the source frame,
//! converts it back to equirectangular source coordinates and samples there.
//! Every destination pixel is written exactly once, so the output has no holes.
//!
//! Three modes are available through [`RemapMode`]:
//!
//! - `Filtered`: `S x S` supersampling with a Gaussian reconstruction filter
//!   (the default and highest quality),
//! - `Uniform`: the older fixed 6x6 box average, kept for comparisons,
//! - `Preview`: one sample per pixel for quick previews.
//!
//! Source sampling clamps at the image edges and does not wrap across the
//! longitude seam.

pub mod filter;
mod kernel;
#[cfg(feature = "rayon")]
mod rayon;
pub mod roundtrip;
mod scalar;
pub mod table;

pub use filter::FilterKernel;
pub use table::DirectionTable;

use crate::geometry::Mat3;
use crate::image::PixelGrid;
use crate::trace::trace_span;
use crate::util::{PanoError, PanoResult};
use kernel::{FilteredKernel, PreviewKernel, RemapKernel, UniformKernel};

/// Quality mode for a remap call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RemapMode {
    /// Gaussian-weighted supersampling with `subsamples` samples per axis.
    ///
    /// `subsamples` must be odd; 1 degenerates to [`RemapMode::Preview`].
    Filtered { sigma: f64, subsamples: usize },
    /// Fixed 6x6 uniform average.
    Uniform,
    /// Single sample per pixel.
    Preview,
}

impl RemapMode {
    /// Default filter sigma.
    pub const DEFAULT_SIGMA: f64 = 0.4;
    /// Default subsamples per axis.
    pub const DEFAULT_SUBSAMPLES: usize = 9;

    /// Filtered mode with the default subsample count.
    pub fn filtered(sigma: f64) -> Self {
        RemapMode::Filtered {
            sigma,
            subsamples: Self::DEFAULT_SUBSAMPLES,
        }
    }

    /// Short name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            RemapMode::Filtered { .. } => "filtered",
            RemapMode::Uniform => "uniform",
            RemapMode::Preview => "preview",
        }
    }
}

impl Default for RemapMode {
    fn default() -> Self {
        Self::filtered(Self::DEFAULT_SIGMA)
    }
}

/// Configuration for a remap call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RemapConfig {
    /// Quality mode.
    pub mode: RemapMode,
    /// Process rows on the rayon pool. Ignored without the `rayon` feature.
    pub parallel: bool,
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self {
            mode: RemapMode::default(),
            parallel: true,
        }
    }
}

/// Remaps `src` into `dst` with the Gaussian-filtered engine (9x9 samples).
///
/// `dst` must already have the desired output size. `rotation` takes a
/// direction on the destination sphere to the source sphere; it is assumed to
/// be orthonormal and is not checked.
pub fn remap(dst: &mut PixelGrid, src: &PixelGrid, rotation: &Mat3, sigma: f64) -> PanoResult<()> {
    remap_with(
        dst,
        src,
        rotation,
        &RemapConfig {
            mode: RemapMode::filtered(sigma),
            ..RemapConfig::default()
        },
    )
}

/// Remaps with the legacy 6x6 uniform supersampler.
pub fn remap_uniform(dst: &mut PixelGrid, src: &PixelGrid, rotation: &Mat3) -> PanoResult<()> {
    remap_with(
        dst,
        src,
        rotation,
        &RemapConfig {
            mode: RemapMode::Uniform,
            ..RemapConfig::default()
        },
    )
}

/// Remaps with one sample per destination pixel.
pub fn remap_preview(dst: &mut PixelGrid, src: &PixelGrid, rotation: &Mat3) -> PanoResult<()> {
    remap_with(
        dst,
        src,
        rotation,
        &RemapConfig {
            mode: RemapMode::Preview,
            ..RemapConfig::default()
        },
    )
}

/// Remaps `src` into `dst` using the mode and driver chosen in `cfg`.
///
/// All validation happens before any pixel is written: on error `dst` is left
/// untouched.
pub fn remap_with(
    dst: &mut PixelGrid,
    src: &PixelGrid,
    rotation: &Mat3,
    cfg: &RemapConfig,
) -> PanoResult<()> {
    check_dims(dst)?;
    check_dims(src)?;

    let _span = trace_span!(
        "remap",
        mode = cfg.mode.name(),
        src_width = src.width(),
        src_height = src.height(),
        dst_width = dst.width(),
        dst_height = dst.height()
    )
    .entered();

    let (dst_width, dst_height) = (dst.width(), dst.height());
    match cfg.mode {
        RemapMode::Filtered { sigma, subsamples } => {
            let filter = FilterKernel::gaussian(subsamples, sigma)?;
            if subsamples == 1 {
                let kernel = PreviewKernel {
                    src,
                    rotation: *rotation,
                    dst_width,
                    dst_height,
                };
                run(dst, &kernel, cfg.parallel);
                return Ok(());
            }
            let table = DirectionTable::new(dst_width, dst_height, subsamples)?;
            let kernel = FilteredKernel {
                src,
                rotation: *rotation,
                table,
                filter,
            };
            run(dst, &kernel, cfg.parallel);
        }
        RemapMode::Uniform => {
            let kernel = UniformKernel {
                src,
                rotation: *rotation,
                dst_width,
                dst_height,
            };
            run(dst, &kernel, cfg.parallel);
        }
        RemapMode::Preview => {
            let kernel = PreviewKernel {
                src,
                rotation: *rotation,
                dst_width,
                dst_height,
            };
            run(dst, &kernel, cfg.parallel);
        }
    }
    Ok(())
}

fn check_dims(grid: &PixelGrid) -> PanoResult<()> {
    let (width, height) = (grid.width(), grid.height());
    if width < 2 || height < 2 {
        return Err(PanoError::InvalidDimensions { width, height });
    }
    Ok(())
}

fn run<K: RemapKernel>(dst: &mut PixelGrid, kernel: &K, parallel: bool) {
    #[cfg(feature = "rayon")]
    {
        if parallel {
            self::rayon::fill_rows_par(dst, kernel);
            return;
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel;

    scalar::fill_rows(dst, kernel);
}
