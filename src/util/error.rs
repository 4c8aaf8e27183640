//! Error types for panorotate.

use thiserror::Error;

/// Result alias for panorotate operations.
pub type PanoResult<T> = std::result::Result<T, PanoError>;

/// Errors that can occur when building or running a remap.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PanoError {
    /// A grid side is too small for the equirectangular mapping.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The pixel buffer is shorter than `width * height`.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// The subsample count must be odd and non-zero.
    #[error("invalid subsample count {subsamples}: must be odd and at least 1")]
    InvalidSubsamples { subsamples: usize },
    /// The filter sigma must be finite and positive.
    #[error("invalid filter sigma: must be finite and > 0")]
    InvalidSigma,
    /// An unknown axis symbol appeared in a rotation order string.
    #[error("invalid rotation order symbol '{symbol}' (expected R, P or Y)")]
    InvalidRotationOrder { symbol: char },
    /// The requested save format is not recognized.
    #[error("unknown save format: {name}")]
    UnknownSaveFormat { name: String },
    /// The encoder cannot express the requested bit depth / channel layout.
    #[error("unsupported pixel layout: {bit_depth}-bit with {channels} channels")]
    UnsupportedPixelLayout { bit_depth: u32, channels: u32 },
    /// Image decode or encode failure.
    #[error("image I/O error: {reason}")]
    ImageIo { reason: String },
}
