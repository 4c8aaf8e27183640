//! Loading and saving panoramas via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Decoded channels are
//! scaled to `[0, 1]`; values are clamped only when quantizing on save.

use crate::image::{quantize_u16, quantize_u8, PixelGrid, Rgba};
use crate::util::{PanoError, PanoResult};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageBuffer, ImageFormat};
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;

/// A decoded image plus the layout it was stored in.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    pub grid: PixelGrid,
    /// Bits per channel in the source file (8, 16 or 32).
    pub bit_depth: u32,
    /// 3 for RGB-like sources, 4 when the source carries alpha.
    pub channels: u32,
}

/// Encoder settings for [`save`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaveParams {
    /// Bits per channel for TIFF output (8 or 16).
    pub bit_depth: u32,
    /// Channels for TIFF output (3 or 4).
    pub channels: u32,
    /// JPEG quality, 1..=100.
    pub quality: u8,
}

impl Default for SaveParams {
    fn default() -> Self {
        Self {
            bit_depth: 8,
            channels: 3,
            quality: 90,
        }
    }
}

fn io_err(err: impl fmt::Display) -> PanoError {
    PanoError::ImageIo {
        reason: err.to_string(),
    }
}

/// Loads an image from disk into a float RGBA grid.
///
/// Grayscale sources are expanded to RGB; sources without alpha get `a = 1`.
pub fn load<P: AsRef<Path>>(path: P) -> PanoResult<LoadedImage> {
    let img = image::open(path).map_err(io_err)?;
    from_dynamic(&img)
}

/// Converts a decoded image into a [`LoadedImage`].
pub fn from_dynamic(img: &DynamicImage) -> PanoResult<LoadedImage> {
    let color = img.color();
    let channels_in = u32::from(color.channel_count());
    let bit_depth = u32::from(color.bytes_per_pixel()) * 8 / channels_in;
    let channels = if color.has_alpha() { 4 } else { 3 };

    let width = img.width() as usize;
    let height = img.height() as usize;
    let rgba = img.to_rgba32f();
    let data = rgba
        .as_raw()
        .chunks_exact(4)
        .map(|p| Rgba::new(f64::from(p[0]), f64::from(p[1]), f64::from(p[2]), f64::from(p[3])))
        .collect();
    let grid = PixelGrid::from_vec(data, width, height)?;

    Ok(LoadedImage {
        grid,
        bit_depth,
        channels,
    })
}

/// Quantizes a grid into an 8- or 16-bit RGB/RGBA image.
pub fn to_dynamic(grid: &PixelGrid, bit_depth: u32, channels: u32) -> PanoResult<DynamicImage> {
    let width = u32::try_from(grid.width()).map_err(io_err)?;
    let height = u32::try_from(grid.height()).map_err(io_err)?;
    let px = grid.as_slice();
    let unsupported = PanoError::UnsupportedPixelLayout {
        bit_depth,
        channels,
    };

    let img = match (bit_depth, channels) {
        (8, 3) => {
            let raw = px
                .iter()
                .flat_map(|p| [quantize_u8(p.r), quantize_u8(p.g), quantize_u8(p.b)])
                .collect();
            ImageBuffer::from_raw(width, height, raw).map(DynamicImage::ImageRgb8)
        }
        (8, 4) => {
            let raw = px
                .iter()
                .flat_map(|p| {
                    [
                        quantize_u8(p.r),
                        quantize_u8(p.g),
                        quantize_u8(p.b),
                        quantize_u8(p.a),
                    ]
                })
                .collect();
            ImageBuffer::from_raw(width, height, raw).map(DynamicImage::ImageRgba8)
        }
        (16, 3) => {
            let raw = px
                .iter()
                .flat_map(|p| [quantize_u16(p.r), quantize_u16(p.g), quantize_u16(p.b)])
                .collect();
            ImageBuffer::from_raw(width, height, raw).map(DynamicImage::ImageRgb16)
        }
        (16, 4) => {
            let raw = px
                .iter()
                .flat_map(|p| {
                    [
                        quantize_u16(p.r),
                        quantize_u16(p.g),
                        quantize_u16(p.b),
                        quantize_u16(p.a),
                    ]
                })
                .collect();
            ImageBuffer::from_raw(width, height, raw).map(DynamicImage::ImageRgba16)
        }
        _ => return Err(unsupported),
    };
    img.ok_or(PanoError::BufferTooSmall {
        needed: grid.width() * grid.height(),
        got: px.len(),
    })
}

/// Saves a TIFF with the bit depth and channel count in `params`.
///
/// Bit depths above 8 are written as 16-bit.
pub fn save_tiff<P: AsRef<Path>>(grid: &PixelGrid, path: P, params: SaveParams) -> PanoResult<()> {
    let bit_depth = if params.bit_depth > 8 { 16 } else { params.bit_depth };
    let img = to_dynamic(grid, bit_depth, params.channels)?;
    img.save_with_format(path, ImageFormat::Tiff).map_err(io_err)
}

/// Saves an 8-bit RGB JPEG at `params.quality`.
pub fn save_jpeg<P: AsRef<Path>>(grid: &PixelGrid, path: P, params: SaveParams) -> PanoResult<()> {
    let img = to_dynamic(grid, 8, 3)?;
    let file = File::create(path).map_err(io_err)?;
    let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), params.quality.clamp(1, 100));
    encoder
        .encode(img.as_bytes(), img.width(), img.height(), ExtendedColorType::Rgb8)
        .map_err(io_err)
}

/// Output format selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveFormat {
    /// TIFF matching the input's bit depth and channel count.
    Tiff,
    /// 8-bit RGB JPEG.
    Jpeg,
    TiffRgb8,
    TiffRgb16,
    TiffRgba8,
    TiffRgba16,
}

impl SaveFormat {
    /// Recognized flag names, their formats and descriptions.
    pub const TABLE: [(&'static str, SaveFormat, &'static str); 7] = [
        ("TIFF", SaveFormat::Tiff, "(default) -- matches bps/spp from input"),
        ("JPG", SaveFormat::Jpeg, "8-bit RGB JPEG (default q=90)"),
        ("JPEG", SaveFormat::Jpeg, "(synonym; same as above)"),
        ("TIFF_RGB8", SaveFormat::TiffRgb8, "8-bit  RGB  TIFF"),
        ("TIFF_RGB16", SaveFormat::TiffRgb16, "16-bit RGB  TIFF"),
        ("TIFF_RGBA8", SaveFormat::TiffRgba8, "8-bit  RGBA TIFF"),
        ("TIFF_RGBA16", SaveFormat::TiffRgba16, "16-bit RGBA TIFF"),
    ];

    /// Canonical flag name.
    pub fn name(self) -> &'static str {
        match self {
            SaveFormat::Tiff => "TIFF",
            SaveFormat::Jpeg => "JPEG",
            SaveFormat::TiffRgb8 => "TIFF_RGB8",
            SaveFormat::TiffRgb16 => "TIFF_RGB16",
            SaveFormat::TiffRgba8 => "TIFF_RGBA8",
            SaveFormat::TiffRgba16 => "TIFF_RGBA16",
        }
    }

    /// Final encoder settings, pinning the layout for fixed-layout formats.
    ///
    /// `params` carries the input's layout for [`SaveFormat::Tiff`].
    pub fn resolve(self, params: SaveParams) -> SaveParams {
        let fixed = |bit_depth, channels| SaveParams {
            bit_depth,
            channels,
            ..params
        };
        match self {
            SaveFormat::Tiff => params,
            SaveFormat::Jpeg => fixed(8, 3),
            SaveFormat::TiffRgb8 => fixed(8, 3),
            SaveFormat::TiffRgb16 => fixed(16, 3),
            SaveFormat::TiffRgba8 => fixed(8, 4),
            SaveFormat::TiffRgba16 => fixed(16, 4),
        }
    }

    /// Writes `grid` to `path` in this format.
    pub fn save<P: AsRef<Path>>(self, grid: &PixelGrid, path: P, params: SaveParams) -> PanoResult<()> {
        let params = self.resolve(params);
        match self {
            SaveFormat::Jpeg => save_jpeg(grid, path, params),
            SaveFormat::Tiff
            | SaveFormat::TiffRgb8
            | SaveFormat::TiffRgb16
            | SaveFormat::TiffRgba8
            | SaveFormat::TiffRgba16 => save_tiff(grid, path, params),
        }
    }
}

impl FromStr for SaveFormat {
    type Err = PanoError;

    fn from_str(s: &str) -> PanoResult<Self> {
        Self::TABLE
            .iter()
            .find(|(name, _, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, format, _)| *format)
            .ok_or_else(|| PanoError::UnknownSaveFormat { name: s.to_string() })
    }
}

impl fmt::Display for SaveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Saves `grid` using the default TIFF layout in `params`.
pub fn save<P: AsRef<Path>>(grid: &PixelGrid, path: P, params: SaveParams) -> PanoResult<()> {
    SaveFormat::Tiff.save(grid, path, params)
}
