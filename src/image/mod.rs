//! Pixel grids for equirectangular panoramas.
//!
//! `PixelGrid` is an owned, contiguous, row-major raster of [`Rgba`] values.
//! Indexing with `get`/`put` outside the grid is a programming error and
//! panics; edge-clamped reads go through [`PixelGrid::get_clamped`].

use crate::util::{PanoError, PanoResult};

#[cfg(feature = "image-io")]
pub mod io;
mod pixel;
pub mod sample;

pub use pixel::{quantize_u16, quantize_u8, Rgba};

/// Owned row-major grid of RGBA pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    data: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// Creates a grid of zero pixels.
    pub fn new(width: usize, height: usize) -> PanoResult<Self> {
        Self::filled(width, height, Rgba::ZERO)
    }

    /// Creates a grid with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: Rgba) -> PanoResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            data: vec![value; len],
            width,
            height,
        })
    }

    /// Wraps a row-major buffer of exactly `width * height` pixels.
    pub fn from_vec(data: Vec<Rgba>, width: usize, height: usize) -> PanoResult<Self> {
        let needed = checked_len(width, height)?;
        if data.len() < needed {
            return Err(PanoError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(PanoError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> PanoResult<Self>
    where
        F: FnMut(usize, usize) -> Rgba,
    {
        let len = checked_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of range");
        self.data[y * self.width + x]
    }

    /// Writes the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the grid.
    #[inline]
    pub fn put(&mut self, x: usize, y: usize, value: Rgba) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of range");
        self.data[y * self.width + x] = value;
    }

    /// Reads a pixel with both coordinates clamped to the grid edges.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> Rgba {
        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        self.data[y * self.width + x]
    }

    /// Returns row `y` as a slice of `width` pixels.
    pub fn row(&self, y: usize) -> Option<&[Rgba]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }

    /// Returns the backing row-major buffer.
    pub fn as_slice(&self) -> &[Rgba] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Rgba] {
        &mut self.data
    }

    /// Consumes the grid and returns its buffer.
    pub fn into_vec(self) -> Vec<Rgba> {
        self.data
    }

    /// Sets every pixel to `value`.
    pub fn clear(&mut self, value: Rgba) {
        self.data.fill(value);
    }

    /// Changes the dimensions, keeping `width * height` pixels present.
    ///
    /// Existing buffer contents are kept in row-major order and new pixels are
    /// zero; callers that need a clean grid should follow with `clear`.
    pub fn resize(&mut self, width: usize, height: usize) -> PanoResult<()> {
        let len = checked_len(width, height)?;
        self.data.resize(len, Rgba::ZERO);
        self.width = width;
        self.height = height;
        Ok(())
    }
}

fn checked_len(width: usize, height: usize) -> PanoResult<usize> {
    if width == 0 || height == 0 {
        return Err(PanoError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(PanoError::InvalidDimensions { width, height })
}
