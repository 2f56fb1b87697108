//! Packed 32-bit pixel buffer backing a circle texture.
//!
//! Pixels are stored row-major with no row padding, so the pitch of an
//! upload is always `width * 4` bytes.

use crate::color::PackedColor;
use crate::error::{Error, Result};

/// Bytes per packed pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Row-major buffer of packed ARGB8888 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Packed pixels, `width * height` entries.
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a fully transparent buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use circle_texture::pixel_buffer::PixelBuffer;
    ///
    /// let buf = PixelBuffer::new(8, 4).unwrap();
    /// assert_eq!(buf.pixel_count(), 32);
    /// assert_eq!(buf.pitch(), 32);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize)],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row length in bytes.
    #[must_use]
    pub const fn pitch(&self) -> usize {
        (self.width as usize) * BYTES_PER_PIXEL
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Raw packed pixels.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// One row of packed pixels.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u32]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Reset every pixel to fully transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(PackedColor::TRANSPARENT.bits());
    }

    /// Whether `(x, y)` addresses a pixel of this buffer.
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Read the pixel at `(x, y)`, `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<PackedColor> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(PackedColor::from_bits(self.pixels[self.index(x, y)]))
    }

    /// Write the pixel at `(x, y)`.
    ///
    /// Does nothing if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: PackedColor) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.pixels[idx] = color.bits();
        }
    }

    /// Whether the pixel at `(x, y)` is non-transparent.
    #[must_use]
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|c| c != PackedColor::TRANSPARENT)
    }

    /// Coordinates of every non-transparent pixel, row-major.
    pub fn set_pixels(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p != PackedColor::TRANSPARENT.bits())
            .map(move |(i, _)| ((i % width) as i32, (i / width) as i32))
    }

    /// Number of non-transparent pixels.
    #[must_use]
    pub fn coverage(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != PackedColor::TRANSPARENT.bits()).count()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}
