//! Screen-sized RGBA canvas that presenters composite textures onto.
//!
//! Uses trueno for SIMD-accelerated reductions where applicable.

use crate::color::Rgba;
use crate::error::{Error, Result};
use trueno::{Backend, Vector};

/// ITU-R BT.709 luma weights for R, G and B.
const LUMA: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Brightness summary of a composited frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminanceStats {
    /// Darkest pixel.
    pub min: f32,
    /// Brightest pixel.
    pub max: f32,
    /// Average over all pixels.
    pub mean: f32,
}

/// Tightly packed RGBA8 image in row-major order.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    /// `[R, G, B, A]` per pixel.
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a new canvas, cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use circle_texture::canvas::Canvas;
    ///
    /// let canvas = Canvas::new(800, 600).unwrap();
    /// assert_eq!(canvas.width(), 800);
    /// assert_eq!(canvas.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let len = (width as usize) * (height as usize) * 4;
        Ok(Self { width, height, pixels: vec![0; len] })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Raw RGBA bytes, ready for PNG encoding.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        self.pixels.chunks_exact_mut(4).for_each(|px| px.copy_from_slice(&rgba));
    }

    /// Color at `(x, y)`, `None` outside the canvas.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let px = self.pixel(x, y)?;
        Some(Rgba::from_array([px[0], px[1], px[2], px[3]]))
    }

    /// Overwrite `(x, y)`; ignored outside the canvas.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(px) = self.pixel_mut(x, y) {
            px.copy_from_slice(&color.to_array());
        }
    }

    /// Composite `color` over `(x, y)` (source-over, straight alpha).
    ///
    /// Opaque colors overwrite and fully transparent ones are skipped.
    /// Ignored outside the canvas.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        let src_a = u32::from(color.a);
        let Some(px) = self.pixel_mut(x, y) else {
            return;
        };
        match src_a {
            0 => {}
            255 => px.copy_from_slice(&color.to_array()),
            _ => {
                // Destination coverage left after the source, out of 255.
                let keep = u32::from(px[3]) * (255 - src_a) / 255;
                let out_a = src_a + keep;
                let src = color.to_array();
                for (dst, s) in px[..3].iter_mut().zip(src) {
                    let mixed = u32::from(s) * src_a + u32::from(*dst) * keep;
                    *dst = ((mixed + out_a / 2) / out_a) as u8;
                }
                px[3] = out_a as u8;
            }
        }
    }

    /// Luminance statistics using SIMD-accelerated reduction.
    #[must_use]
    pub fn luminance_stats(&self) -> LuminanceStats {
        let luma = Vector::from_vec(
            self.pixels
                .chunks_exact(4)
                .map(|px| {
                    LUMA.iter().zip(px).map(|(w, &c)| w * f32::from(c)).sum::<f32>()
                })
                .collect::<Vec<f32>>(),
        );
        LuminanceStats {
            min: luma.min().unwrap_or(0.0),
            max: luma.max().unwrap_or(0.0),
            mean: luma.mean().unwrap_or(0.0),
        }
    }

    /// Number of pixels that differ from `background`.
    #[must_use]
    pub fn count_not(&self, background: Rgba) -> usize {
        let bg = background.to_array();
        self.pixels.chunks_exact(4).filter(|px| px[..] != bg[..]).count()
    }

    /// SIMD backend trueno selected for this host.
    #[must_use]
    pub fn backend() -> Backend {
        Backend::select_best()
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| ((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }

    fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        self.offset(x, y).map(|i| &self.pixels[i..i + 4])
    }

    fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8]> {
        let i = self.offset(x, y)?;
        Some(&mut self.pixels[i..i + 4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas() {
        let canvas = Canvas::new(100, 50).unwrap();
        assert_eq!(canvas.pixel_count(), 5000);
        assert_eq!(canvas.pixels().len(), 20000);
        assert_eq!(canvas.count_not(Rgba::TRANSPARENT), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(Canvas::new(0, 100), Err(Error::InvalidDimensions { width: 0, .. })));
        assert!(Canvas::new(100, 0).is_err());
    }

    #[test]
    fn test_clear_and_pixels() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.clear(Rgba::RED);
        assert_eq!(canvas.count_not(Rgba::RED), 0);

        canvas.set_pixel(5, 5, Rgba::BLUE);
        canvas.set_pixel(10, 0, Rgba::BLUE);
        assert_eq!(canvas.get_pixel(5, 5), Some(Rgba::BLUE));
        assert_eq!(canvas.get_pixel(0, 10), None);
        assert_eq!(canvas.count_not(Rgba::RED), 1);
    }

    #[test]
    fn test_blend_opaque_and_transparent() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.clear(Rgba::WHITE);
        canvas.blend_pixel(1, 1, Rgba::GREEN);
        canvas.blend_pixel(2, 2, Rgba::GREEN.with_alpha(0));
        canvas.blend_pixel(9, 9, Rgba::GREEN);
        assert_eq!(canvas.get_pixel(1, 1), Some(Rgba::GREEN));
        assert_eq!(canvas.get_pixel(2, 2), Some(Rgba::WHITE));
    }

    #[test]
    fn test_blend_half_alpha_over_opaque() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.clear(Rgba::WHITE);
        canvas.blend_pixel(0, 0, Rgba::new(255, 0, 0, 128));
        assert_eq!(canvas.get_pixel(0, 0), Some(Rgba::new(255, 127, 127, 255)));
    }

    #[test]
    fn test_blend_onto_transparent_keeps_color() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.blend_pixel(0, 0, Rgba::new(40, 80, 120, 100));
        assert_eq!(canvas.get_pixel(0, 0), Some(Rgba::new(40, 80, 120, 100)));
    }

    #[test]
    fn test_luminance_stats() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.clear(Rgba::BLACK);
        canvas.set_pixel(0, 0, Rgba::WHITE);

        let stats = canvas.luminance_stats();
        assert!(stats.min.abs() < 1e-3);
        assert!((stats.max - 255.0).abs() < 0.1);
        assert!((stats.mean - 2.55).abs() < 0.01);
    }
}
