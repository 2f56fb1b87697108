//! Circle rasterizer bound to a streaming texture.
//!
//! A [`CircleRasterizer`] owns a `2r × 2r` [`PixelBuffer`] and the texture it
//! is uploaded to. Moving the circle only shifts its bounding box; the
//! pixels are rasterized once and redrawn only on request.

use std::rc::Rc;

use crate::color::{PackedColor, Rgba};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::pixel_buffer::PixelBuffer;
use crate::present::{Presenter, StreamingTexture};
use crate::render::{draw_circle, draw_disk_naive, ChordStrategy};

/// Largest accepted radius (keeps textures within common GPU limits).
pub const MAX_RADIUS: i32 = 8192;

/// How the buffer was last rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Midpoint outline only.
    Outline,
    /// Midpoint outline filled with chords.
    Filled,
    /// Per-pixel distance test.
    Naive,
}

/// A solid circle rasterized into its own texture.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use circle_texture::prelude::*;
///
/// let presenter = Rc::new(SoftwarePresenter::new(64, 64).unwrap());
/// let mut circle =
///     CircleRasterizer::new(Rc::clone(&presenter), Point::new(32, 32), 8, Rgba::RED, true)
///         .unwrap();
/// circle.move_to(Point::new(20, 20));
/// circle.present().unwrap();
/// assert_eq!(presenter.canvas().get_pixel(20, 20), Some(Rgba::RED));
/// ```
#[derive(Debug)]
pub struct CircleRasterizer<P: Presenter> {
    center: Point,
    radius: i32,
    color: Rgba,
    packed: PackedColor,
    bbox: Rect,
    strategy: ChordStrategy,
    shape: Shape,
    pixels: PixelBuffer,
    texture: StreamingTexture<P>,
}

impl<P: Presenter> CircleRasterizer<P> {
    /// Create a circle using the default [`ChordStrategy`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadius`] for a negative or oversized radius and
    /// propagates texture creation and upload failures.
    pub fn new(
        presenter: Rc<P>,
        center: Point,
        radius: i32,
        color: Rgba,
        filled: bool,
    ) -> Result<Self> {
        Self::with_strategy(presenter, center, radius, color, filled, ChordStrategy::default())
    }

    /// Create a circle filling chords with `strategy`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadius`] for a negative or oversized radius and
    /// propagates texture creation and upload failures.
    pub fn with_strategy(
        presenter: Rc<P>,
        center: Point,
        radius: i32,
        color: Rgba,
        filled: bool,
        strategy: ChordStrategy,
    ) -> Result<Self> {
        let shape = if filled { Shape::Filled } else { Shape::Outline };
        Self::with_shape(presenter, center, radius, color, shape, strategy)
    }

    /// Create a circle already rasterized as `shape`, uploading it once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadius`] for a negative or oversized radius and
    /// propagates texture creation and upload failures.
    pub fn with_shape(
        presenter: Rc<P>,
        center: Point,
        radius: i32,
        color: Rgba,
        shape: Shape,
        strategy: ChordStrategy,
    ) -> Result<Self> {
        if !(0..=MAX_RADIUS).contains(&radius) {
            return Err(Error::InvalidRadius { radius });
        }

        // Radius 0 still gets one pixel so the texture is never empty.
        let size = (2 * radius).max(1) as u32;
        let pixels = PixelBuffer::new(size, size)?;
        let texture = StreamingTexture::new(presenter, size, size)?;

        let mut circle = Self {
            center,
            radius,
            color,
            packed: PackedColor::native(color),
            bbox: Rect::around(center, radius as u32),
            strategy,
            shape,
            pixels,
            texture,
        };
        match shape {
            Shape::Outline => circle.rasterize(false)?,
            Shape::Filled => circle.rasterize(true)?,
            Shape::Naive => circle.rasterize_naive()?,
        }
        Ok(circle)
    }

    /// Redraw the buffer as an outline, or filled, and upload it.
    ///
    /// # Errors
    ///
    /// Propagates texture upload failures.
    pub fn rasterize(&mut self, filled: bool) -> Result<()> {
        log::debug!(
            "rasterizing r={} filled={} strategy={:?}",
            self.radius,
            filled,
            self.strategy
        );
        draw_circle(&mut self.pixels, self.radius, self.packed, filled, self.strategy);
        self.shape = if filled { Shape::Filled } else { Shape::Outline };
        self.upload()
    }

    /// Redraw the buffer with the per-pixel distance test and upload it.
    ///
    /// # Errors
    ///
    /// Propagates texture upload failures.
    pub fn rasterize_naive(&mut self) -> Result<()> {
        log::debug!("rasterizing r={} naive", self.radius);
        draw_disk_naive(&mut self.pixels, self.radius, self.packed);
        self.shape = Shape::Naive;
        self.upload()
    }

    /// Change the chord strategy used by later [`rasterize`](Self::rasterize) calls.
    pub fn set_strategy(&mut self, strategy: ChordStrategy) {
        self.strategy = strategy;
    }

    /// Recenter the circle. The pixel buffer is left untouched.
    ///
    /// Any center is accepted; near the ends of the `i32` range the bounding
    /// box origin saturates.
    pub fn move_to(&mut self, center: Point) {
        self.center = center;
        self.bbox.move_to(center);
    }

    /// Draw the texture at the current bounding box.
    ///
    /// # Errors
    ///
    /// Propagates the presenter's draw failure.
    pub fn present(&self) -> Result<()> {
        self.texture.draw(self.bbox)
    }

    fn upload(&self) -> Result<()> {
        self.texture.update(self.pixels.pixels(), self.pixels.pitch())
    }

    /// Current center.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Radius in pixels.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Fill color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// Fill color packed for the host.
    #[must_use]
    pub const fn packed_color(&self) -> PackedColor {
        self.packed
    }

    /// Screen rectangle the texture is drawn to.
    #[must_use]
    pub const fn bounding_box(&self) -> Rect {
        self.bbox
    }

    /// The rasterized pixels.
    #[must_use]
    pub const fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// How the buffer was last rasterized.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Whether the interior is filled.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.shape != Shape::Outline
    }

    /// Chord strategy in use.
    #[must_use]
    pub const fn strategy(&self) -> ChordStrategy {
        self.strategy
    }

    /// The texture backing this circle.
    #[must_use]
    pub const fn texture(&self) -> &StreamingTexture<P> {
        &self.texture
    }
}
