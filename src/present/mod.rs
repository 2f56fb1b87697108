//! Presentation of finished pixel buffers.
//!
//! A [`Presenter`] is the rendering context a circle draws into: it hands out
//! streaming textures, accepts pixel uploads and draws textures at screen
//! rectangles. [`StreamingTexture`] ties one texture to its presenter and
//! releases it when dropped.

mod software;

use std::fmt;
use std::rc::Rc;

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::Rect;

pub use software::SoftwarePresenter;

/// Opaque handle to a presenter-owned texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rendering context that can host streaming ARGB8888 textures.
///
/// Methods take `&self`: a presenter is one shared target that every circle
/// of a frame draws into sequentially.
pub trait Presenter {
    /// Allocate a texture that accepts repeated pixel uploads.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TextureCreation`](crate::Error::TextureCreation) when
    /// no texture can be allocated.
    fn create_streaming_texture(&self, width: u32, height: u32) -> Result<TextureId>;

    /// Replace the contents of `texture` with `pixels`, `pitch` bytes per row.
    ///
    /// # Errors
    ///
    /// Returns an error if the texture is unknown or the data does not match
    /// its size.
    fn update_texture(&self, texture: TextureId, pixels: &[u32], pitch: usize) -> Result<()>;

    /// Draw `texture` stretched over `dest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the texture is unknown.
    fn draw_texture(&self, texture: TextureId, dest: Rect) -> Result<()>;

    /// Release `texture`. Unknown ids are ignored.
    fn destroy_texture(&self, texture: TextureId);

    /// Clear the whole target to `color` before a frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be cleared.
    fn clear(&self, color: Rgba) -> Result<()> {
        let _ = color;
        Ok(())
    }
}

/// A streaming texture owned together with its presenter.
///
/// The texture is destroyed when this value is dropped.
pub struct StreamingTexture<P: Presenter> {
    presenter: Rc<P>,
    id: TextureId,
    width: u32,
    height: u32,
}

impl<P: Presenter> StreamingTexture<P> {
    /// Allocate a `width × height` streaming texture on `presenter`.
    ///
    /// # Errors
    ///
    /// Propagates the presenter's creation failure.
    pub fn new(presenter: Rc<P>, width: u32, height: u32) -> Result<Self> {
        let id = presenter.create_streaming_texture(width, height)?;
        log::trace!("created streaming texture {id} ({width}x{height})");
        Ok(Self { presenter, id, width, height })
    }

    /// Presenter-side handle.
    #[must_use]
    pub const fn id(&self) -> TextureId {
        self.id
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

    /// The presenter this texture lives on.
    #[must_use]
    pub fn presenter(&self) -> &Rc<P> {
        &self.presenter
    }

    /// Upload a full frame of pixels.
    ///
    /// # Errors
    ///
    /// Propagates the presenter's upload failure.
    pub fn update(&self, pixels: &[u32], pitch: usize) -> Result<()> {
        self.presenter.update_texture(self.id, pixels, pitch)
    }

    /// Draw the texture over `dest`.
    ///
    /// # Errors
    ///
    /// Propagates the presenter's draw failure.
    pub fn draw(&self, dest: Rect) -> Result<()> {
        self.presenter.draw_texture(self.id, dest)
    }
}

impl<P: Presenter> Drop for StreamingTexture<P> {
    fn drop(&mut self) {
        log::trace!("destroying streaming texture {}", self.id);
        self.presenter.destroy_texture(self.id);
    }
}

impl<P: Presenter> fmt::Debug for StreamingTexture<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamingTexture")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
