//! In-memory presenter compositing textures onto a [`Canvas`].

use std::cell::{Cell, Ref, RefCell};

use crate::canvas::Canvas;
use crate::color::{PackedColor, Rgba};
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::pixel_buffer::BYTES_PER_PIXEL;
use crate::present::{Presenter, TextureId};

/// A texture stored for later drawing.
#[derive(Debug)]
struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

/// Software presenter: textures live in a slot table and are drawn with
/// nearest-neighbour scaling and source-over blending.
#[derive(Debug)]
pub struct SoftwarePresenter {
    canvas: RefCell<Canvas>,
    textures: RefCell<Vec<Option<Texture>>>,
    texture_limit: Cell<Option<usize>>,
    uploads: Cell<u64>,
}

impl SoftwarePresenter {
    /// Create a presenter drawing onto a `width × height` canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            canvas: RefCell::new(Canvas::new(width, height)?),
            textures: RefCell::new(Vec::new()),
            texture_limit: Cell::new(None),
            uploads: Cell::new(0),
        })
    }

    /// Refuse to hold more than `limit` live textures at once.
    #[must_use]
    pub fn with_texture_limit(self, limit: usize) -> Self {
        self.texture_limit.set(Some(limit));
        self
    }

    /// Borrow the composited canvas.
    ///
    /// # Panics
    ///
    /// Panics if called while a draw is in progress (never the case from
    /// safe single-threaded use).
    pub fn canvas(&self) -> Ref<'_, Canvas> {
        self.canvas.borrow()
    }

    /// Number of textures currently allocated.
    #[must_use]
    pub fn live_textures(&self) -> usize {
        self.textures.borrow().iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of texture uploads accepted so far.
    #[must_use]
    pub fn uploads(&self) -> u64 {
        self.uploads.get()
    }

    /// Copy of the last uploaded contents of `texture`.
    #[must_use]
    pub fn texture_pixels(&self, texture: TextureId) -> Option<Vec<u32>> {
        self.textures
            .borrow()
            .get(texture.0 as usize)
            .and_then(Option::as_ref)
            .map(|t| t.pixels.clone())
    }
}

impl Presenter for SoftwarePresenter {
    fn create_streaming_texture(&self, width: u32, height: u32) -> Result<TextureId> {
        if width == 0 || height == 0 {
            return Err(Error::TextureCreation(format!("empty texture {width}x{height}")));
        }

        if let Some(limit) = self.texture_limit.get() {
            if self.live_textures() >= limit {
                log::warn!("texture limit of {limit} reached");
                return Err(Error::TextureCreation(format!("texture limit of {limit} reached")));
            }
        }

        let texture = Texture {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize)],
        };

        let mut textures = self.textures.borrow_mut();
        let slot = match textures.iter().position(Option::is_none) {
            Some(free) => {
                textures[free] = Some(texture);
                free
            }
            None => {
                textures.push(Some(texture));
                textures.len() - 1
            }
        };
        Ok(TextureId(slot as u32))
    }

    fn update_texture(&self, texture: TextureId, pixels: &[u32], pitch: usize) -> Result<()> {
        let mut textures = self.textures.borrow_mut();
        let tex = textures
            .get_mut(texture.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(Error::UnknownTexture(texture.0))?;

        let expected_pitch = (tex.width as usize) * BYTES_PER_PIXEL;
        if pitch != expected_pitch {
            return Err(Error::TextureUpdate(format!(
                "pitch {pitch} does not match texture {texture} pitch {expected_pitch}"
            )));
        }
        if pixels.len() != tex.pixels.len() {
            return Err(Error::TextureUpdate(format!(
                "{} pixels uploaded to {}x{} texture {texture}",
                pixels.len(),
                tex.width,
                tex.height
            )));
        }

        tex.pixels.copy_from_slice(pixels);
        self.uploads.set(self.uploads.get() + 1);
        Ok(())
    }

    fn draw_texture(&self, texture: TextureId, dest: Rect) -> Result<()> {
        let textures = self.textures.borrow();
        let tex = textures
            .get(texture.0 as usize)
            .and_then(Option::as_ref)
            .ok_or(Error::UnknownTexture(texture.0))?;

        let mut canvas = self.canvas.borrow_mut();
        let screen = Rect::new(0, 0, canvas.width(), canvas.height());
        let Some(visible) = dest.intersection(&screen) else {
            return Ok(());
        };

        // Offsets into `dest` can exceed i32 when it starts far off screen.
        let (dw, dh) = (i64::from(dest.width), i64::from(dest.height));
        for y in visible.y..visible.y + visible.height as i32 {
            let dy = i64::from(y) - i64::from(dest.y);
            let sy = (dy * i64::from(tex.height) / dh) as usize;
            let row = &tex.pixels[sy * tex.width as usize..(sy + 1) * tex.width as usize];
            for x in visible.x..visible.x + visible.width as i32 {
                let dx = i64::from(x) - i64::from(dest.x);
                let sx = (dx * i64::from(tex.width) / dw) as usize;
                let texel = PackedColor::from_bits(row[sx]);
                if texel == PackedColor::TRANSPARENT {
                    continue;
                }
                canvas.blend_pixel(x as u32, y as u32, texel.unpack_native());
            }
        }
        Ok(())
    }

    fn destroy_texture(&self, texture: TextureId) {
        if let Some(slot) = self.textures.borrow_mut().get_mut(texture.0 as usize) {
            *slot = None;
        }
    }

    fn clear(&self, color: Rgba) -> Result<()> {
        self.canvas.borrow_mut().clear(color);
        Ok(())
    }
}
