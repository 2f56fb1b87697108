//! # circle-texture
//!
//! Software rasterization of solid circles into streaming textures.
//!
//! Each circle is rasterized once into its own `2r × 2r` ARGB8888 buffer with
//! the midpoint circle algorithm, optionally filled with chords, and uploaded
//! to a texture owned by a [`Presenter`](present::Presenter). Moving a circle
//! only moves the rectangle its texture is drawn to.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use circle_texture::prelude::*;
//!
//! let presenter = Rc::new(SoftwarePresenter::new(256, 256)?);
//! let circle = CircleRasterizer::new(
//!     Rc::clone(&presenter),
//!     Point::new(128, 128),
//!     50,
//!     Rgba::BLUE,
//!     true,
//! )?;
//!
//! presenter.clear(Rgba::BLACK)?;
//! circle.present()?;
//! let png = PngEncoder::to_bytes(&presenter.canvas())?;
//! assert!(!png.is_empty());
//! # Ok::<(), circle_texture::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli`: the `circles` demo binary (clap, env_logger, anyhow)
//!
//! ## References
//!
//! - Bresenham, J. (1977). "A Linear Algorithm for Incremental Digital Display
//!   of Circular Arcs." Communications of the ACM 20(2).
//! - Po-Han Lin (2005). "Extremely Fast Line Algorithm."

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and ARGB8888 packing.
pub mod color;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Packed pixel storage for a single circle.
pub mod pixel_buffer;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Circle and chord rasterization.
pub mod render;

/// Circles bound to streaming textures.
pub mod rasterizer;

/// Texture presentation contract and the software presenter.
pub mod present;

/// Screen-sized RGBA canvas.
pub mod canvas;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Scene Modules
// ============================================================================

/// Scene configuration.
pub mod config;

/// Scenes of circles and the fixed-timestep loop.
pub mod scene;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for circle-texture operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use circle_texture::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, LuminanceStats};
    pub use crate::color::{Endian, PackedColor, Rgba};
    pub use crate::config::{FillMode, SceneConfig};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Point, Rect};
    pub use crate::output::PngEncoder;
    pub use crate::pixel_buffer::PixelBuffer;
    pub use crate::present::{Presenter, SoftwarePresenter, StreamingTexture, TextureId};
    pub use crate::rasterizer::{CircleRasterizer, Shape, MAX_RADIUS};
    pub use crate::render::ChordStrategy;
    pub use crate::scene::{FixedTimestep, Scene};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
