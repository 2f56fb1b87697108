//! Circle rasterization.
//!
//! Integer-only rasterization of circles into [`PixelBuffer`]s.
//!
//! # Algorithms
//!
//! - **Midpoint Circle**: outline of one octant, mirrored eight ways
//! - **EFLA chord fill**: fixed-point line fill between mirrored points
//! - **DDA chord fill**: floating-point alternative to EFLA
//! - **Distance test**: naive per-pixel disk fill
//!
//! # References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."
//! - Po-Han Lin (2005). "Extremely Fast Line Algorithm."
//!
//! [`PixelBuffer`]: crate::pixel_buffer::PixelBuffer

mod chord;
mod circle;

pub use chord::{fill_chord, ChordStrategy};
pub use circle::{draw_circle, draw_disk_naive, octant_points, MidpointOctant};
