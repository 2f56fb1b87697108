//! Midpoint circle rasterization into a circle-sized buffer.
//!
//! The buffer is `2r × 2r` with the circle centered on the corner shared by
//! pixels `(r - 1, r - 1)` and `(r, r)`. Offsets on the negative side map to
//! `r - k`, on the positive side to `r - 1 + k`, so both halves mirror
//! exactly and every plotted pixel lies in `[0, 2r)`.

use crate::color::PackedColor;
use crate::pixel_buffer::PixelBuffer;
use crate::render::chord::{fill_chord, ChordStrategy};

/// Iterator over the first-octant steps of the midpoint circle algorithm.
///
/// Yields `(x, y)` after each step, starting from `(0, r)` (not yielded)
/// and stopping once `x >= y`.
#[derive(Debug, Clone)]
pub struct MidpointOctant {
    x: i32,
    y: i32,
    d: i32,
}

impl MidpointOctant {
    /// Start the walk for `radius`.
    #[must_use]
    pub const fn new(radius: i32) -> Self {
        Self { x: 0, y: radius, d: 1 - radius }
    }
}

impl Iterator for MidpointOctant {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x >= self.y {
            return None;
        }

        if self.d < 0 {
            // Midpoint inside: step right.
            self.d += 2 * self.x + 3;
            self.x += 1;
        } else {
            // Midpoint outside: step right and up.
            self.d += 2 * (self.x - self.y) + 5;
            self.x += 1;
            self.y -= 1;
        }

        Some((self.x, self.y))
    }
}

/// The eight buffer pixels mirroring octant offset `(x, y)`.
#[inline]
#[must_use]
pub const fn octant_points(radius: i32, x: i32, y: i32) -> [(i32, i32); 8] {
    let r = radius;
    [
        (r - x, r - y),
        (r - 1 + x, r - y),
        (r - y, r - x),
        (r - 1 + y, r - x),
        (r - y, r - 1 + x),
        (r - 1 + y, r - 1 + x),
        (r - x, r - 1 + y),
        (r - 1 + x, r - 1 + y),
    ]
}

/// Rasterize a circle of `radius` into `buf`.
///
/// Clears the buffer first. With `filled`, every step also joins the
/// mirrored points sharing a row with a chord drawn using `strategy`.
/// Radius 0 plots nothing.
pub fn draw_circle(
    buf: &mut PixelBuffer,
    radius: i32,
    color: PackedColor,
    filled: bool,
    strategy: ChordStrategy,
) {
    buf.clear();

    let r = radius;
    for (x, y) in MidpointOctant::new(r) {
        for (px, py) in octant_points(r, x, y) {
            buf.set(px, py, color);
        }

        if filled {
            fill_chord(buf, r - x, r - y, r - 1 + x, r - y, color, strategy);
            fill_chord(buf, r - y, r - x, r - 1 + y, r - x, color, strategy);
            fill_chord(buf, r - y, r - 1 + x, r - 1 + y, r - 1 + x, color, strategy);
            fill_chord(buf, r - x, r - 1 + y, r - 1 + x, r - 1 + y, color, strategy);
        }
    }
}

/// Fill a disk by testing every pixel's distance to `(r, r)`.
///
/// Slow reference rasterization; clears the buffer first.
pub fn draw_disk_naive(buf: &mut PixelBuffer, radius: i32, color: PackedColor) {
    buf.clear();

    let r = i64::from(radius);
    let r_sq = r * r;
    for y in 0..buf.height() as i32 {
        for x in 0..buf.width() as i32 {
            let dx = i64::from(x) - r;
            let dy = i64::from(y) - r;
            if dx * dx + dy * dy <= r_sq {
                buf.set(x, y, color);
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::color::Rgba;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Every octant point lands inside the `2r × 2r` buffer.
        #[test]
        fn prop_octant_points_in_bounds(radius in 1i32..512) {
            let size = 2 * radius;
            for (x, y) in MidpointOctant::new(radius) {
                for (px, py) in octant_points(radius, x, y) {
                    prop_assert!(px >= 0 && px < size, "x={} out of [0,{})", px, size);
                    prop_assert!(py >= 0 && py < size, "y={} out of [0,{})", py, size);
                }
            }
        }

        /// The walk ends on the octant boundary.
        #[test]
        fn prop_octant_ends_on_diagonal(radius in 1i32..2048) {
            let last = MidpointOctant::new(radius).last();
            let (x, y) = last.unwrap_or((0, radius));
            prop_assert!(x >= y);
            prop_assert!(x - y <= 1);
        }

        /// Filled circles are a superset of their outline.
        #[test]
        fn prop_filled_superset(radius in 0i32..96, float in any::<bool>()) {
            let strategy = if float { ChordStrategy::FloatingPoint } else { ChordStrategy::FixedPoint };
            let size = (2 * radius).max(1) as u32;
            let color = PackedColor::native(Rgba::GREEN);
            let mut outline = PixelBuffer::new(size, size).unwrap();
            let mut filled = PixelBuffer::new(size, size).unwrap();
            draw_circle(&mut outline, radius, color, false, strategy);
            draw_circle(&mut filled, radius, color, true, strategy);
            for (x, y) in outline.set_pixels() {
                prop_assert!(filled.is_set(x, y));
            }
        }
    }
}
