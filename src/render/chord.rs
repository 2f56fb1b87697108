//! Chord (line) filling between two pixels.
//!
//! Both strategies walk the longer axis one pixel at a time, inclusive of
//! both endpoints, and accumulate the shorter axis from a half-pixel bias.
//! They agree on every axis-aligned span and may differ by one pixel on
//! some slopes.
//!
//! # References
//!
//! - Po-Han Lin (2005). "Extremely Fast Line Algorithm" (EFLA variant E).

use serde::{Deserialize, Serialize};

use crate::color::PackedColor;
use crate::pixel_buffer::PixelBuffer;

/// Fractional bits of the fixed-point accumulator.
const FRACTION_BITS: u32 = 16;

/// Half a pixel in fixed point.
const HALF: i64 = 1 << (FRACTION_BITS - 1);

/// Numeric strategy used to fill chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordStrategy {
    /// 16.16 fixed-point accumulation (EFLA). Deterministic across platforms.
    #[default]
    FixedPoint,
    /// Floating-point slope accumulation, rounded down (DDA).
    FloatingPoint,
}

/// Long/short axis decomposition of a span.
struct Span {
    y_longer: bool,
    long_start: i32,
    short_start: i32,
    long_len: i32,
    short_len: i32,
}

impl Span {
    fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let dx = x2 - x1;
        let dy = y2 - y1;
        if dy.abs() > dx.abs() {
            Self { y_longer: true, long_start: y1, short_start: x1, long_len: dy, short_len: dx }
        } else {
            Self { y_longer: false, long_start: x1, short_start: y1, long_len: dx, short_len: dy }
        }
    }

    /// Direction of travel along the long axis.
    fn step(&self) -> i32 {
        if self.long_len < 0 {
            -1
        } else {
            1
        }
    }

    /// Map a (long, short) coordinate back to (x, y).
    #[inline]
    const fn to_xy(&self, long: i32, short: i32) -> (i32, i32) {
        if self.y_longer {
            (short, long)
        } else {
            (long, short)
        }
    }
}

/// Fill the chord from `(x1, y1)` to `(x2, y2)` inclusive.
///
/// Pixels outside the buffer are skipped. A zero-length chord plots its
/// single endpoint.
///
/// # Example
///
/// ```
/// use circle_texture::color::{PackedColor, Rgba};
/// use circle_texture::pixel_buffer::PixelBuffer;
/// use circle_texture::render::{fill_chord, ChordStrategy};
///
/// let mut buf = PixelBuffer::new(8, 8).unwrap();
/// fill_chord(&mut buf, 0, 0, 5, 0, PackedColor::native(Rgba::RED), ChordStrategy::FixedPoint);
/// assert_eq!(buf.coverage(), 6);
/// ```
pub fn fill_chord(
    buf: &mut PixelBuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: PackedColor,
    strategy: ChordStrategy,
) {
    walk_chord(x1, y1, x2, y2, strategy, |x, y| buf.set(x, y, color));
}

/// Visit every pixel of the chord from `(x1, y1)` to `(x2, y2)` in order.
fn walk_chord(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    strategy: ChordStrategy,
    mut plot: impl FnMut(i32, i32),
) {
    let span = Span::new(x1, y1, x2, y2);
    let mut visit = |long, short| {
        let (x, y) = span.to_xy(long, short);
        plot(x, y);
    };
    match strategy {
        ChordStrategy::FixedPoint => walk_fixed(&span, &mut visit),
        ChordStrategy::FloatingPoint => walk_float(&span, &mut visit),
    }
}

fn walk_fixed(span: &Span, mut visit: impl FnMut(i32, i32)) {
    let step = span.step();
    // Per-step increment along the direction of travel; 0 for a single point.
    let inc = if span.long_len == 0 {
        0
    } else {
        (i64::from(span.short_len) << FRACTION_BITS) / i64::from(span.long_len) * i64::from(step)
    };

    let mut acc = (i64::from(span.short_start) << FRACTION_BITS) + HALF;
    let mut long = span.long_start;
    for _ in 0..=span.long_len.abs() {
        visit(long, (acc >> FRACTION_BITS) as i32);
        acc += inc;
        long += step;
    }
}

// f64 keeps the accumulated error far below half a pixel over the longest
// chord, so the last step lands on the target.
fn walk_float(span: &Span, mut visit: impl FnMut(i32, i32)) {
    let step = span.step();
    let slope = if span.long_len == 0 {
        f64::from(span.short_len)
    } else {
        f64::from(span.short_len) / f64::from(span.long_len.abs())
    };

    let mut acc = f64::from(span.short_start) + 0.5;
    let mut long = span.long_start;
    for _ in 0..=span.long_len.abs() {
        visit(long, acc.floor() as i32);
        acc += slope;
        long += step;
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::color::Rgba;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Every chord is 8-connected: one pixel per long-axis step, short
        /// axis moving by at most one.
        #[test]
        fn prop_chord_connected(
            x1 in 0i32..64, y1 in 0i32..64, x2 in 0i32..64, y2 in 0i32..64,
            float in any::<bool>()
        ) {
            let s = if float { ChordStrategy::FloatingPoint } else { ChordStrategy::FixedPoint };
            let mut buf = PixelBuffer::new(64, 64).unwrap();
            fill_chord(&mut buf, x1, y1, x2, y2, PackedColor::native(Rgba::WHITE), s);

            let long = (x2 - x1).abs().max((y2 - y1).abs());
            prop_assert_eq!(buf.coverage(), (long + 1) as usize);
            prop_assert!(buf.is_set(x1, y1));
            prop_assert!(buf.is_set(x2, y2));

            let mut pixels: Vec<_> = buf.set_pixels().collect();
            if (y2 - y1).abs() > (x2 - x1).abs() {
                pixels.sort_by_key(|&(x, y)| (y, x));
                for w in pixels.windows(2) {
                    prop_assert_eq!(w[1].1 - w[0].1, 1);
                    prop_assert!((w[1].0 - w[0].0).abs() <= 1);
                }
            } else {
                pixels.sort_unstable();
                for w in pixels.windows(2) {
                    prop_assert_eq!(w[1].0 - w[0].0, 1);
                    prop_assert!((w[1].1 - w[0].1).abs() <= 1);
                }
            }
        }

        /// Chords as long as the largest circle stay connected, hit both
        /// endpoints and stay within a pixel of each other.
        #[test]
        fn prop_long_chords(
            x1 in 0i32..16384, y1 in 0i32..16384, x2 in 0i32..16384, y2 in 0i32..16384
        ) {
            let walk = |s| {
                let mut points = Vec::new();
                walk_chord(x1, y1, x2, y2, s, |x, y| points.push((x, y)));
                points
            };
            let fixed = walk(ChordStrategy::FixedPoint);
            let float = walk(ChordStrategy::FloatingPoint);

            let long = (x2 - x1).abs().max((y2 - y1).abs());
            for points in [&fixed, &float] {
                prop_assert_eq!(points.len(), (long + 1) as usize);
                prop_assert_eq!(points[0], (x1, y1));
                prop_assert_eq!(points[points.len() - 1], (x2, y2));
                for w in points.windows(2) {
                    prop_assert!((w[1].0 - w[0].0).abs() <= 1 && (w[1].1 - w[0].1).abs() <= 1);
                }
            }
            for (p, q) in fixed.iter().zip(&float) {
                prop_assert!((p.0 - q.0).abs() <= 1 && (p.1 - q.1).abs() <= 1);
            }
        }

        /// Strategies disagree by at most one pixel on the short axis.
        #[test]
        fn prop_strategies_within_one_pixel(
            x1 in 0i32..64, y1 in 0i32..64, x2 in 0i32..64, y2 in 0i32..64
        ) {
            let white = PackedColor::native(Rgba::WHITE);
            let mut fixed = PixelBuffer::new(64, 64).unwrap();
            let mut float = PixelBuffer::new(64, 64).unwrap();
            fill_chord(&mut fixed, x1, y1, x2, y2, white, ChordStrategy::FixedPoint);
            fill_chord(&mut float, x1, y1, x2, y2, white, ChordStrategy::FloatingPoint);

            let y_longer = (y2 - y1).abs() > (x2 - x1).abs();
            let key = |&(x, y): &(i32, i32)| if y_longer { (y, x) } else { (x, y) };
            let mut a: Vec<_> = fixed.set_pixels().collect();
            let mut b: Vec<_> = float.set_pixels().collect();
            a.sort_by_key(key);
            b.sort_by_key(key);
            prop_assert_eq!(a.len(), b.len());
            for (p, q) in a.iter().zip(&b) {
                prop_assert!((p.0 - q.0).abs() <= 1 && (p.1 - q.1).abs() <= 1);
            }
        }
    }
}
