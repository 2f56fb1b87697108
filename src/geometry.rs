//! Integer geometric primitives for pixel placement.

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A 2D point with integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

/// An axis-aligned rectangle defined by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width of the rectangle.
    pub width: u32,
    /// Height of the rectangle.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// The `2r × 2r` box of a circle, centered on `center`.
    #[must_use]
    ///
    /// The origin saturates at `i32::MIN`.
    pub const fn around(center: Point, radius: u32) -> Self {
        let r = if radius > i32::MAX as u32 { i32::MAX } else { radius as i32 };
        let size = radius.saturating_mul(2);
        Self::new(center.x.saturating_sub(r), center.y.saturating_sub(r), size, size)
    }

    /// Top-left corner.
    #[must_use]
    pub const fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Exclusive bottom-right corner, saturating at `i32::MAX`.
    #[must_use]
    pub const fn bottom_right(&self) -> Point {
        Point::new(clamp_i32(self.right()), clamp_i32(self.bottom()))
    }

    /// Exclusive right edge, widened so it never overflows.
    const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge, widened so it never overflows.
    const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Keep the size, put the center on `center`.
    ///
    /// The origin saturates at `i32::MIN`.
    pub fn move_to(&mut self, center: Point) {
        self.x = center.x.saturating_sub((self.width / 2) as i32);
        self.y = center.y.saturating_sub((self.height / 2) as i32);
    }

    /// Check if a point lies inside the rectangle (right/bottom edges excluded).
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && (point.x as i64) < self.right()
            && (point.y as i64) < self.bottom()
    }

    /// Check whether two rectangles overlap.
    #[must_use]
    pub const fn intersects(&self, other: &Rect) -> bool {
        (self.x as i64) < other.right()
            && (other.x as i64) < self.right()
            && (self.y as i64) < other.bottom()
            && (other.y as i64) < self.bottom()
    }

    /// Overlapping part of two rectangles, if any.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let w = self.right().min(other.right()) - i64::from(x);
        let h = self.bottom().min(other.bottom()) - i64::from(y);
        if w > 0 && h > 0 {
            Some(Rect::new(x, y, clamp_u32(w), clamp_u32(h)))
        } else {
            None
        }
    }

    /// Whether the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

const fn clamp_i32(v: i64) -> i32 {
    if v > i32::MAX as i64 {
        i32::MAX
    } else if v < i32::MIN as i64 {
        i32::MIN
    } else {
        v as i32
    }
}

const fn clamp_u32(v: i64) -> u32 {
    if v > u32::MAX as i64 {
        u32::MAX
    } else if v < 0 {
        0
    } else {
        v as u32
    }
}
