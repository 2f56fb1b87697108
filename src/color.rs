//! Color types and native pixel packing.
//!
//! [`Rgba`] is the user-facing 8-bit color. [`PackedColor`] folds it into a
//! single `u32` laid out for an ARGB8888 streaming texture on the host.
//!
//! Both supported byte orders leave the same bytes in memory
//! (`B, G, R, A`), so a packed buffer can be uploaded unchanged.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

/// Byte order of the host a pixel buffer is packed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Least significant byte first (x86, most ARM).
    Little,
    /// Most significant byte first.
    Big,
}

impl Endian {
    /// Byte order of the compilation target.
    pub const NATIVE: Self = if cfg!(target_endian = "big") { Self::Big } else { Self::Little };
}

/// A color packed into one ARGB8888 pixel for a given byte order.
///
/// Transparent pixels are always `0`, whatever the byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedColor(u32);

impl PackedColor {
    /// The fully transparent pixel.
    pub const TRANSPARENT: Self = Self(0);

    /// Pack `color` for a host with the given byte order.
    ///
    /// ```
    /// use circle_texture::color::{Endian, PackedColor, Rgba};
    ///
    /// let packed = PackedColor::pack(Rgba::new(0x11, 0x22, 0x33, 0xff), Endian::Little);
    /// assert_eq!(packed.bits(), 0xff11_2233);
    /// ```
    #[must_use]
    pub const fn pack(color: Rgba, endian: Endian) -> Self {
        let (r, g, b, a) = (color.r as u32, color.g as u32, color.b as u32, color.a as u32);
        match endian {
            Endian::Little => Self((a << 24) | (r << 16) | (g << 8) | b),
            Endian::Big => Self((b << 24) | (g << 16) | (r << 8) | a),
        }
    }

    /// Pack `color` for the host this crate was compiled for.
    #[must_use]
    pub const fn native(color: Rgba) -> Self {
        Self::pack(color, Endian::NATIVE)
    }

    /// Wrap raw pixel bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw pixel bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Recover the color packed for `endian`.
    #[must_use]
    pub const fn unpack(self, endian: Endian) -> Rgba {
        let v = self.0;
        match endian {
            Endian::Little => {
                Rgba::new((v >> 16) as u8, (v >> 8) as u8, v as u8, (v >> 24) as u8)
            }
            Endian::Big => Rgba::new((v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8, v as u8),
        }
    }

    /// Recover the color of a pixel packed for the host.
    #[must_use]
    pub const fn unpack_native(self) -> Rgba {
        self.unpack(Endian::NATIVE)
    }
}

impl From<Rgba> for PackedColor {
    fn from(color: Rgba) -> Self {
        Self::native(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::GREEN.g, 255);
        assert_eq!(Rgba::BLUE.b, 255);
        assert_eq!(Rgba::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_rgba_with_alpha() {
        let semi_red = Rgba::RED.with_alpha(128);
        assert_eq!(semi_red.r, 255);
        assert_eq!(semi_red.a, 128);
    }

    #[test]
    fn test_pack_little_endian() {
        let packed = PackedColor::pack(Rgba::rgb(0x12, 0x34, 0x56), Endian::Little);
        assert_eq!(packed.bits(), 0xff12_3456);
        assert_eq!(packed.bits().to_le_bytes(), [0x56, 0x34, 0x12, 0xff]);
    }

    #[test]
    fn test_pack_big_endian() {
        let packed = PackedColor::pack(Rgba::rgb(0x12, 0x34, 0x56), Endian::Big);
        assert_eq!(packed.bits(), 0x5634_12ff);
        assert_eq!(packed.bits().to_be_bytes(), [0x56, 0x34, 0x12, 0xff]);
    }

    #[test]
    fn test_pack_keeps_alpha() {
        let packed = PackedColor::pack(Rgba::new(1, 2, 3, 0x80), Endian::Little);
        assert_eq!(packed.bits() >> 24, 0x80);
    }

    #[test]
    fn test_unpack_inverts_pack() {
        let color = Rgba::new(10, 20, 30, 40);
        for endian in [Endian::Little, Endian::Big] {
            assert_eq!(PackedColor::pack(color, endian).unpack(endian), color);
        }
        assert_eq!(PackedColor::native(color).unpack_native(), color);
    }

    #[test]
    fn test_native_memory_layout() {
        let packed = PackedColor::native(Rgba::new(1, 2, 3, 4));
        assert_eq!(packed.bits().to_ne_bytes(), [3, 2, 1, 4]);
    }

    #[test]
    fn test_transparent_is_zero() {
        assert_eq!(PackedColor::native(Rgba::TRANSPARENT), PackedColor::TRANSPARENT);
        assert_eq!(PackedColor::from(Rgba::TRANSPARENT).bits(), 0);
    }
}
