//! 16-bit RGBA color value with a canonical integer key.

use std::fmt;

/// A non-premultiplied color with 16-bit channels.
///
/// 8-bit inputs are widened by `v * 257`, so `0xFF` becomes `0xFFFF` and
/// "fully opaque" always means `a == Rgba::MAX` whatever the source depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel (0..=0xFFFF)
    pub r: u16,
    /// Green channel (0..=0xFFFF)
    pub g: u16,
    /// Blue channel (0..=0xFFFF)
    pub b: u16,
    /// Alpha channel (0 = fully transparent, 0xFFFF = fully opaque)
    pub a: u16,
}

impl Rgba {
    /// Saturated channel value.
    pub const MAX: u16 = u16::MAX;

    /// The marker color written into the transparent palette slot.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a color from 16-bit channel values.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// ```
    /// use gif_quant::Rgba;
    /// let c = Rgba::from_u8(255, 128, 0, 255);
    /// assert_eq!(c.r, 0xFFFF);
    /// assert_eq!(c.g, 0x8080);
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(widen(r), widen(g), widen(b), widen(a))
    }

    /// Create a fully opaque color from 8-bit channel values.
    #[inline]
    pub const fn opaque_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_u8(r, g, b, 0xFF)
    }

    /// Narrow to 8-bit `[R, G, B, A]`.
    #[inline]
    pub const fn to_u8(self) -> [u8; 4] {
        [
            (self.r >> 8) as u8,
            (self.g >> 8) as u8,
            (self.b >> 8) as u8,
            (self.a >> 8) as u8,
        ]
    }

    /// Narrow to 8-bit `[R, G, B]`, dropping alpha.
    #[inline]
    pub const fn rgb_u8(self) -> [u8; 3] {
        let [r, g, b, _] = self.to_u8();
        [r, g, b]
    }

    /// Canonical 64-bit encoding of all four channels.
    ///
    /// Two colors are the same color exactly when their keys are equal; the
    /// frequency buckets are keyed on this value.
    #[inline]
    pub const fn key(self) -> u64 {
        ((self.r as u64) << 48) | ((self.g as u64) << 32) | ((self.b as u64) << 16) | self.a as u64
    }

    /// Inverse of [`key()`](Self::key).
    #[inline]
    pub const fn from_key(key: u64) -> Self {
        Self::new(
            (key >> 48) as u16,
            (key >> 32) as u16,
            (key >> 16) as u16,
            key as u16,
        )
    }

    /// Alpha is saturated.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == Self::MAX
    }

    /// Alpha is zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// RGB channels as signed values, for error arithmetic.
    #[inline]
    pub(crate) const fn rgb_i32(self) -> [i32; 3] {
        [self.r as i32, self.g as i32, self.b as i32]
    }
}

#[inline]
const fn widen(v: u8) -> u16 {
    v as u16 * 257
}

impl fmt::Display for Rgba {
    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_u8();
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}
