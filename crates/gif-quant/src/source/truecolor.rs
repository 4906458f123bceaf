//! Direct-color pixel buffers.

use crate::api::EncodeError;
use crate::color::Rgba;

use super::Bounds;

/// Row-major buffer of [`Rgba`] pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TruecolorImage {
    bounds: Bounds,
    pixels: Vec<Rgba>,
}

impl TruecolorImage {
    /// Wrap an existing pixel buffer.
    ///
    /// Fails with [`EncodeError::LengthMismatch`] when the buffer does not
    /// hold exactly one pixel per cell of `bounds`.
    pub fn new(bounds: Bounds, pixels: Vec<Rgba>) -> Result<Self, EncodeError> {
        if pixels.len() != bounds.area() {
            return Err(EncodeError::LengthMismatch {
                expected: bounds.area(),
                actual: pixels.len(),
            });
        }
        Ok(Self { bounds, pixels })
    }

    /// Build from interleaved 8-bit RGBA bytes.
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Self, EncodeError> {
        Self::from_raw(width, height, 4, 8, data)
    }

    /// Build from an interleaved sample buffer as produced by PNG-style
    /// decoders.
    ///
    /// `channels` is 1 (gray), 2 (gray + alpha), 3 (RGB) or 4 (RGBA);
    /// `bit_depth` is 8, or 16 with big-endian samples. Anything else is
    /// [`EncodeError::UnsupportedColorModel`].
    pub fn from_raw(
        width: u32,
        height: u32,
        channels: u8,
        bit_depth: u8,
        data: &[u8],
    ) -> Result<Self, EncodeError> {
        let sample_bytes = match bit_depth {
            8 => 1,
            16 => 2,
            _ => {
                return Err(EncodeError::UnsupportedColorModel {
                    channels,
                    bit_depth,
                })
            }
        };
        if !(1..=4).contains(&channels) {
            return Err(EncodeError::UnsupportedColorModel {
                channels,
                bit_depth,
            });
        }

        let bounds = Bounds::from_size(width, height);
        let stride = channels as usize * sample_bytes;
        let expected = bounds.area() * stride;
        if data.len() != expected {
            return Err(EncodeError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        let sample = |px: &[u8], i: usize| -> u16 {
            if sample_bytes == 1 {
                px[i] as u16 * 257
            } else {
                u16::from_be_bytes([px[2 * i], px[2 * i + 1]])
            }
        };

        let pixels = data
            .chunks_exact(stride)
            .map(|px| match channels {
                1 => {
                    let v = sample(px, 0);
                    Rgba::new(v, v, v, Rgba::MAX)
                }
                2 => {
                    let v = sample(px, 0);
                    Rgba::new(v, v, v, sample(px, 1))
                }
                3 => Rgba::new(sample(px, 0), sample(px, 1), sample(px, 2), Rgba::MAX),
                _ => Rgba::new(sample(px, 0), sample(px, 1), sample(px, 2), sample(px, 3)),
            })
            .collect();

        Ok(Self { bounds, pixels })
    }

    /// Rectangle covered by the image.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Color at absolute coordinates.
    pub fn at(&self, x: i32, y: i32) -> Option<Rgba> {
        self.bounds.offset(x, y).map(|i| self.pixels[i])
    }
}
