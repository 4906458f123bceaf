//! Unified error type for the gif-quant public API.
//!
//! [`EncodeError`] covers everything that can fail between a pixel buffer
//! arriving from a decoder and the finished GIF byte stream, so callers get a
//! single type for `?` propagation.

use thiserror::Error;

use crate::palette::PaletteError;

/// Unified error type for the gif-quant public API.
///
/// # Example
///
/// ```
/// use gif_quant::{encode_gif, EncodeError, EncodeOptions, PixelSource, TruecolorImage};
///
/// fn encode(rgba: &[u8], w: u32, h: u32) -> Result<Vec<u8>, EncodeError> {
///     let image = TruecolorImage::from_rgba8(w, h, rgba)?;
///     encode_gif(&PixelSource::from(image), &EncodeOptions::new())
/// }
///
/// assert!(encode(&[255, 0, 0, 255], 1, 1).is_ok());
/// ```
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height does not fit the 16-bit GIF screen descriptor.
    #[error("gif: image is too large to encode ({width}x{height})")]
    SizeExceeded {
        /// Source width in pixels
        width: u32,
        /// Source height in pixels
        height: u32,
    },

    /// Raw pixel layout the source constructors cannot interpret.
    #[error("unsupported color model: {channels} channel(s) at {bit_depth} bits")]
    UnsupportedColorModel {
        /// Samples per pixel
        channels: u8,
        /// Bits per sample
        bit_depth: u8,
    },

    /// Pixel buffer does not cover the declared bounds.
    #[error("pixel buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length implied by the bounds
        expected: usize,
        /// Length supplied
        actual: usize,
    },

    /// Invalid palette on a paletted source.
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// The GIF container writer failed.
    #[error("gif encode error: {0}")]
    Gif(#[from] gif::EncodingError),

    /// Writing the finished stream to the sink failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error returned when parsing a [`Ditherer`](crate::Ditherer) or
/// [`PaletteStrategy`](crate::PaletteStrategy) name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    /// What was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
    /// Comma-separated accepted names
    pub expected: &'static str,
}
