#![allow(clippy::module_inception)]

//! gif-quant: palette construction and transparency-preserving GIF encoding
//!
//! Turns an in-memory image into a single-frame GIF89a stream with an
//! adaptive palette of at most 256 entries, dithered with error diffusion,
//! and with full transparency kept as a GIF transparent index.
//!
//! # Quick Start
//!
//! ```
//! use gif_quant::{encode_gif, EncodeOptions, PixelSource, TruecolorImage};
//!
//! // 2x2: three red pixels and one fully transparent pixel.
//! let rgba = [
//!     255, 0, 0, 255, 255, 0, 0, 255,
//!     255, 0, 0, 255, 0, 0, 0, 0,
//! ];
//! let image = TruecolorImage::from_rgba8(2, 2, &rgba).unwrap();
//! let bytes = encode_gif(&PixelSource::from(image), &EncodeOptions::new()).unwrap();
//!
//! assert_eq!(&bytes[..6], b"GIF89a");
//! assert_eq!(bytes.last(), Some(&0x3B));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelSource
//!     |
//!     +--- Paletted ---------------------------------+
//!     |                                              |
//!     v                                              |
//! ColorFrequencies   (transparent / opaque buckets)  |
//!     |                                              |
//!     v                                              |
//! Palette::build     (frequency ranked or Plan 9)    |
//!     |                                              |
//!     v                                              |
//! allocate_transparent_slot                          |
//!     |                                              |
//!     v                                              |
//! rasterize          (error diffusion, raster order) |
//!     |                                              |
//!     v                                              v
//! IndexedRaster ------------------------------> GIF89a bytes
//! ```
//!
//! Use [`quantize`] to stop at the [`IndexedRaster`], for instance to
//! inspect the palette that would be written.
//!
//! # Transparency
//!
//! Only pixels with alpha 0 are counted as transparent colors when the
//! palette is built. Any pixel that is not fully opaque is written with the
//! transparent index (or index 0 if the palette ended up without one).

pub mod api;
pub mod color;
pub mod dither;
pub mod histogram;
pub mod output;
pub mod palette;
pub mod source;

mod stream;


pub use api::{encode_gif, encode_gif_to, quantize, EncodeError, EncodeOptions, ParseOptionError};
pub use color::Rgba;
pub use dither::Ditherer;
pub use histogram::{ColorBucket, ColorFrequencies};
pub use output::IndexedRaster;
pub use palette::{allocate_transparent_slot, Palette, PaletteError, PaletteStrategy};
pub use source::{Bounds, PalettedImage, PixelSource, TruecolorImage};
pub use stream::MAX_DIMENSION;
