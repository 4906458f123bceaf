//! Color types
//!
//! Every pixel entering the pipeline is widened to a 16-bit-per-channel
//! [`Rgba`] value, regardless of the depth it was decoded at. Palette entries
//! are narrowed back to 8 bits only when the GIF color table is written.
//!
//! # Example
//!
//! ```
//! use gif_quant::Rgba;
//!
//! let red = Rgba::opaque_u8(255, 0, 0);
//! assert!(red.is_opaque());
//! assert_eq!(red.to_u8(), [255, 0, 0, 255]);
//! ```

mod rgba;

pub use rgba::Rgba;
