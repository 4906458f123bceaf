//! Public API for the gif-quant crate.
//!
//! This module provides the entry points ([`encode_gif`], [`encode_gif_to`],
//! [`quantize`]), the [`EncodeOptions`] configuration and the
//! [`EncodeError`] unified error type.

mod encoder;
mod error;
mod options;

pub use encoder::{encode_gif, encode_gif_to, quantize};
pub use error::{EncodeError, ParseOptionError};
pub use options::EncodeOptions;
