//! imgedit - image format conversion
//!
//! Decodes PNG and GIF input and writes GIF (through `gif-quant`) or PNG.
//! This library exposes modules for integration testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod services;
