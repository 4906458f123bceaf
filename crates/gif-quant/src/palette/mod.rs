//! Palette types and construction
//!
//! This module provides the bounded [`Palette`], the strategies that build
//! one for an image, and the transparent-slot allocator that runs on the
//! built palette before rasterization.

mod error;
mod palette;
mod plan9;
mod transparency;

pub use error::PaletteError;
pub use palette::{Palette, PaletteStrategy};
pub use plan9::plan9;
pub use transparency::allocate_transparent_slot;

pub(crate) use palette::ColorMatcher;
