//! Images that already carry a bounded palette.

use crate::api::EncodeError;
use crate::color::Rgba;
use crate::palette::{Palette, PaletteError};

use super::Bounds;

/// Row-major palette indices plus the palette they refer to.
///
/// Construction validates every index, so encoding a `PalettedImage` never
/// has to re-check the raster.
#[derive(Debug, Clone, PartialEq)]
pub struct PalettedImage {
    bounds: Bounds,
    palette: Palette,
    indices: Vec<u8>,
}

impl PalettedImage {
    /// Create a paletted image.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] for an empty palette
    /// - [`PaletteError::IndexOutOfRange`] for an index past the palette
    /// - [`EncodeError::LengthMismatch`] when `indices` does not cover `bounds`
    pub fn new(bounds: Bounds, palette: Palette, indices: Vec<u8>) -> Result<Self, EncodeError> {
        if palette.is_empty() {
            return Err(PaletteError::EmptyPalette.into());
        }
        if indices.len() != bounds.area() {
            return Err(EncodeError::LengthMismatch {
                expected: bounds.area(),
                actual: indices.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= palette.len()) {
            return Err(PaletteError::IndexOutOfRange {
                index,
                len: palette.len(),
            }
            .into());
        }
        Ok(Self {
            bounds,
            palette,
            indices,
        })
    }

    /// Rectangle covered by the image.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The native palette.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette indices in row-major order.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Color at absolute coordinates.
    pub fn at(&self, x: i32, y: i32) -> Option<Rgba> {
        self.bounds
            .offset(x, y)
            .map(|i| self.palette.color(self.indices[i]))
    }
}
