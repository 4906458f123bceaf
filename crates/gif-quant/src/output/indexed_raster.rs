//! IndexedRaster: palette indices plus the palette they refer to.

use crate::color::Rgba;
use crate::palette::Palette;
use crate::source::Bounds;

/// The canonical output of the quantization pipeline.
///
/// Stores one `u8` palette index per pixel in row-major order, the bounds of
/// the source image, the final palette, and the transparent slot if one was
/// allocated.
///
/// # Example
///
/// ```
/// use gif_quant::{Bounds, IndexedRaster, Palette, Rgba};
///
/// let palette = Palette::new(vec![Rgba::TRANSPARENT, Rgba::opaque_u8(255, 0, 0)]).unwrap();
/// let raster = IndexedRaster::new(Bounds::from_size(2, 2), vec![1, 1, 1, 0], palette, Some(0));
///
/// assert_eq!(raster.width(), 2);
/// assert_eq!(raster.index_at(1, 1), Some(0));
/// assert_eq!(raster.color_at(0, 0), Some(Rgba::opaque_u8(255, 0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedRaster {
    bounds: Bounds,
    indices: Vec<u8>,
    palette: Palette,
    transparent_index: Option<u8>,
}

impl IndexedRaster {
    /// Create a raster.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices` covers `bounds` and that every index is
    /// inside the palette.
    pub fn new(
        bounds: Bounds,
        indices: Vec<u8>,
        palette: Palette,
        transparent_index: Option<u8>,
    ) -> Self {
        debug_assert_eq!(
            indices.len(),
            bounds.area(),
            "indices length ({}) must match {}x{}",
            indices.len(),
            bounds.width,
            bounds.height,
        );
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < palette.len()),
            "index out of range for {}-color palette",
            palette.len()
        );
        Self {
            bounds,
            indices,
            palette,
            transparent_index,
        }
    }

    /// Bounds of the source image.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.bounds.width as usize
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.bounds.height as usize
    }

    /// Palette indices, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// The final palette.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The palette slot that encodes full transparency.
    #[inline]
    pub fn transparent_index(&self) -> Option<u8> {
        self.transparent_index
    }

    /// Index at column `x`, row `y` (relative to the top-left corner).
    pub fn index_at(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.indices[y * self.width() + x])
    }

    /// Palette color at column `x`, row `y`.
    pub fn color_at(&self, x: usize, y: usize) -> Option<Rgba> {
        self.index_at(x, y).map(|i| self.palette.color(i))
    }

    /// Expand to 8-bit RGBA bytes.
    ///
    /// The transparent slot is emitted with alpha 0 whatever its RGB value.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.indices.len() * 4);
        for &idx in &self.indices {
            let [r, g, b, a] = self.palette.color(idx).to_u8();
            let a = if Some(idx) == self.transparent_index { 0 } else { a };
            rgba.extend_from_slice(&[r, g, b, a]);
        }
        rgba
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IndexedRaster {
        let palette = Palette::new(vec![Rgba::TRANSPARENT, Rgba::opaque_u8(255, 0, 0)]).unwrap();
        IndexedRaster::new(Bounds::new(5, 5, 2, 2), vec![1, 1, 1, 0], palette, Some(0))
    }

    #[test]
    fn test_accessors() {
        let raster = sample();
        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.indices(), &[1, 1, 1, 0]);
        assert_eq!(raster.transparent_index(), Some(0));
        assert_eq!(raster.bounds(), Bounds::new(5, 5, 2, 2));
    }

    #[test]
    fn test_lookup_is_relative() {
        let raster = sample();
        assert_eq!(raster.index_at(0, 0), Some(1));
        assert_eq!(raster.index_at(1, 1), Some(0));
        assert_eq!(raster.index_at(2, 0), None);
        assert_eq!(raster.color_at(1, 1), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_to_rgba8() {
        let raster = sample();
        assert_eq!(
            raster.to_rgba8(),
            vec![255, 0, 0, 255, 255, 0, 0, 255, 255, 0, 0, 255, 0, 0, 0, 0]
        );
    }
}
