//! Encoder options and configuration.

use crate::dither::Ditherer;
use crate::palette::{Palette, PaletteStrategy};

/// Configuration for one GIF encode.
///
/// # Defaults
///
/// - 256 colors
/// - Floyd-Steinberg dithering
/// - Frequency-ranked palette
///
/// # Example
///
/// ```
/// use gif_quant::{Ditherer, EncodeOptions};
///
/// let options = EncodeOptions::new()
///     .num_colors(16)
///     .ditherer(Ditherer::None);
/// assert_eq!(options.effective_num_colors(), 16);
///
/// // Out-of-range budgets fall back to the full 256.
/// assert_eq!(EncodeOptions::new().num_colors(0).effective_num_colors(), 256);
/// assert_eq!(EncodeOptions::new().num_colors(257).effective_num_colors(), 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Requested palette size, as given by the caller.
    pub num_colors: usize,

    /// Dithering applied to opaque pixels.
    pub ditherer: Ditherer,

    /// How the palette is chosen.
    pub palette_strategy: PaletteStrategy,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            num_colors: Palette::MAX_COLORS,
            ditherer: Ditherer::default(),
            palette_strategy: PaletteStrategy::default(),
        }
    }
}

impl EncodeOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the palette budget. Checked lazily by
    /// [`effective_num_colors()`](Self::effective_num_colors).
    #[inline]
    pub fn num_colors(mut self, num_colors: usize) -> Self {
        self.num_colors = num_colors;
        self
    }

    /// Set the ditherer.
    #[inline]
    pub fn ditherer(mut self, ditherer: Ditherer) -> Self {
        self.ditherer = ditherer;
        self
    }

    /// Set the palette strategy.
    #[inline]
    pub fn palette_strategy(mut self, strategy: PaletteStrategy) -> Self {
        self.palette_strategy = strategy;
        self
    }

    /// The budget actually used: `num_colors` when in `1..=256`, else 256.
    pub fn effective_num_colors(&self) -> usize {
        if (1..=Palette::MAX_COLORS).contains(&self.num_colors) {
            self.num_colors
        } else {
            Palette::MAX_COLORS
        }
    }
}
