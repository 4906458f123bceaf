//! Palette type and the strategies that build one.

use std::fmt;
use std::str::FromStr;

use crate::api::ParseOptionError;
use crate::color::Rgba;
use crate::histogram::ColorFrequencies;

use super::error::PaletteError;
use super::plan9::plan9;

/// How the palette for a truecolor image is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteStrategy {
    /// Most frequent colors of the image, transparent colors first.
    #[default]
    Frequency,
    /// The first `num_colors` entries of the fixed Plan 9 color map.
    Plan9,
}

impl PaletteStrategy {
    const NAMES: &'static str = "frequency, plan9";
}

impl FromStr for PaletteStrategy {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frequency" => Ok(PaletteStrategy::Frequency),
            "plan9" => Ok(PaletteStrategy::Plan9),
            other => Err(ParseOptionError {
                kind: "palette strategy",
                value: other.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

impl fmt::Display for PaletteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaletteStrategy::Frequency => "frequency",
            PaletteStrategy::Plan9 => "plan9",
        })
    }
}

/// An ordered list of at most 256 colors.
///
/// The position of a color is its palette index in the raster.
///
/// # Example
///
/// ```
/// use gif_quant::{Palette, Rgba};
///
/// let palette = Palette::new(vec![Rgba::TRANSPARENT, Rgba::opaque_u8(255, 0, 0)]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.first_transparent(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    /// Maximum number of entries.
    pub const MAX_COLORS: usize = 256;

    /// Create a palette from explicit colors.
    ///
    /// An empty palette is allowed here; sources that need at least one
    /// color check that themselves.
    pub fn new(colors: Vec<Rgba>) -> Result<Self, PaletteError> {
        if colors.len() > Self::MAX_COLORS {
            return Err(PaletteError::TooManyColors { len: colors.len() });
        }
        Ok(Self { colors })
    }

    /// Rank both frequency buckets and keep the first `num_colors` entries.
    ///
    /// Transparent colors come before opaque ones; within each bucket more
    /// frequent colors come first. Fewer distinct colors than `num_colors`
    /// yields a shorter palette, never a padded one.
    pub fn from_frequencies(frequencies: &ColorFrequencies, num_colors: usize) -> Self {
        let limit = num_colors.min(Self::MAX_COLORS);
        let colors: Vec<Rgba> = frequencies
            .ranked()
            .into_iter()
            .take(limit)
            .map(|(color, _)| color)
            .collect();
        tracing::debug!(
            distinct = frequencies.transparent.len() + frequencies.opaque.len(),
            palette_len = colors.len(),
            "Built frequency palette"
        );
        Self { colors }
    }

    /// The first `num_colors` entries of the Plan 9 color map.
    pub fn plan9(num_colors: usize) -> Self {
        let limit = num_colors.min(Self::MAX_COLORS);
        Self {
            colors: plan9()[..limit].to_vec(),
        }
    }

    /// Build the palette for `frequencies` using `strategy`.
    pub fn build(
        strategy: PaletteStrategy,
        frequencies: &ColorFrequencies,
        num_colors: usize,
    ) -> Self {
        match strategy {
            PaletteStrategy::Frequency => Self::from_frequencies(frequencies, num_colors),
            PaletteStrategy::Plan9 => Self::plan9(num_colors),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// No entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entries in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Entry at `index`, `None` past the end.
    #[inline]
    pub fn get(&self, index: u8) -> Option<Rgba> {
        self.colors.get(index as usize).copied()
    }

    /// Entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is past the end; rasters are validated against
    /// their palette before lookups happen.
    #[inline]
    pub fn color(&self, index: u8) -> Rgba {
        self.colors[index as usize]
    }

    /// Index of the first entry exactly equal to `color`.
    pub fn index_of(&self, color: Rgba) -> Option<u8> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .map(|i| i as u8)
    }

    /// Index of the first fully transparent entry.
    pub fn first_transparent(&self) -> Option<u8> {
        self.colors
            .iter()
            .position(|c| c.is_transparent())
            .map(|i| i as u8)
    }

    /// Flat `[R, G, B, ...]` bytes for an 8-bit color table.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.rgb_u8()).collect()
    }

    pub(crate) fn set(&mut self, index: u8, color: Rgba) {
        self.colors[index as usize] = color;
    }

    pub(crate) fn push(&mut self, color: Rgba) {
        debug_assert!(self.colors.len() < Self::MAX_COLORS);
        self.colors.push(color);
    }
}

/// Nearest-entry lookup by squared RGB distance.
///
/// Only non-transparent entries are candidates, so an opaque pixel never
/// lands on the transparent slot unless the palette holds nothing else.
/// Ties go to the lowest index.
pub(crate) struct ColorMatcher {
    candidates: Vec<(u8, [i32; 3])>,
}

impl ColorMatcher {
    pub(crate) fn new(palette: &Palette) -> Self {
        let all = || {
            palette
                .colors()
                .iter()
                .enumerate()
                .map(|(i, c)| (i as u8, c.rgb_i32()))
        };
        let mut candidates: Vec<(u8, [i32; 3])> = all()
            .filter(|&(i, _)| !palette.color(i).is_transparent())
            .collect();
        if candidates.is_empty() {
            candidates = all().collect();
        }
        Self { candidates }
    }

    /// Index of the entry closest to `rgb` (16-bit channel values).
    ///
    /// Returns 0 for an empty palette.
    pub(crate) fn nearest(&self, rgb: [i32; 3]) -> u8 {
        let mut best = 0u8;
        let mut best_dist = i64::MAX;
        for &(index, entry) in &self.candidates {
            let dist: i64 = (0..3)
                .map(|c| {
                    let d = i64::from(rgb[c] - entry[c]);
                    d * d
                })
                .sum();
            if dist < best_dist {
                best = index;
                best_dist = dist;
                if dist == 0 {
                    break;
                }
            }
        }
        best
    }
}
