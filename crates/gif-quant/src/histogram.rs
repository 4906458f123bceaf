//! Color frequency analysis.
//!
//! Scans a [`PixelSource`] once in row-major order and counts every fully
//! transparent and every fully opaque color in two independent buckets.
//! Pixels with intermediate alpha are counted in neither bucket; they are
//! still forced onto the transparent slot at raster time.

use std::collections::HashMap;

use crate::color::Rgba;
use crate::source::PixelSource;

#[derive(Debug, Clone, Copy)]
struct BucketEntry {
    count: u64,
    first_seen: usize,
}

/// Occurrence counts per distinct color, keyed by [`Rgba::key()`].
///
/// Remembers the order in which colors were first recorded so that ranking
/// breaks count ties deterministically.
#[derive(Debug, Clone, Default)]
pub struct ColorBucket {
    entries: HashMap<u64, BucketEntry>,
    total: u64,
}

impl ColorBucket {
    /// Create an empty bucket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `color`.
    pub fn record(&mut self, color: Rgba) {
        let first_seen = self.entries.len();
        self.entries
            .entry(color.key())
            .and_modify(|e| e.count += 1)
            .or_insert(BucketEntry {
                count: 1,
                first_seen,
            });
        self.total += 1;
    }

    /// Occurrences of `color` (0 when never recorded).
    pub fn count(&self, color: Rgba) -> u64 {
        self.entries.get(&color.key()).map_or(0, |e| e.count)
    }

    /// Whether `color` was recorded at least once.
    pub fn contains(&self, color: Rgba) -> bool {
        self.entries.contains_key(&color.key())
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No colors recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pixels recorded.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Distinct colors in no particular order.
    pub fn colors(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.entries.keys().map(|&k| Rgba::from_key(k))
    }

    /// Colors by descending count, ties in first-encounter order.
    pub fn ranked(&self) -> Vec<(Rgba, u64)> {
        let mut ranked: Vec<(u64, BucketEntry)> =
            self.entries.iter().map(|(&k, &e)| (k, e)).collect();
        ranked.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        ranked
            .into_iter()
            .map(|(k, e)| (Rgba::from_key(k), e.count))
            .collect()
    }
}

/// The two frequency tables built for one encode.
#[derive(Debug, Clone, Default)]
pub struct ColorFrequencies {
    /// Colors with alpha 0.
    pub transparent: ColorBucket,
    /// Colors with saturated alpha.
    pub opaque: ColorBucket,
    /// Pixels with intermediate alpha, left out of both buckets.
    pub partial: u64,
}

impl ColorFrequencies {
    /// Scan every pixel of `source`.
    pub fn analyze(source: &PixelSource) -> Self {
        Self::from_colors(source.colors())
    }

    /// Bucket an arbitrary color stream.
    pub fn from_colors(colors: impl IntoIterator<Item = Rgba>) -> Self {
        let mut frequencies = Self::default();
        for color in colors {
            if color.is_transparent() {
                frequencies.transparent.record(color);
            } else if color.is_opaque() {
                frequencies.opaque.record(color);
            } else {
                frequencies.partial += 1;
            }
        }
        tracing::debug!(
            transparent = frequencies.transparent.len(),
            opaque = frequencies.opaque.len(),
            partial = frequencies.partial,
            "Analyzed color frequencies"
        );
        frequencies
    }

    /// Whether `color` appears in either bucket.
    pub fn contains(&self, color: Rgba) -> bool {
        self.transparent.contains(color) || self.opaque.contains(color)
    }

    /// Every counted color, transparent bucket first.
    pub fn colors(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.transparent.colors().chain(self.opaque.colors())
    }

    /// Both buckets ranked and concatenated, transparent first.
    pub fn ranked(&self) -> Vec<(Rgba, u64)> {
        let mut ranked = self.transparent.ranked();
        ranked.extend(self.opaque.ranked());
        ranked
    }
}
