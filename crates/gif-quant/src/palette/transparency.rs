//! Transparent slot allocation.
//!
//! GIF expresses transparency as one designated palette index. After the
//! palette is built, the allocator walks it in order and stops at the first
//! entry that can serve as that index:
//!
//! - an entry that is already fully transparent (it is canonicalised to
//!   [`Rgba::TRANSPARENT`]), or
//! - an entry no counted color resolves to, which is overwritten with
//!   [`Rgba::TRANSPARENT`].
//!
//! A counted color resolves to its exact entry when present and to the
//! nearest entry otherwise. When every entry is in use nothing is
//! substituted: the image loses its transparency and transparent pixels fall
//! back to index 0.

use std::collections::HashSet;

use crate::color::Rgba;
use crate::histogram::ColorFrequencies;

use super::palette::{ColorMatcher, Palette};

/// Designate the transparent slot of `palette`, editing at most one entry.
///
/// Returns the slot index, or `None` when no entry is free. An empty palette
/// receives a single transparent entry so the raster always has an index to
/// point at.
pub fn allocate_transparent_slot(
    palette: &mut Palette,
    frequencies: &ColorFrequencies,
) -> Option<u8> {
    if palette.is_empty() {
        palette.push(Rgba::TRANSPARENT);
        return Some(0);
    }

    let used = used_slots(palette, frequencies);
    let slot = palette
        .colors()
        .iter()
        .enumerate()
        .find(|&(i, c)| c.is_transparent() || !used.contains(&(i as u8)))
        .map(|(i, _)| i as u8);

    match slot {
        Some(index) => {
            if palette.color(index) != Rgba::TRANSPARENT {
                tracing::debug!(index, replaced = %palette.color(index), "Substituted transparent slot");
            }
            palette.set(index, Rgba::TRANSPARENT);
        }
        None => {
            if !frequencies.transparent.is_empty() || frequencies.partial > 0 {
                tracing::warn!(
                    palette_len = palette.len(),
                    "No free palette slot for transparency; transparent pixels become opaque"
                );
            }
        }
    }
    slot
}

fn used_slots(palette: &Palette, frequencies: &ColorFrequencies) -> HashSet<u8> {
    let matcher = ColorMatcher::new(palette);
    frequencies
        .colors()
        .map(|color| {
            palette
                .index_of(color)
                .unwrap_or_else(|| matcher.nearest(color.rgb_i32()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RED: Rgba = Rgba::opaque_u8(255, 0, 0);
    const BLUE: Rgba = Rgba::opaque_u8(0, 0, 255);

    #[test]
    fn test_existing_transparent_entry_is_the_slot() {
        let freq = ColorFrequencies::from_colors([RED, RED, RED, Rgba::TRANSPARENT]);
        let mut palette = Palette::from_frequencies(&freq, 2);

        assert_eq!(allocate_transparent_slot(&mut palette, &freq), Some(0));
        assert_eq!(palette.colors(), &[Rgba::TRANSPARENT, RED]);
    }

    #[test]
    fn test_transparent_entry_is_canonicalised() {
        let clear_red = Rgba::from_u8(255, 0, 0, 0);
        let freq = ColorFrequencies::from_colors([clear_red, BLUE]);
        let mut palette = Palette::from_frequencies(&freq, 256);

        assert_eq!(allocate_transparent_slot(&mut palette, &freq), Some(0));
        assert_eq!(palette.color(0), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_fully_used_palette_has_no_slot() {
        let freq = ColorFrequencies::from_colors([RED, BLUE, BLUE]);
        let mut palette = Palette::from_frequencies(&freq, 256);
        let before = palette.clone();

        assert_eq!(allocate_transparent_slot(&mut palette, &freq), None);
        assert_eq!(palette, before);
    }

    #[test]
    fn test_truncated_colors_mark_their_nearest_entry_used() {
        // The 2-color palette keeps RED and BLUE; dark red resolves to RED.
        let dark_red = Rgba::opaque_u8(200, 0, 0);
        let freq = ColorFrequencies::from_colors([RED, RED, BLUE, BLUE, dark_red]);
        let mut palette = Palette::from_frequencies(&freq, 2);

        assert_eq!(allocate_transparent_slot(&mut palette, &freq), None);
    }

    #[test]
    fn test_first_unused_fixed_entry_is_substituted() {
        let black = Rgba::opaque_u8(0, 0, 0);
        let white = Rgba::opaque_u8(255, 255, 255);
        let gray = Rgba::opaque_u8(128, 128, 128);
        let mut palette = Palette::new(vec![black, gray, white]).unwrap();
        let freq = ColorFrequencies::from_colors([black, white, Rgba::TRANSPARENT]);

        assert_eq!(allocate_transparent_slot(&mut palette, &freq), Some(1));
        assert_eq!(palette.colors(), &[black, Rgba::TRANSPARENT, white]);
    }

    #[test]
    fn test_plan9_gets_one_substitution() {
        let freq = ColorFrequencies::from_colors([
            Rgba::opaque_u8(0, 0, 0),
            Rgba::opaque_u8(255, 255, 255),
            Rgba::TRANSPARENT,
        ]);
        let mut palette = Palette::plan9(256);
        let slot = allocate_transparent_slot(&mut palette, &freq);

        assert_eq!(slot, Some(1));
        let transparent = palette.colors().iter().filter(|c| c.is_transparent()).count();
        assert_eq!(transparent, 1);
    }

    #[test]
    fn test_empty_palette_gets_marker() {
        let freq = ColorFrequencies::default();
        let mut palette = Palette::default();

        assert_eq!(allocate_transparent_slot(&mut palette, &freq), Some(0));
        assert_eq!(palette.colors(), &[Rgba::TRANSPARENT]);
    }
}
