//! Diagnostic view of the palette the GIF encoder would write.

use gif_quant::{ColorFrequencies, EncodeOptions, PixelSource};
use serde::Serialize;
use std::fmt;

use crate::error::AppError;

/// One palette entry and how many pixels were mapped to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub index: u8,
    /// `#rrggbb`, or `#rrggbbaa` when not opaque
    pub color: String,
    pub pixels: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteReport {
    pub width: u32,
    pub height: u32,
    /// Distinct fully transparent colors in the input
    pub transparent_colors: usize,
    /// Distinct fully opaque colors in the input
    pub opaque_colors: usize,
    /// Pixels with intermediate alpha
    pub partial_pixels: u64,
    pub transparent_index: Option<u8>,
    pub entries: Vec<ReportEntry>,
}

impl PaletteReport {
    /// Quantize `source` with `options` and summarize the result.
    pub fn build(source: &PixelSource, options: &EncodeOptions) -> Result<Self, AppError> {
        let frequencies = ColorFrequencies::analyze(source);
        let raster = gif_quant::quantize(source, options)?;

        let mut usage = vec![0u64; raster.palette().len()];
        for &index in raster.indices() {
            usage[index as usize] += 1;
        }

        let entries = raster
            .palette()
            .colors()
            .iter()
            .zip(usage)
            .enumerate()
            .map(|(i, (color, pixels))| ReportEntry {
                index: i as u8,
                color: color.to_string(),
                pixels,
            })
            .collect();

        let bounds = source.bounds();
        Ok(Self {
            width: bounds.width,
            height: bounds.height,
            transparent_colors: frequencies.transparent.len(),
            opaque_colors: frequencies.opaque.len(),
            partial_pixels: frequencies.partial,
            transparent_index: raster.transparent_index(),
            entries,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for PaletteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}x{}: {} opaque, {} transparent, {} partial",
            self.width, self.height, self.opaque_colors, self.transparent_colors, self.partial_pixels
        )?;
        match self.transparent_index {
            Some(index) => writeln!(f, "palette: {} colors, transparent index {index}", self.entries.len())?,
            None => writeln!(f, "palette: {} colors, no transparent index", self.entries.len())?,
        }
        for entry in &self.entries {
            writeln!(f, "{:>3}  {:<9}  {}", entry.index, entry.color, entry.pixels)?;
        }
        Ok(())
    }
}
