//! The encode pipeline.
//!
//! ```text
//! PixelSource ──Truecolor──> ColorFrequencies ──> Palette ──> transparent slot
//!      │                                                            │
//!      │                                                       rasterize
//!      │                                                            │
//!      └──Paletted (fast path)──────────────────────────> IndexedRaster ──> GIF bytes
//! ```

use std::io::Write;

use crate::dither::rasterize;
use crate::histogram::ColorFrequencies;
use crate::output::IndexedRaster;
use crate::palette::{allocate_transparent_slot, Palette};
use crate::source::{PalettedImage, PixelSource, TruecolorImage};
use crate::stream::{check_size, write_gif};

use super::error::EncodeError;
use super::options::EncodeOptions;

/// Encode `source` as a single-frame GIF.
///
/// Fails with [`EncodeError::SizeExceeded`] before doing any work when
/// either dimension is 65536 or more. Paletted sources are written with
/// their own palette and indices untouched.
///
/// # Example
///
/// ```
/// use gif_quant::{encode_gif, EncodeOptions, PixelSource, TruecolorImage};
///
/// let rgba = [255, 0, 0, 255, 0, 0, 255, 255];
/// let image = TruecolorImage::from_rgba8(2, 1, &rgba).unwrap();
/// let bytes = encode_gif(&PixelSource::from(image), &EncodeOptions::new()).unwrap();
/// assert_eq!(&bytes[..6], b"GIF89a");
/// ```
pub fn encode_gif(source: &PixelSource, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    let raster = quantize(source, options)?;
    write_gif(&raster)
}

/// Encode `source` and hand the finished stream to `writer` in one write.
///
/// Nothing reaches `writer` when encoding fails.
pub fn encode_gif_to<W: Write>(
    source: &PixelSource,
    options: &EncodeOptions,
    mut writer: W,
) -> Result<(), EncodeError> {
    let bytes = encode_gif(source, options)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Run the pipeline up to, but not including, the GIF container.
pub fn quantize(source: &PixelSource, options: &EncodeOptions) -> Result<IndexedRaster, EncodeError> {
    check_size(source.bounds())?;
    match source {
        PixelSource::Paletted(image) => Ok(passthrough(image)),
        PixelSource::Truecolor(image) => Ok(quantize_truecolor(image, options)),
    }
}

fn passthrough(image: &PalettedImage) -> IndexedRaster {
    let palette = image.palette().clone();
    let transparent = palette.first_transparent();
    tracing::debug!(
        palette_len = palette.len(),
        transparent = ?transparent,
        "Source already paletted, skipping quantization"
    );
    IndexedRaster::new(image.bounds(), image.indices().to_vec(), palette, transparent)
}

fn quantize_truecolor(image: &TruecolorImage, options: &EncodeOptions) -> IndexedRaster {
    let num_colors = options.effective_num_colors();
    let frequencies = ColorFrequencies::from_colors(image.pixels().iter().copied());

    let mut palette = Palette::build(options.palette_strategy, &frequencies, num_colors);
    let transparent = allocate_transparent_slot(&mut palette, &frequencies);

    let indices = rasterize(image, &palette, transparent, options.ditherer);
    tracing::debug!(
        num_colors,
        palette_len = palette.len(),
        transparent = ?transparent,
        ditherer = %options.ditherer,
        strategy = %options.palette_strategy,
        "Quantized image"
    );
    IndexedRaster::new(image.bounds(), indices, palette, transparent)
}
