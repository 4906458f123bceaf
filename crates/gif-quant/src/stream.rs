//! GIF container serialization.
//!
//! Writes an [`IndexedRaster`] as a single-frame GIF: logical screen equal
//! to the raster size, global color table equal to the palette, one frame at
//! `(0, 0)` with delay 0 and the raster's transparent index.

use std::borrow::Cow;

use crate::api::EncodeError;
use crate::output::IndexedRaster;
use crate::source::Bounds;

/// Exclusive upper bound on either dimension.
pub const MAX_DIMENSION: u32 = 1 << 16;

/// Reject bounds the 16-bit screen descriptor cannot hold.
pub(crate) fn check_size(bounds: Bounds) -> Result<(u16, u16), EncodeError> {
    if bounds.width >= MAX_DIMENSION || bounds.height >= MAX_DIMENSION {
        return Err(EncodeError::SizeExceeded {
            width: bounds.width,
            height: bounds.height,
        });
    }
    Ok((bounds.width as u16, bounds.height as u16))
}

/// Serialize `raster` into a complete GIF byte stream.
pub(crate) fn write_gif(raster: &IndexedRaster) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = check_size(raster.bounds())?;
    let color_table = raster.palette().to_rgb_bytes();

    let mut buf = Vec::new();
    {
        let mut encoder = gif::Encoder::new(&mut buf, width, height, &color_table)?;
        let frame = gif::Frame {
            width,
            height,
            delay: 0,
            transparent: raster.transparent_index(),
            buffer: Cow::Borrowed(raster.indices()),
            ..gif::Frame::default()
        };
        encoder.write_frame(&frame)?;
        // Dropping the encoder writes the trailer.
    }

    tracing::debug!(
        width,
        height,
        palette_len = raster.palette().len(),
        transparent = ?raster.transparent_index(),
        bytes = buf.len(),
        "Wrote GIF stream"
    );
    Ok(buf)
}
