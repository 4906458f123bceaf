use gif_quant::PixelSource;
use std::io::Cursor;

use crate::error::AppError;

/// Encode any source as an 8-bit RGBA PNG.
///
/// Paletted sources are expanded through their palette; 16-bit channels are
/// narrowed by dropping the low byte.
pub fn encode_png(source: &PixelSource) -> Result<Vec<u8>, AppError> {
    let bounds = source.bounds();
    let data: Vec<u8> = source.colors().flat_map(|c| c.to_u8()).collect();

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, bounds.width, bounds.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        writer.finish()?;
    }
    tracing::debug!(
        width = bounds.width,
        height = bounds.height,
        len = buf.get_ref().len(),
        "Encoded PNG"
    );
    Ok(buf.into_inner())
}
