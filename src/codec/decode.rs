//! Input decoding: sniff the container, then hand back a [`PixelSource`].
//!
//! - Indexed PNGs (any bit depth) and GIFs stay paletted, so the GIF encoder can write
//!   them without requantizing.
//! - Every other PNG is expanded to gray, gray+alpha, RGB or RGBA at 8 or 16
//!   bits and becomes a truecolor source.

use gif_quant::{Bounds, Palette, PalettedImage, PixelSource, Rgba, TruecolorImage};
use std::io::Cursor;

use crate::error::AppError;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const GIF_MAGIC: &[&[u8]] = &[b"GIF87a", b"GIF89a"];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Container formats recognised on input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Gif,
    Jpeg,
}

impl ImageFormat {
    /// Identify the format from the leading magic bytes
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(PNG_MAGIC) {
            Some(Self::Png)
        } else if GIF_MAGIC.iter().any(|m| bytes.starts_with(m)) {
            Some(Self::Gif)
        } else if bytes.starts_with(JPEG_MAGIC) {
            Some(Self::Jpeg)
        } else {
            None
        }
    }

    /// Lowercase name, also used as file extension
    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Jpeg => "jpeg",
        }
    }
}

/// Decode an in-memory image file, returning the pixels and the sniffed format
pub fn decode_image(bytes: &[u8]) -> Result<(PixelSource, ImageFormat), AppError> {
    let format = ImageFormat::sniff(bytes).ok_or(AppError::UnsupportedFormat("unknown"))?;
    tracing::debug!(format = format.name(), len = bytes.len(), "Decoding input");

    let source = match format {
        ImageFormat::Png => decode_png(bytes)?,
        ImageFormat::Gif => decode_gif(bytes)?,
        ImageFormat::Jpeg => return Err(AppError::UnsupportedFormat(format.name())),
    };
    Ok((source, format))
}

fn decode_png(bytes: &[u8]) -> Result<PixelSource, AppError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info()?;

    let info = reader.info();
    if info.color_type == png::ColorType::Indexed {
        let bits = info.bit_depth as u8;
        let plte = info.palette.as_deref().map(<[u8]>::to_vec);
        let trns = info.trns.as_deref().map(<[u8]>::to_vec).unwrap_or_default();

        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf)?;
        let indices = unpack_indices(&buf, frame.line_size, frame.width, frame.height, bits);

        let plte = plte.ok_or(AppError::MissingColorTable)?;
        let colors = plte
            .chunks_exact(3)
            .enumerate()
            .map(|(i, c)| Rgba::from_u8(c[0], c[1], c[2], trns.get(i).copied().unwrap_or(255)))
            .collect();
        let palette = Palette::new(colors).map_err(gif_quant::EncodeError::from)?;
        let image = PalettedImage::new(Bounds::from_size(frame.width, frame.height), palette, indices)?;
        tracing::debug!(palette_len = image.palette().len(), bits, "Decoded indexed PNG");
        return Ok(image.into());
    }

    // Anything else is decoded again with low-bit and tRNS expansion.
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    buf.truncate(frame.buffer_size());

    let (color_type, bit_depth) = reader.output_color_type();
    let image = TruecolorImage::from_raw(
        frame.width,
        frame.height,
        color_type.samples() as u8,
        bit_depth as u8,
        &buf,
    )?;
    tracing::debug!(?color_type, ?bit_depth, "Decoded truecolor PNG");
    Ok(image.into())
}

/// One index per pixel from rows packed at 1, 2, 4 or 8 bits per sample.
fn unpack_indices(data: &[u8], line_size: usize, width: u32, height: u32, bits: u8) -> Vec<u8> {
    let width = width as usize;
    let rows = data.chunks(line_size).take(height as usize);
    if bits == 8 {
        return rows.flat_map(|row| &row[..width]).copied().collect();
    }

    let per_byte = 8 / bits as usize;
    let mask = (1u8 << bits) - 1;
    let mut indices = Vec::with_capacity(width * height as usize);
    for row in rows {
        indices.extend((0..width).map(|x| {
            let shift = 8 - bits - (x % per_byte) as u8 * bits;
            (row[x / per_byte] >> shift) & mask
        }));
    }
    indices
}

fn decode_gif(bytes: &[u8]) -> Result<PixelSource, AppError> {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(Cursor::new(bytes))?;
    let global = decoder.global_palette().map(<[u8]>::to_vec);

    let frame = decoder.read_next_frame()?.ok_or(AppError::EmptyGif)?;
    let table = frame
        .palette
        .clone()
        .or(global)
        .ok_or(AppError::MissingColorTable)?;

    let colors = table
        .chunks_exact(3)
        .enumerate()
        .map(|(i, c)| {
            let alpha = if frame.transparent == Some(i as u8) { 0 } else { 255 };
            Rgba::from_u8(c[0], c[1], c[2], alpha)
        })
        .collect();
    let palette = Palette::new(colors).map_err(gif_quant::EncodeError::from)?;
    let bounds = Bounds::new(
        i32::from(frame.left),
        i32::from(frame.top),
        u32::from(frame.width),
        u32::from(frame.height),
    );
    let image = PalettedImage::new(bounds, palette, frame.buffer.to_vec())?;
    tracing::debug!(
        palette_len = image.palette().len(),
        transparent = ?frame.transparent,
        "Decoded GIF frame"
    );
    Ok(image.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed_png(width: u32, height: u32, depth: png::BitDepth, plte: &[u8], data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(png::ColorType::Indexed);
            encoder.set_depth(depth);
            encoder.set_palette(plte.to_vec());
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    fn png_bytes(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_sniff_formats() {
        assert_eq!(ImageFormat::sniff(b"\x89PNG\r\n\x1a\nrest"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::sniff(b"GIF89a...."), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::sniff(b"GIF87a...."), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::sniff(b"BM"), None);
        assert_eq!(ImageFormat::sniff(b""), None);
    }

    #[test]
    fn test_jpeg_is_unsupported() {
        let err = decode_image(&[0xFF, 0xD8, 0xFF, 0xE0, 0, 0]).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat("jpeg")));
    }

    #[test]
    fn test_unknown_format() {
        let err = decode_image(b"hello world").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat("unknown")));
    }

    #[test]
    fn test_truncated_png_is_a_decode_error() {
        let mut bytes = png_bytes(2, 1, png::ColorType::Rgba, &[0; 8]);
        bytes.truncate(20);
        assert!(matches!(decode_image(&bytes), Err(AppError::PngDecode(_))));
    }

    #[test]
    fn test_rgba_png_is_truecolor() {
        let bytes = png_bytes(2, 1, png::ColorType::Rgba, &[255, 0, 0, 255, 0, 0, 0, 0]);
        let (source, format) = decode_image(&bytes).unwrap();

        assert_eq!(format, ImageFormat::Png);
        assert!(matches!(source, PixelSource::Truecolor(_)));
        assert_eq!(source.at(0, 0), Some(Rgba::opaque_u8(255, 0, 0)));
        assert_eq!(source.at(1, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_rgb_png_is_opaque() {
        let bytes = png_bytes(1, 1, png::ColorType::Rgb, &[10, 20, 30]);
        let (source, _) = decode_image(&bytes).unwrap();
        assert_eq!(source.at(0, 0), Some(Rgba::opaque_u8(10, 20, 30)));
    }

    #[test]
    fn test_grayscale_png() {
        let bytes = png_bytes(2, 1, png::ColorType::Grayscale, &[0, 200]);
        let (source, _) = decode_image(&bytes).unwrap();
        assert_eq!(source.at(1, 0), Some(Rgba::opaque_u8(200, 200, 200)));
    }

    #[test]
    fn test_indexed_png_stays_paletted() {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, 3, 1);
            encoder.set_color(png::ColorType::Indexed);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_palette(vec![255, 0, 0, 0, 0, 0, 0, 0, 255]);
            encoder.set_trns(vec![255, 0]);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0, 1, 2]).unwrap();
        }

        let (source, _) = decode_image(&buf).unwrap();
        let palette = source.native_palette().unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.first_transparent(), Some(1));
        assert_eq!(source.at(2, 0), Some(Rgba::opaque_u8(0, 0, 255)));
    }

    #[test]
    fn test_gif_keeps_frame_rectangle_and_transparency() {
        let mut buf = Vec::new();
        {
            let mut encoder = gif::Encoder::new(&mut buf, 8, 8, &[1, 2, 3, 4, 5, 6]).unwrap();
            let frame = gif::Frame {
                left: 2,
                top: 3,
                width: 2,
                height: 1,
                transparent: Some(1),
                buffer: std::borrow::Cow::Borrowed(&[0, 1]),
                ..gif::Frame::default()
            };
            encoder.write_frame(&frame).unwrap();
        }

        let (source, format) = decode_image(&buf).unwrap();
        assert_eq!(format, ImageFormat::Gif);
        assert_eq!(source.bounds(), Bounds::new(2, 3, 2, 1));
        assert_eq!(source.at(2, 3), Some(Rgba::opaque_u8(1, 2, 3)));
        assert_eq!(source.at(3, 3), Some(Rgba::from_u8(4, 5, 6, 0)));
    }

    #[test]
    fn test_four_bit_indexed_png_stays_paletted() {
        // Entry 3 repeats entry 0; both must survive.
        let plte = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 0, 0];
        let bytes = indexed_png(4, 1, png::BitDepth::Four, &plte, &[0x01, 0x23]);

        let (source, _) = decode_image(&bytes).unwrap();
        let PixelSource::Paletted(image) = &source else {
            panic!("expected a paletted source");
        };
        assert_eq!(image.palette().len(), 4);
        assert_eq!(image.indices(), &[0, 1, 2, 3]);
        assert_eq!(image.palette().to_rgb_bytes(), plte.to_vec());
    }

    #[test]
    fn test_one_bit_indexed_png_rows_are_unpacked() {
        // 10 pixels per row: two bytes per row, the second one padded.
        let data = [0b1010_1010, 0b1100_0000, 0b0000_0000, 0b0100_0000];
        let bytes = indexed_png(10, 2, png::BitDepth::One, &[0, 0, 0, 255, 255, 255], &data);

        let (source, _) = decode_image(&bytes).unwrap();
        let PixelSource::Paletted(image) = &source else {
            panic!("expected a paletted source");
        };
        assert_eq!(
            image.indices(),
            &[1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]
        );
    }

    #[test]
    fn test_two_bit_indexed_png_reencodes_to_same_gif() {
        let plte = [10, 10, 10, 20, 20, 20, 30, 30, 30];
        let bytes = indexed_png(3, 1, png::BitDepth::Two, &plte, &[0b0001_1000]);

        let (source, _) = decode_image(&bytes).unwrap();
        let options = gif_quant::EncodeOptions::new();
        let first = gif_quant::encode_gif(&source, &options).unwrap();
        let raster = gif_quant::quantize(&source, &options).unwrap();
        assert_eq!(raster.indices(), &[0, 1, 2]);
        assert_eq!(raster.palette().to_rgb_bytes(), plte.to_vec());

        let (again, _) = decode_image(&first).unwrap();
        assert_eq!(gif_quant::encode_gif(&again, &options).unwrap(), first);
    }
}
