//! Test images built in memory.

use std::borrow::Cow;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const GREEN: [u8; 4] = [0, 255, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];
pub const CLEAR: [u8; 4] = [0, 0, 0, 0];

/// Encode RGBA pixels as an 8-bit RGBA PNG
pub fn rgba_png(width: u32, height: u32, pixels: &[[u8; 4]]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize);
    let data: Vec<u8> = pixels.iter().flatten().copied().collect();

    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(&data).expect("PNG data");
    }
    buf
}

/// 2x2 image: three red pixels and one fully transparent pixel
pub fn red_square_with_hole() -> Vec<u8> {
    rgba_png(2, 2, &[RED, RED, RED, CLEAR])
}

/// 16x16 gradient with 256 distinct opaque colors
pub fn gradient_png() -> Vec<u8> {
    let pixels: Vec<[u8; 4]> = (0..256u32)
        .map(|i| [i as u8, (i * 7 % 256) as u8, 255 - i as u8, 255])
        .collect();
    rgba_png(16, 16, &pixels)
}

/// Single-frame GIF with the given RGB table and indices
pub fn gif_file(width: u16, height: u16, table: &[u8], transparent: Option<u8>, indices: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = gif::Encoder::new(&mut buf, width, height, table).expect("GIF header");
        let frame = gif::Frame {
            width,
            height,
            transparent,
            buffer: Cow::Borrowed(indices),
            ..gif::Frame::default()
        };
        encoder.write_frame(&frame).expect("GIF frame");
    }
    buf
}

/// Minimal JPEG header bytes
pub fn jpeg_header() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00]
}

/// Encode packed palette indices as an indexed PNG at `depth`
pub fn indexed_png(width: u32, height: u32, depth: png::BitDepth, plte: &[u8], data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(depth);
        encoder.set_palette(plte.to_vec());
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    buf
}
