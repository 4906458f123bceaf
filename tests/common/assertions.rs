//! Assertion helpers for tests.

use std::io::Cursor;

use pretty_assertions::assert_eq;

use super::cli::CliOutput;

/// A decoded single-frame GIF
#[derive(Debug)]
pub struct DecodedGif {
    pub width: u16,
    pub height: u16,
    pub palette: Vec<u8>,
    pub indices: Vec<u8>,
    pub transparent: Option<u8>,
}

impl DecodedGif {
    /// RGBA value of pixel `i`, alpha 0 on the transparent index
    pub fn rgba(&self, i: usize) -> [u8; 4] {
        let index = self.indices[i];
        let at = index as usize * 3;
        let alpha = if self.transparent == Some(index) { 0 } else { 255 };
        [self.palette[at], self.palette[at + 1], self.palette[at + 2], alpha]
    }
}

/// Assert the command exited successfully
pub fn assert_success(output: &CliOutput) {
    assert!(
        output.success,
        "Expected success. stdout: {}\nstderr: {}",
        output.stdout, output.stderr
    );
}

/// Assert the command failed
pub fn assert_failure(output: &CliOutput) {
    assert!(
        !output.success,
        "Expected failure. stdout: {}\nstderr: {}",
        output.stdout, output.stderr
    );
}

/// Assert `bytes` is a complete GIF89a stream and decode it
pub fn assert_gif(bytes: &[u8]) -> DecodedGif {
    assert!(
        bytes.starts_with(b"GIF89a"),
        "Expected GIF89a header, got {:?}",
        &bytes[..6.min(bytes.len())]
    );
    assert_eq!(bytes.last(), Some(&0x3B), "Missing GIF trailer");

    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(Cursor::new(bytes)).expect("GIF header");
    let palette = decoder.global_palette().expect("global palette").to_vec();
    let frame = decoder.read_next_frame().expect("GIF frame").expect("one frame");

    DecodedGif {
        width: frame.width,
        height: frame.height,
        palette,
        indices: frame.buffer.to_vec(),
        transparent: frame.transparent,
    }
}

/// Assert `bytes` is a PNG and decode it to RGBA8
pub fn assert_png(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG, got {} bytes",
        bytes.len()
    );
    let decoder = png::Decoder::new(Cursor::new(bytes));
    let mut reader = decoder.read_info().expect("PNG header");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("PNG frame");
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}
