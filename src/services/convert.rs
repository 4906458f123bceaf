use gif_quant::EncodeOptions;
use std::path::{Path, PathBuf};

use crate::codec::{decode_image, encode_png};
use crate::error::AppError;

const OUTPUT_SUFFIX: &str = "_imgedit";

/// Decode `input` and re-encode it as a GIF.
pub fn convert_to_gif(input: &[u8], options: &EncodeOptions) -> Result<Vec<u8>, AppError> {
    let (source, format) = decode_image(input)?;
    let bytes = gif_quant::encode_gif(&source, options)?;
    tracing::info!(
        from = format.name(),
        width = source.bounds().width,
        height = source.bounds().height,
        len = bytes.len(),
        "Converted to GIF"
    );
    Ok(bytes)
}

/// Decode `input` and re-encode it as an RGBA PNG.
pub fn convert_to_png(input: &[u8]) -> Result<Vec<u8>, AppError> {
    let (source, format) = decode_image(input)?;
    let bytes = encode_png(&source)?;
    tracing::info!(from = format.name(), len = bytes.len(), "Converted to PNG");
    Ok(bytes)
}

/// Read an input image file.
pub fn read_image_file(path: &Path) -> Result<Vec<u8>, AppError> {
    Ok(std::fs::read(path)?)
}

/// Write a finished image in one call, so a failed encode never leaves a file.
pub fn write_image_file(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    std::fs::write(path, bytes)?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "Wrote output");
    Ok(())
}

/// Output path used when none is given: `<stem>_imgedit.<extension>` next to
/// the input, or `<name>_imgedit` when the input has no extension.
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    let file_name = match (input.file_stem(), input.extension()) {
        (Some(stem), Some(_)) => format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy()),
        (Some(stem), None) => format!("{}{OUTPUT_SUFFIX}", stem.to_string_lossy()),
        (None, _) => format!("image{OUTPUT_SUFFIX}.{extension}"),
    };
    input.with_file_name(file_name)
}
