use gif_quant::{EncodeError, ParseOptionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(&'static str),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("GIF decode error: {0}")]
    GifDecode(#[from] gif::DecodingError),

    #[error("GIF contains no image frame")]
    EmptyGif,

    #[error("Indexed image has no color table")]
    MissingColorTable,

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Config error: {0}")]
    Config(#[from] ParseOptionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
