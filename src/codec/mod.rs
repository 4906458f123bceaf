pub mod decode;
pub mod png_encode;

pub use decode::{decode_image, ImageFormat};
pub use png_encode::encode_png;
