//! Pixel sources the encoder reads from.
//!
//! A [`PixelSource`] is either truecolor (one [`Rgba`] per pixel) or already
//! paletted (indices into a bounded [`Palette`]). The variant is inspected
//! once, at the top of the pipeline: paletted sources bypass quantization.

mod bounds;
mod paletted;
mod truecolor;

pub use bounds::Bounds;
pub use paletted::PalettedImage;
pub use truecolor::TruecolorImage;

use crate::color::Rgba;
use crate::palette::Palette;

/// Decoded image handed to the encoder.
#[derive(Debug, Clone)]
pub enum PixelSource {
    /// Direct color, quantized by the palette pipeline.
    Truecolor(TruecolorImage),
    /// Native palette, encoded as-is.
    Paletted(PalettedImage),
}

impl PixelSource {
    /// Rectangle covered by the image.
    pub fn bounds(&self) -> Bounds {
        match self {
            PixelSource::Truecolor(image) => image.bounds(),
            PixelSource::Paletted(image) => image.bounds(),
        }
    }

    /// Color at absolute coordinates, `None` outside the bounds.
    pub fn at(&self, x: i32, y: i32) -> Option<Rgba> {
        match self {
            PixelSource::Truecolor(image) => image.at(x, y),
            PixelSource::Paletted(image) => image.at(x, y),
        }
    }

    /// The native palette, when the source already has one.
    pub fn native_palette(&self) -> Option<&Palette> {
        match self {
            PixelSource::Truecolor(_) => None,
            PixelSource::Paletted(image) => Some(image.palette()),
        }
    }

    /// All pixel colors in row-major order.
    pub fn colors(&self) -> Box<dyn Iterator<Item = Rgba> + '_> {
        match self {
            PixelSource::Truecolor(image) => Box::new(image.pixels().iter().copied()),
            PixelSource::Paletted(image) => {
                let palette = image.palette();
                Box::new(image.indices().iter().map(move |&i| palette.color(i)))
            }
        }
    }
}

impl From<TruecolorImage> for PixelSource {
    fn from(image: TruecolorImage) -> Self {
        PixelSource::Truecolor(image)
    }
}

impl From<PalettedImage> for PixelSource {
    fn from(image: PalettedImage) -> Self {
        PixelSource::Paletted(image)
    }
}
