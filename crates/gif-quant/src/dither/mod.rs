//! Indexed rasterization with error diffusion.
//!
//! Maps every pixel of a truecolor image onto the finished palette in
//! raster-scan order (left to right, top to bottom):
//!
//! 1. Pixels that are not fully opaque go straight to the transparent slot.
//!    They neither consume accumulated error nor produce any.
//! 2. Opaque pixels take on the error diffused into them, pick the nearest
//!    non-transparent palette entry, and push their own quantization error
//!    to not-yet-visited neighbors through the selected [`Kernel`].
//!
//! Error arithmetic runs on 16-bit channel values in `i32`.

mod kernel;

pub use kernel::*;

use std::fmt;
use std::str::FromStr;

use crate::api::ParseOptionError;
use crate::color::Rgba;
use crate::palette::{ColorMatcher, Palette};
use crate::source::TruecolorImage;

/// Dithering algorithm used for opaque pixels.
///
/// # Example
///
/// ```
/// use gif_quant::Ditherer;
///
/// let d: Ditherer = "floyd-steinberg".parse().unwrap();
/// assert_eq!(d, Ditherer::FloydSteinberg);
/// assert_eq!(Ditherer::default(), Ditherer::FloydSteinberg);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ditherer {
    /// Floyd-Steinberg error diffusion (100% propagation, 4 neighbors).
    #[default]
    FloydSteinberg,

    /// Jarvis-Judice-Ninke error diffusion (100% propagation, 12 neighbors).
    JarvisJudiceNinke,

    /// Sierra (full) error diffusion (100% propagation, 10 neighbors).
    Sierra,

    /// Atkinson error diffusion (75% propagation).
    Atkinson,

    /// Plain nearest-color mapping, no diffusion.
    None,
}

impl Ditherer {
    const NAMES: &'static str = "floyd-steinberg, jarvis-judice-ninke, sierra, atkinson, none";

    /// The diffusion kernel, `None` for [`Ditherer::None`].
    pub fn kernel(self) -> Option<&'static Kernel> {
        match self {
            Ditherer::FloydSteinberg => Some(&FLOYD_STEINBERG),
            Ditherer::JarvisJudiceNinke => Some(&JARVIS_JUDICE_NINKE),
            Ditherer::Sierra => Some(&SIERRA),
            Ditherer::Atkinson => Some(&ATKINSON),
            Ditherer::None => None,
        }
    }
}

impl FromStr for Ditherer {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "floyd-steinberg" | "fs" => Ok(Ditherer::FloydSteinberg),
            "jarvis-judice-ninke" | "jjn" => Ok(Ditherer::JarvisJudiceNinke),
            "sierra" => Ok(Ditherer::Sierra),
            "atkinson" => Ok(Ditherer::Atkinson),
            "none" => Ok(Ditherer::None),
            other => Err(ParseOptionError {
                kind: "ditherer",
                value: other.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

impl fmt::Display for Ditherer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Ditherer::FloydSteinberg => "floyd-steinberg",
            Ditherer::JarvisJudiceNinke => "jarvis-judice-ninke",
            Ditherer::Sierra => "sierra",
            Ditherer::Atkinson => "atkinson",
            Ditherer::None => "none",
        })
    }
}

/// Error buffer for efficient error diffusion.
///
/// Keeps only the rows the kernel can reach: `rows[0]` is the current row,
/// `rows[1]` the next one, and so on.
#[derive(Debug)]
pub struct ErrorBuffer {
    rows: Vec<Vec<[i32; 3]>>,
    width: usize,
}

impl ErrorBuffer {
    /// Create a buffer `row_depth` rows deep.
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth.max(1)).map(|_| vec![[0; 3]; width]).collect(),
            width,
        }
    }

    /// Error accumulated so far for column `x` of the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> [i32; 3] {
        self.rows[0][x]
    }

    /// Add error to column `x`, `row_offset` rows below the current one.
    ///
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: [i32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            for c in 0..3 {
                self.rows[row_offset][x][c] += error[c];
            }
        }
    }

    /// Advance to the next row.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0; 3]);
        }
    }
}

/// Map `image` onto `palette`, one index per pixel in row-major order.
///
/// Pixels that are not fully opaque receive `transparent_index`, or 0 when
/// the palette has no transparent slot.
pub(crate) fn rasterize(
    image: &TruecolorImage,
    palette: &Palette,
    transparent_index: Option<u8>,
    ditherer: Ditherer,
) -> Vec<u8> {
    let bounds = image.bounds();
    let width = bounds.width as usize;
    let height = bounds.height as usize;
    let pixels = image.pixels();
    let transparent = transparent_index.unwrap_or(0);

    let matcher = ColorMatcher::new(palette);
    let kernel = ditherer.kernel();
    let mut error_buf = ErrorBuffer::new(width, kernel.map_or(1, |k| k.max_dy + 1));
    let mut output = vec![0u8; width * height];

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let pixel = pixels[idx];

            if !pixel.is_opaque() {
                output[idx] = transparent;
                continue;
            }

            let accumulated = error_buf.get_accumulated(x);
            let rgb = pixel.rgb_i32();
            let target = [
                clamp_channel(rgb[0] + accumulated[0]),
                clamp_channel(rgb[1] + accumulated[1]),
                clamp_channel(rgb[2] + accumulated[2]),
            ];

            let nearest = matcher.nearest(target);
            output[idx] = nearest;

            let Some(kernel) = kernel else {
                continue;
            };
            let chosen = palette.color(nearest).rgb_i32();
            let error = [
                target[0] - chosen[0],
                target[1] - chosen[1],
                target[2] - chosen[2],
            ];
            if error == [0; 3] {
                continue;
            }

            let divisor = kernel.divisor as i32;
            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                let ny = y + dy as usize;
                if nx >= 0 && (nx as usize) < width && ny < height {
                    let weight = weight as i32;
                    error_buf.add_error(
                        nx as usize,
                        dy as usize,
                        [
                            error[0] * weight / divisor,
                            error[1] * weight / divisor,
                            error[2] * weight / divisor,
                        ],
                    );
                }
            }
        }
        error_buf.advance_row();
    }

    output
}

#[inline]
fn clamp_channel(value: i32) -> i32 {
    value.clamp(0, Rgba::MAX as i32)
}
