//! Error types for palette operations

use thiserror::Error;

/// Error type for palette and paletted-image validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// No colors provided where at least one is required
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// More entries than an indexed container can address
    #[error("palette has {len} colors (max 256)")]
    TooManyColors {
        /// Number of colors supplied
        len: usize,
    },

    /// A raster cell refers past the end of the palette
    #[error("palette index {index} out of range for {len}-color palette")]
    IndexOutOfRange {
        /// Offending index
        index: u8,
        /// Palette length
        len: usize,
    },
}
