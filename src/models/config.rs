use gif_quant::{Ditherer, EncodeOptions, PaletteStrategy};
use serde::Deserialize;
use std::path::Path;

use crate::error::AppError;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// GIF encoder defaults
    #[serde(default)]
    pub gif: GifConfig,
}

/// Defaults for the `gif` and `palette` commands
///
/// Every field is optional; anything left unset falls back to the encoder's
/// own default.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct GifConfig {
    /// Palette size (out-of-range values mean 256)
    #[serde(default)]
    pub colors: Option<usize>,

    /// Ditherer name, e.g. "floyd-steinberg" or "none"
    #[serde(default)]
    pub dither: Option<String>,

    /// Palette strategy name: "frequency" or "plan9"
    #[serde(default)]
    pub palette: Option<String>,
}

impl AppConfig {
    /// Load configuration from `path`, or use defaults when there is none.
    ///
    /// A file that cannot be read or parsed is logged and ignored.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Encoder options described by this configuration
    pub fn encode_options(&self) -> Result<EncodeOptions, AppError> {
        let mut options = EncodeOptions::new();
        if let Some(colors) = self.gif.colors {
            options = options.num_colors(colors);
        }
        if let Some(dither) = &self.gif.dither {
            options = options.ditherer(dither.parse::<Ditherer>()?);
        }
        if let Some(palette) = &self.gif.palette {
            options = options.palette_strategy(palette.parse::<PaletteStrategy>()?);
        }
        Ok(options)
    }
}
