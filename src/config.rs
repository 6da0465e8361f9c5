//! Optional plot settings read from a TOML file in the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sampling::DEFAULT_SAMPLES_PER_PIECE;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "bspline_plot.toml";

/// Name of the exported document.
pub const DEFAULT_OUTPUT: &str = "B_spline_plot.pdf";

/// Settings of the plot run. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// Reference knot index `i` of the plotted basis function.
    pub reference_index: f64,
    /// Uniform samples per piece, both domain ends included.
    pub samples_per_piece: usize,
    /// Destination of the PDF document.
    pub output: PathBuf,
    /// Page width in points.
    pub width: u32,
    /// Page height in points.
    pub height: u32,
    pub font_family: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            reference_index: 0.0,
            samples_per_piece: DEFAULT_SAMPLES_PER_PIECE,
            output: PathBuf::from(DEFAULT_OUTPUT),
            // 8 x 6 inches at 72 points per inch
            width: 576,
            height: 432,
            font_family: "sans-serif".to_string(),
        }
    }
}

impl PlotConfig {
    /// Loads the config, falling back to defaults when the file is missing or malformed.
    pub fn load_from_file(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => {
                log::info!("Plot settings loaded from: {}", path.display());
                config
            }
            Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings file found, using defaults");
                Self::default()
            }
            Err(e) => {
                log::warn!("Settings file unusable, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Loads and validates the config, surfacing every failure.
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: PlotConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.reference_index.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "reference_index must be finite, got {}",
                self.reference_index
            )));
        }
        if self.samples_per_piece < 2 {
            return Err(ConfigError::Invalid(format!(
                "samples_per_piece must be at least 2, got {}",
                self.samples_per_piece
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "page size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Path of the config file inside the working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }
}
