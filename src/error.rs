use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Failures of the presentation step.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Invalid plot configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Drawing the figure failed: {0}")]
    Render(#[from] DrawingAreaErrorKind<std::io::Error>),

    #[error("Rendered SVG could not be parsed: {0}")]
    SvgParse(#[from] usvg::Error),

    #[error("SVG to PDF conversion failed: {0}")]
    PdfConversion(String),

    #[error("Could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while loading or validating [`PlotConfig`](crate::PlotConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0}")]
    Invalid(String),
}
