//! Plots the quadratic cardinal B-spline `B_i^2` on its support and saves it as a PDF.

use anyhow::Context;
use quadratic_bspline::{plot, PlotConfig, QuadraticBSpline};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = PlotConfig::load_from_file(&PlotConfig::config_path());
    let spline = QuadraticBSpline::new(config.reference_index);
    log::info!(
        "Plotting B_i^2 for i = {} with {} samples per piece",
        spline.reference_index(),
        config.samples_per_piece
    );

    let output = plot::export_pdf(&spline, &config)
        .with_context(|| format!("Failed to save plot to {}", config.output.display()))?;

    println!("Saved plot to {}", output.display());
    Ok(())
}
