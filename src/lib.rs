//! Quadratic cardinal B-spline basis function `B_i^2` with knots `i-1, i, i+1, i+2`,
//! and a presentation step exporting its plot as a PDF document.
//!
//! # Example
//! ```
//! use quadratic_bspline::QuadraticBSpline;
//! use assert_approx_eq::assert_approx_eq;
//!
//! let spline = QuadraticBSpline::new(0.0);
//!
//! assert_approx_eq!(0.0, spline.evaluate(-1.0), 1e-12);
//! assert_approx_eq!(0.5, spline.evaluate(0.0), 1e-12);
//! assert_approx_eq!(0.75, spline.evaluate(0.5), 1e-12);
//! assert_approx_eq!(0.0, spline.evaluate(3.0), 1e-12);
//!
//! let values = spline.batch_evaluate(&[-0.5, 1.5]);
//! assert_approx_eq!(values[0], values[1], 1e-12);
//! ```

mod piece;
mod polynomial;
mod sampling;
mod spline;

pub mod config;
pub mod error;
pub mod plot;

pub use config::PlotConfig;
pub use error::{ConfigError, PlotError};
pub use piece::Piece;
pub use sampling::{linspace, sample_pieces, Curve, DEFAULT_SAMPLES_PER_PIECE};
pub use spline::{QuadraticBSpline, INTERIOR_KNOT_VALUE, PEAK_VALUE};
