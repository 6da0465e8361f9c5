//! Presentation step: draws the sampled basis function and exports it as a PDF document.
//!
//! The figure is drawn with the plotters SVG backend into memory and then converted
//! to a vector PDF page.

use std::ops::Range;
use std::path::PathBuf;

use plotters::coord::ranged1d::{KeyPointHint, NoDefaultFormatting, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::PlotConfig;
use crate::error::PlotError;
use crate::sampling::{sample_pieces, Curve};
use crate::spline::{QuadraticBSpline, INTERIOR_KNOT_VALUE};

pub const TITLE: &str = "Quadratic B-spline B_i^2(x) for t_i = i";

const Y_RANGE: (f64, f64) = (-0.1, 0.9);
const Y_TICKS: [f64; 4] = [0.0, 0.25, 0.5, 0.75];
/// Horizontal padding on each side, as a fraction of the support width.
const X_MARGIN: f64 = 0.05;
/// Length of a dash and of the gap after it, in data units.
const DASH_LENGTH: f64 = 0.03;
/// Distance from an integer offset still labelled as a knot.
const KNOT_LABEL_TOLERANCE: f64 = 1e-9;

/// Tick label of the knot at `i + offset`, written relative to `i`.
/// Offsets away from an integer are not knots and get no label.
///
/// # Example
/// ```
/// use quadratic_bspline::plot::knot_label;
///
/// assert_eq!(Some("i-1".to_string()), knot_label(-1.0));
/// assert_eq!(Some("i".to_string()), knot_label(0.0));
/// assert_eq!(Some("i+2".to_string()), knot_label(2.0));
/// assert_eq!(None, knot_label(-0.5));
/// ```
pub fn knot_label(offset: f64) -> Option<String> {
    let rounded = offset.round();
    if (offset - rounded).abs() > KNOT_LABEL_TOLERANCE {
        return None;
    }
    match rounded as i64 {
        0 => Some("i".to_string()),
        offset => Some(format!("i{:+}", offset)),
    }
}

/// Linear axis whose ticks are a fixed list of values.
struct TickAxis {
    range: RangedCoordf64,
    ticks: Vec<f64>,
}

impl TickAxis {
    fn new(range: Range<f64>, ticks: &[f64]) -> Self {
        TickAxis { range: range.into(), ticks: ticks.to_vec() }
    }
}

impl Ranged for TickAxis {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.range.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.range.range()
    }
}

impl ValueFormatter<f64> for TickAxis {
    fn format(value: &f64) -> String {
        format!("{:.2}", value)
    }
}

/// Draws the figure into an SVG document held in memory.
pub fn render_svg(spline: &QuadraticBSpline, config: &PlotConfig) -> Result<String, PlotError> {
    config.validate()?;
    let curves = sample_pieces(spline, config.samples_per_piece);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        draw_figure(&root, spline, &curves, &config.font_family)?;
        root.present()?;
    }
    log::debug!("Rendered {} curves into {} bytes of SVG", curves.len(), svg.len());
    Ok(svg)
}

/// Converts an SVG document into a single page PDF document.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, PlotError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    if options.fontdb.faces().next().is_none() {
        log::warn!("No system fonts found, text will be missing from the PDF");
    }

    let tree = usvg::Tree::from_str(svg, &options)?;
    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| PlotError::PdfConversion(e.to_string()))
}

/// Renders the figure and writes it to `config.output`, replacing an existing file.
pub fn export_pdf(spline: &QuadraticBSpline, config: &PlotConfig) -> Result<PathBuf, PlotError> {
    let svg = render_svg(spline, config)?;
    let pdf = svg_to_pdf(&svg)?;

    std::fs::write(&config.output, &pdf).map_err(|source| PlotError::Io {
        path: config.output.clone(),
        source,
    })?;
    log::info!("Wrote {} bytes to {}", pdf.len(), config.output.display());
    Ok(config.output.clone())
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spline: &QuadraticBSpline,
    curves: &[Curve],
    font: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let i = spline.reference_index();
    let knots = spline.knots();
    let (start, end) = spline.support();
    let pad = X_MARGIN * (end - start);
    let (x_min, x_max) = (start - pad, end + pad);

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, (font, 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            TickAxis::new(x_min..x_max, &knots),
            TickAxis::new(Y_RANGE.0..Y_RANGE.1, &Y_TICKS),
        )?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("B_i^2(x)")
        .x_label_formatter(&|x| knot_label(*x - i).unwrap_or_default())
        .y_label_formatter(&|y| format!("{:.2}", y))
        .bold_line_style(BLACK.mix(0.15))
        .label_style((font, 14))
        .axis_desc_style((font, 16))
        .draw()?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x_min, 0.0), (x_max, 0.0)],
        BLACK.stroke_width(1),
    )))?;

    let knot_line_style = BLACK.mix(0.45).stroke_width(1);
    chart.draw_series(knots.iter().flat_map(|&knot| {
        dashed_segments(knot, Y_RANGE.0, Y_RANGE.1)
            .into_iter()
            .map(move |segment| PathElement::new(segment.to_vec(), knot_line_style))
    }))?;

    for (index, curve) in curves.iter().enumerate() {
        let series = chart.draw_series(LineSeries::new(curve.points(), BLUE.stroke_width(2)))?;
        if index == 0 {
            series
                .label(format!("B_i^2(x) (for i={})", i))
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));
        }
    }

    let (peak_x, peak_y) = spline.peak();
    let markers = [(i, INTERIOR_KNOT_VALUE), (i + 1.0, INTERIOR_KNOT_VALUE), (peak_x, peak_y)];
    chart.draw_series(markers.iter().map(|&point| Circle::new(point, 4, RED.filled())))?;

    let left_bottom = TextStyle::from((font, 14).into_font()).pos(Pos::new(HPos::Left, VPos::Bottom));
    let center_bottom = TextStyle::from((font, 14).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    let annotations = [
        (" (i, 0.5)", markers[0], &left_bottom),
        (" (i+1, 0.5)", markers[1], &left_bottom),
        ("(i+0.5, 0.75)", markers[2], &center_bottom),
    ];
    chart.draw_series(
        annotations
            .iter()
            .map(|&(text, point, style)| Text::new(text, point, style.clone())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((font, 14))
        .draw()?;

    Ok(())
}

/// Splits the vertical line at `x` from `y_from` to `y_to` into dashes.
fn dashed_segments(x: f64, y_from: f64, y_to: f64) -> Vec<[(f64, f64); 2]> {
    let mut segments = Vec::new();
    let mut y = y_from;
    while y < y_to {
        let dash_end = (y + DASH_LENGTH).min(y_to);
        segments.push([(x, y), (x, dash_end)]);
        y += 2.0 * DASH_LENGTH;
    }
    segments
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    /// `(x, content)` of every non-empty `<text>` element.
    fn svg_texts(svg: &str) -> Vec<(f64, String)> {
        svg.split("<text")
            .skip(1)
            .filter_map(|chunk| {
                let (attributes, rest) = chunk.split_once('>')?;
                let (content, _) = rest.split_once("</text>")?;
                let x = attributes.split_once(" x=\"")?.1.split_once('"')?.0.parse().ok()?;
                Some((x, content.to_string()))
            })
            .filter(|(_, content)| !content.is_empty())
            .collect()
    }

    fn is_knot_label(content: &str) -> bool {
        match content.strip_prefix('i') {
            Some("") => true,
            Some(rest) => {
                (rest.starts_with('+') || rest.starts_with('-')) && rest[1..].parse::<u32>().is_ok()
            }
            None => false,
        }
    }

    #[test]
    fn knot_labels() {
        assert_eq!(Some("i-1".to_string()), knot_label(-1.0));
        assert_eq!(Some("i".to_string()), knot_label(0.0));
        assert_eq!(Some("i+1".to_string()), knot_label(1.0));
        assert_eq!(Some("i+2".to_string()), knot_label(2.0));
        assert_eq!(Some("i+1".to_string()), knot_label(0.9999999999));
        assert_eq!(Some("i-3".to_string()), knot_label(-3.0));
    }

    #[test]
    fn off_knot_offsets_have_no_label() {
        assert_eq!(None, knot_label(-0.5));
        assert_eq!(None, knot_label(0.25));
        assert_eq!(None, knot_label(1.999));
        assert_eq!(None, knot_label(2.15));
    }

    #[test]
    fn x_ticks_sit_on_the_knots() {
        for i in [0.0, 2.0, -0.5] {
            let svg = render_svg(&QuadraticBSpline::new(i), &PlotConfig::default()).unwrap();

            let mut ticks: Vec<(f64, String)> = svg_texts(&svg)
                .into_iter()
                .filter(|(_, content)| is_knot_label(content))
                .collect();
            ticks.sort_by(|a, b| a.0.total_cmp(&b.0));

            let labels: Vec<&str> = ticks.iter().map(|(_, content)| content.as_str()).collect();
            assert_eq!(vec!["i-1", "i", "i+1", "i+2"], labels, "i = {i}");

            // knots are one unit apart, so their tick labels are evenly spaced
            let gaps: Vec<f64> = ticks.windows(2).map(|w| w[1].0 - w[0].0).collect();
            for gap in gaps.iter() {
                assert!(*gap > 0.0);
                assert!((gap - gaps[0]).abs() <= 1.0, "uneven ticks {gaps:?}");
            }
        }
    }

    #[test]
    fn y_ticks_are_fixed() {
        let svg = render_svg(&QuadraticBSpline::default(), &PlotConfig::default()).unwrap();
        let texts: Vec<String> = svg_texts(&svg).into_iter().map(|(_, content)| content).collect();

        for label in ["0.00", "0.25", "0.50", "0.75"] {
            assert!(texts.iter().any(|text| text == label), "missing {label}");
        }
        for label in ["-0.10", "0.10", "0.90", "1.00"] {
            assert!(!texts.iter().any(|text| text == label), "unexpected {label}");
        }
    }

    #[test]
    fn dashes_cover_the_line() {
        let segments = dashed_segments(2.0, -0.1, 0.9);

        assert!(!segments.is_empty());
        assert_approx_eq!(segments[0][0].1, -0.1, 1e-12);
        for segment in segments.iter() {
            assert_eq!(2.0, segment[0].0);
            assert_eq!(2.0, segment[1].0);
            assert!(segment[1].1 > segment[0].1);
            assert!(segment[1].1 <= 0.9);
        }
        for window in segments.windows(2) {
            assert!(window[1][0].1 > window[0][1].1);
        }
    }

    #[test]
    fn svg_contains_figure_text() {
        let spline = QuadraticBSpline::default();
        let svg = render_svg(&spline, &PlotConfig::default()).unwrap();

        assert!(svg.starts_with("<svg") || svg.starts_with("<?xml"));
        assert!(svg.contains(TITLE));
        assert!(svg.contains("B_i^2(x) (for i=0)"));
        for label in ["i-1", "i+1", "i+2", "(i, 0.5)", "(i+1, 0.5)", "(i+0.5, 0.75)"] {
            assert!(svg.contains(label), "missing {label}");
        }
    }

    #[test]
    fn svg_uses_configured_size() {
        let config = PlotConfig { width: 300, height: 200, ..PlotConfig::default() };
        let svg = render_svg(&QuadraticBSpline::new(2.0), &config).unwrap();

        assert!(svg.contains("width=\"300\""));
        assert!(svg.contains("height=\"200\""));
        assert!(svg.contains("(for i=2)"));
    }

    #[test]
    fn invalid_config_is_rejected_before_drawing() {
        let config = PlotConfig { samples_per_piece: 0, ..PlotConfig::default() };
        let result = render_svg(&QuadraticBSpline::default(), &config);

        assert!(matches!(result, Err(PlotError::InvalidConfig(_))));
    }

    #[test]
    fn pdf_header() {
        let svg = render_svg(&QuadraticBSpline::default(), &PlotConfig::default()).unwrap();
        let pdf = svg_to_pdf(&svg).unwrap();

        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn broken_svg_is_parse_error() {
        assert!(matches!(svg_to_pdf("<svg"), Err(PlotError::SvgParse(_))));
    }
}
