use crate::spline::QuadraticBSpline;

/// Number of samples per piece used for plotting.
pub const DEFAULT_SAMPLES_PER_PIECE: usize = 100;

/// Ordered `(x, y)` samples of one piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterates over the samples as `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// `number_of_points` evenly spaced values from `start` to `end`, both included.
///
/// # Example
/// ```
/// use quadratic_bspline::linspace;
///
/// assert_eq!(vec![0.0, 0.25, 0.5, 0.75, 1.0], linspace(0.0, 1.0, 5));
/// assert_eq!(vec![3.0], linspace(3.0, 4.0, 1));
/// assert!(linspace(3.0, 4.0, 0).is_empty());
/// ```
pub fn linspace(start: f64, end: f64, number_of_points: usize) -> Vec<f64> {
    match number_of_points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = number_of_points - 1;
            let step = (end - start) / last as f64;
            let mut values: Vec<f64> = (0..last).map(|k| start + step * k as f64).collect();
            values.push(end);
            values
        }
    }
}

/// Samples every piece of `spline` on its own uniform grid of `samples_per_piece` points.
pub fn sample_pieces(spline: &QuadraticBSpline, samples_per_piece: usize) -> Vec<Curve> {
    spline
        .pieces()
        .iter()
        .map(|piece| {
            let (start, end) = piece.get_domain();
            let xs = linspace(start, end, samples_per_piece);
            let ys = spline.batch_evaluate(&xs);
            Curve { xs, ys }
        })
        .collect()
}
