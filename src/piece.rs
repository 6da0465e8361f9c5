use crate::polynomial::Polynomial;

/// Piece represents one polynomial of a piecewise function bound to its closed domain interval.
/// - `start` - left end of the domain,
/// - `end` - right end of the domain,
/// - `origin` - point at which the local variable `t = x - origin` is zero,
/// - `polynomial` - polynomial in the local variable `t`.
#[derive(Debug, Clone)]
pub struct Piece {
    start: f64,
    end: f64,
    origin: f64,
    polynomial: Polynomial,
}

impl Piece {

    pub(crate) fn new(start: f64, end: f64, origin: f64, coefficients: Vec<f64>) -> Self {
        Piece { start, end, origin, polynomial: Polynomial::new(coefficients) }
    }

    pub fn get_start(&self) -> f64 {
        self.start
    }

    pub fn get_end(&self) -> f64 {
        self.end
    }

    /// Domain of the piece as `(start, end)`.
    pub fn get_domain(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    pub fn get_origin(&self) -> f64 {
        self.origin
    }

    /// Coefficients in the local variable `t = x - origin`, lowest power first.
    pub fn get_coefficients(&self) -> &[f64] {
        self.polynomial.coefficients()
    }

    /// Closed interval membership test.
    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x <= self.end
    }

    /// Evaluates the piece polynomial at `x`. Does not check domain membership.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.polynomial.evaluate(x - self.origin)
    }

    /// Evaluates the first derivative of the piece polynomial at `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        self.polynomial.derivative().evaluate(x - self.origin)
    }
}

impl PartialOrd for Piece {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.start.total_cmp(&other.start))
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}
