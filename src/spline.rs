use crate::piece::Piece;

/// Value of the basis function at the midpoint of its support.
pub const PEAK_VALUE: f64 = 0.75;

/// Value of the basis function at both interior knots.
pub const INTERIOR_KNOT_VALUE: f64 = 0.5;

/// Quadratic cardinal B-spline `B_i^2` with unit spaced knots `i-1, i, i+1, i+2`.
///
/// The function is stored as three quadratic pieces, each in a local variable `t` measured
/// from the knot where the piece is simplest, so the coefficients do not depend on `i`:
/// - `[i-1, i]`: `0.5 t^2` with `t = x - (i-1)`,
/// - `[i, i+1]`: `-t^2 + t + 0.5` with `t = x - i`,
/// - `[i+1, i+2]`: `0.5 t^2` with `t = x - (i+2)`.
///
/// The outer pieces vanish at their origin, so values near the support ends keep full
/// relative precision.
#[derive(Debug, Clone)]
pub struct QuadraticBSpline {
    reference_index: f64,
    pieces: [Piece; 3],
}

impl QuadraticBSpline {
    pub fn new(reference_index: f64) -> Self {
        let i = reference_index;
        let pieces = [
            Piece::new(i - 1.0, i, i - 1.0, vec![0.0, 0.0, 0.5]),
            Piece::new(i, i + 1.0, i, vec![0.5, 1.0, -1.0]),
            Piece::new(i + 1.0, i + 2.0, i + 2.0, vec![0.0, 0.0, 0.5]),
        ];
        QuadraticBSpline { reference_index, pieces }
    }

    pub fn reference_index(&self) -> f64 {
        self.reference_index
    }

    pub fn pieces(&self) -> &[Piece; 3] {
        &self.pieces
    }

    /// Knots `[i-1, i, i+1, i+2]`.
    pub fn knots(&self) -> [f64; 4] {
        let i = self.reference_index;
        [i - 1.0, i, i + 1.0, i + 2.0]
    }

    /// Support interval `(i-1, i+2)`, both ends included.
    pub fn support(&self) -> (f64, f64) {
        (self.pieces[0].get_start(), self.pieces[2].get_end())
    }

    /// Location and value of the maximum, `(i + 0.5, 0.75)`.
    pub fn peak(&self) -> (f64, f64) {
        (self.reference_index + 0.5, PEAK_VALUE)
    }

    pub fn is_in_support(&self, x: f64) -> bool {
        let (start, end) = self.support();
        start <= x && x <= end
    }

    /// Index of the piece whose domain holds `x`. A shared knot belongs to the left piece.
    /// Returns `None` outside of the support.
    pub fn piece_index(&self, x: f64) -> Option<usize> {
        if !self.is_in_support(x) {
            return None;
        }
        let relative_x = x - self.pieces[0].get_start();
        let index = (relative_x.ceil() as isize - 1).clamp(0, self.pieces.len() as isize - 1);
        Some(index as usize)
    }

    /// Value of the basis function at `x`. Zero outside of the support.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self.piece_index(x) {
            Some(index) => self.evaluate_piece(index, x),
            None if x.is_nan() => f64::NAN,
            None => 0.0,
        }
    }

    /// Evaluates every point of `x_values`, preserving length and order.
    pub fn batch_evaluate(&self, x_values: &[f64]) -> Vec<f64> {
        let mut results = Vec::with_capacity(x_values.len());
        let mut index = 0;

        for &x in x_values {
            match self.find_piece_index_with_hint(index, x) {
                Some(found) => {
                    index = found;
                    results.push(self.evaluate_piece(index, x));
                }
                None if x.is_nan() => results.push(f64::NAN),
                None => results.push(0.0),
            }
        }
        results
    }

    /// First derivative at `x`. Zero outside of the support.
    pub fn derivative(&self, x: f64) -> f64 {
        match self.piece_index(x) {
            Some(index) => self.pieces[index].derivative(x),
            None if x.is_nan() => f64::NAN,
            None => 0.0,
        }
    }

    fn evaluate_piece(&self, index: usize, x: f64) -> f64 {
        self.pieces[index].evaluate(x)
    }

    fn find_piece_index_with_hint(&self, index_hint: usize, x: f64) -> Option<usize> {
        if self.pieces[index_hint].contains(x) {
            return Some(index_hint);
        }
        if index_hint + 1 < self.pieces.len() && self.pieces[index_hint + 1].contains(x) {
            return Some(index_hint + 1);
        }
        self.piece_index(x)
    }
}

impl Default for QuadraticBSpline {
    fn default() -> Self {
        QuadraticBSpline::new(0.0)
    }
}
