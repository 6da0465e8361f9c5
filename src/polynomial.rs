/// Polynomial in power basis, `coefficients[k]` multiplies `t^k`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {

    pub fn new(coefficients: Vec<f64>) -> Self {
        Polynomial { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn evaluate(&self, t: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |result, coefficient| result * t + coefficient)
    }

    pub fn derivative(&self) -> Polynomial {
        let coefficients = self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(power, coefficient)| power as f64 * coefficient)
            .collect();
        Polynomial::new(coefficients)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn evaluate_middle_piece() {
        let eps = 1e-12;
        // -t^2 + t + 0.5
        let polynomial = Polynomial::new(vec![0.5, 1.0, -1.0]);

        assert_approx_eq!(polynomial.evaluate(0.0), 0.5, eps);
        assert_approx_eq!(polynomial.evaluate(0.5), 0.75, eps);
        assert_approx_eq!(polynomial.evaluate(1.0), 0.5, eps);
        assert_approx_eq!(polynomial.evaluate(0.2), 0.66, eps);
    }

    #[test]
    fn evaluate_outer_piece() {
        // 0.5 t^2
        let polynomial = Polynomial::new(vec![0.0, 0.0, 0.5]);

        assert_eq!(0.0, polynomial.evaluate(0.0));
        assert_eq!(0.5, polynomial.evaluate(1.0));
        assert_eq!(0.5, polynomial.evaluate(-1.0));
        assert_eq!(0.03125, polynomial.evaluate(0.25));
        assert_approx_eq!(polynomial.evaluate(1e-9), 5e-19, 1e-30);
    }

    #[test]
    fn derivative() {
        let eps = 1e-12;
        let polynomial = Polynomial::new(vec![0.5, 1.0, -1.0]);
        let derivative = polynomial.derivative();

        assert_eq!(vec![1.0, -2.0], derivative.coefficients());
        assert_approx_eq!(derivative.evaluate(0.5), 0.0, eps);
        assert_approx_eq!(derivative.evaluate(0.0), 1.0, eps);
    }

    #[test]
    fn derivative_of_constant_is_empty() {
        let constant = Polynomial::new(vec![3.0]);
        let derivative = constant.derivative();

        assert!(derivative.coefficients().is_empty());
        assert_eq!(0.0, derivative.evaluate(10.0));
    }
}
