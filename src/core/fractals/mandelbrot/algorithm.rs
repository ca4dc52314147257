use crate::core::actions::compute_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Iteration budget per pixel unless configured otherwise.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Squared escape radius: `|z| > 2` without a square root.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time evaluation of `z ← z² + c`, starting from `z = c`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}

impl Default for MandelbrotAlgorithm {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Number of iterations before `|z|² > 4`, or `max_iterations` if the
    /// orbit never escapes within the budget.
    #[inline]
    fn evaluate(&self, c: Complex) -> u32 {
        let mut z = c;

        for iteration in 0..self.max_iterations {
            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                return iteration;
            }
            z = z * z + c;
        }

        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algorithm() -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::default()
    }

    #[test]
    fn test_zero_max_iterations_rejected() {
        assert_eq!(
            MandelbrotAlgorithm::new(0),
            Err(MandelbrotError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_default_budget() {
        assert_eq!(algorithm().max_iterations(), DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_origin_is_in_the_set() {
        assert_eq!(algorithm().evaluate(Complex::new(0.0, 0.0)), DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_period_two_bulb_is_in_the_set() {
        assert_eq!(algorithm().evaluate(Complex::new(-1.0, 0.0)), DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_point_outside_radius_escapes_immediately() {
        assert_eq!(algorithm().evaluate(Complex::new(2.0, 2.0)), 0);
        assert_eq!(algorithm().evaluate(Complex::new(-2.0, -1.5)), 0);
    }

    #[test]
    fn test_known_escape_counts() {
        // z0 = 1, z1 = 2, z2 = 5: |z2|² = 25 > 4
        assert_eq!(algorithm().evaluate(Complex::new(1.0, 0.0)), 2);
        // z0 = i, z1 = -1 + i, z2 = -i, z3 = -1 + i: period two, stays bounded
        assert_eq!(algorithm().evaluate(Complex::new(0.0, 1.0)), DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_boundary_point_on_the_radius_does_not_escape_at_zero() {
        // |c|² == 4 is not strictly greater than the radius
        let c = Complex::new(-2.0, 0.0);

        assert_eq!(algorithm().evaluate(c), DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_evaluate_is_bounded_by_budget() {
        let algorithm = MandelbrotAlgorithm::new(50).unwrap();

        for step in 0..=40 {
            let real = -2.0 + f64::from(step) * 0.075;
            for imag_step in 0..=20 {
                let imag = -1.5 + f64::from(imag_step) * 0.15;
                let iterations = algorithm.evaluate(Complex::new(real, imag));
                assert!(iterations <= 50);
            }
        }
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let c = Complex::new(-0.743_643_887, 0.131_825_904);

        assert_eq!(algorithm().evaluate(c), algorithm().evaluate(c));
    }
}
