// Mon Jan 26 2026 - Alex

use crate::quadrature::polynomial;

/// Composite trapezoidal rule over [lower, upper] with `count` equal slices.
///
/// Each slice contributes f(x_i) + f(x_{i+1}) to the running sum, so every
/// interior breakpoint is accumulated once from each neighboring slice; the
/// pairwise sum times height/2 equals the usual h/2 * (f0 + 2f1 + ... + fn)
/// weighting. A zero-count range integrates to 0.0.
pub fn integrate(coefficients: &[f64], lower: f64, upper: f64, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }

    let height = (upper - lower) / count as f64;
    let mut sum = 0.0;
    for i in 0..count {
        let x1 = lower + i as f64 * height;
        let x2 = lower + (i + 1) as f64 * height;
        sum += polynomial::evaluate(coefficients, x1) + polynomial::evaluate(coefficients, x2);
    }
    sum * height / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrature::polynomial::definite_integral;

    #[test]
    fn test_constant_is_exact_for_any_count() {
        for count in [1u32, 2, 7, 100] {
            let result = integrate(&[3.0], 1.0, 5.0, count);
            assert!((result - 12.0).abs() < 1e-9, "count {}", count);
        }
    }

    #[test]
    fn test_linear_is_exact() {
        // f(x) = x on [0, 1]; trapezoids are exact for linear integrands
        for count in [1u32, 4, 33] {
            let result = integrate(&[0.0, 1.0], 0.0, 1.0, count);
            assert!((result - 0.5).abs() < 1e-12, "count {}", count);
        }
    }

    #[test]
    fn test_quadratic_converges_to_analytical() {
        let coefficients = [0.0, 0.0, 1.0];
        let exact = definite_integral(&coefficients, 0.0, 2.0);

        let mut previous_error = f64::INFINITY;
        for count in [4u32, 8, 16, 32, 64] {
            let error = (integrate(&coefficients, 0.0, 2.0, count) - exact).abs();
            assert!(error < previous_error, "error did not shrink at count {}", count);
            previous_error = error;
        }
        assert!(previous_error < 1e-3);
    }

    #[test]
    fn test_zero_count_contributes_nothing() {
        assert_eq!(integrate(&[1.0, 2.0], 0.5, 0.5, 0), 0.0);
    }

    #[test]
    fn test_split_ranges_sum_to_whole() {
        // integrating [0,1] and [1,2] separately must match [0,2] with the
        // same slice width
        let coefficients = [1.0, -2.0, 0.5, 0.25];
        let whole = integrate(&coefficients, 0.0, 2.0, 8);
        let left = integrate(&coefficients, 0.0, 1.0, 4);
        let right = integrate(&coefficients, 1.0, 2.0, 4);
        assert!((whole - (left + right)).abs() < 1e-9);
    }
}
