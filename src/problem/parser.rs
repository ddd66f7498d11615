// Mon Jan 26 2026 - Alex

use crate::problem::error::ProblemError;
use crate::problem::spec::ProblemSpec;
use std::fs;
use std::path::Path;
use std::str::Lines;

const DEGREE_PREFIX: &str = "degree";
const COEFFS_PREFIX: &str = "coeffs";
const INTERVAL_PREFIX: &str = "interval";
const INTEGRATION_PREFIX: &str = "integration";

/// Read a four-line problem file:
///
/// ```text
/// degree3
/// coeffs1 0 2 0.5
/// interval0 1
/// integration1000
/// ```
///
/// The declared degree counts the highest power; the coefficient line must
/// hold degree + 1 values, constant term first.
pub fn parse_file(path: &Path) -> Result<ProblemSpec, ProblemError> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

pub fn parse_str(content: &str) -> Result<ProblemSpec, ProblemError> {
    let mut lines = content.lines();

    let degree_text = field(&mut lines, DEGREE_PREFIX)?;
    let declared_degree = parse_int(degree_text)?;
    if declared_degree < 0 {
        return Err(ProblemError::InvalidDegree(declared_degree));
    }
    // degree 0 is a constant polynomial with a single coefficient
    let coefficient_count = declared_degree as usize + 1;

    let coeffs_text = field(&mut lines, COEFFS_PREFIX)?;
    let coefficients = parse_floats(coeffs_text)?;
    if coefficients.len() != coefficient_count {
        return Err(ProblemError::CoefficientCount {
            expected: coefficient_count,
            found: coefficients.len(),
        });
    }

    let interval_text = field(&mut lines, INTERVAL_PREFIX)?;
    let bounds = parse_floats(interval_text)?;
    if bounds.len() != 2 {
        return Err(ProblemError::IntervalBounds(bounds.len()));
    }

    let integration_text = field(&mut lines, INTEGRATION_PREFIX)?;
    let subintervals = parse_int(integration_text)?;
    if subintervals < 1 || subintervals > u32::MAX as i64 {
        return Err(ProblemError::InvalidSubintervals(subintervals));
    }

    Ok(ProblemSpec::new(
        coefficients,
        bounds[0],
        bounds[1],
        subintervals as u32,
    ))
}

/// Next line with its keyword prefix stripped. The value may abut the
/// keyword directly ("degree3") or follow whitespace.
fn field<'a>(lines: &mut Lines<'a>, prefix: &'static str) -> Result<&'a str, ProblemError> {
    let line = lines.next().ok_or(ProblemError::MissingLine(prefix))?;
    line.strip_prefix(prefix)
        .ok_or_else(|| ProblemError::BadPrefix {
            expected: prefix,
            found: line.to_string(),
        })
}

fn parse_int(text: &str) -> Result<i64, ProblemError> {
    let token = text.trim();
    token
        .parse()
        .map_err(|_| ProblemError::InvalidNumber(token.to_string()))
}

fn parse_floats(text: &str) -> Result<Vec<f64>, ProblemError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| ProblemError::InvalidNumber(token.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_problem() {
        let spec = parse_str("degree2\ncoeffs1 0 2\ninterval0 1\nintegration100\n").unwrap();
        assert_eq!(spec.coefficients, vec![1.0, 0.0, 2.0]);
        assert_eq!(spec.interval_begin, 0.0);
        assert_eq!(spec.interval_end, 1.0);
        assert_eq!(spec.subintervals, 100);
    }

    #[test]
    fn test_parse_constant_polynomial() {
        let spec = parse_str("degree0\ncoeffs3.5\ninterval-1 1\nintegration4\n").unwrap();
        assert_eq!(spec.coefficients, vec![3.5]);
        assert_eq!(spec.interval_begin, -1.0);
    }

    #[test]
    fn test_coefficient_count_mismatch() {
        let err = parse_str("degree2\ncoeffs1 0\ninterval0 1\nintegration100\n").unwrap_err();
        assert!(matches!(
            err,
            ProblemError::CoefficientCount {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_wrong_prefix() {
        let err = parse_str("order2\ncoeffs1 0 2\ninterval0 1\nintegration100\n").unwrap_err();
        assert!(matches!(err, ProblemError::BadPrefix { .. }));
    }

    #[test]
    fn test_non_numeric_coefficient() {
        let err = parse_str("degree1\ncoeffs1 abc\ninterval0 1\nintegration100\n").unwrap_err();
        assert!(matches!(err, ProblemError::InvalidNumber(_)));
    }

    #[test]
    fn test_zero_subintervals_rejected() {
        let err = parse_str("degree1\ncoeffs1 1\ninterval0 1\nintegration0\n").unwrap_err();
        assert!(matches!(err, ProblemError::InvalidSubintervals(0)));
    }

    #[test]
    fn test_truncated_file() {
        let err = parse_str("degree1\ncoeffs1 1\n").unwrap_err();
        assert!(matches!(err, ProblemError::MissingLine("interval")));
    }
}
