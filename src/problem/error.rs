// Mon Jan 26 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProblemError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Missing input line: {0}")]
    MissingLine(&'static str),
    #[error("Expected line starting with '{expected}', found: {found}")]
    BadPrefix {
        expected: &'static str,
        found: String,
    },
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
    #[error("Declared degree must be non-negative, got {0}")]
    InvalidDegree(i64),
    #[error("Expected {expected} coefficients, found {found}")]
    CoefficientCount { expected: usize, found: usize },
    #[error("Expected 2 interval bounds, found {0}")]
    IntervalBounds(usize),
    #[error("Subinterval count must be positive, got {0}")]
    InvalidSubintervals(i64),
}
