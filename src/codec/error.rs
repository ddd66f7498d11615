// Mon Jan 26 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Buffer truncated: {needed} bytes required, {available} available")]
    Truncated { needed: usize, available: usize },
    #[error("Declared coefficient count is zero")]
    EmptyPolynomial,
    #[error("{0} trailing bytes after decoded problem")]
    TrailingBytes(usize),
}
