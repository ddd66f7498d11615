// Mon Jan 26 2026 - Alex

pub mod error;

pub use error::CodecError;

use crate::problem::ProblemSpec;
use bytes::{Buf, BufMut, Bytes, BytesMut};

const COUNT_FIELD: usize = 4;
const COEFFICIENT_FIELD: usize = 8;
const BOUND_FIELDS: usize = 16;
const SUBINTERVAL_FIELD: usize = 4;

/// Exact encoded size of a problem with `count` coefficients. The buffer is
/// sized from the coefficient count; receivers learn it from the prefix.
pub fn encoded_len(count: usize) -> usize {
    COUNT_FIELD + count * COEFFICIENT_FIELD + BOUND_FIELDS + SUBINTERVAL_FIELD
}

/// Pack a problem into one self-describing little-endian buffer:
/// coefficient count, coefficients, interval bounds, subinterval count.
pub fn encode(spec: &ProblemSpec) -> Bytes {
    let mut buf = BytesMut::with_capacity(encoded_len(spec.coefficient_count()));
    buf.put_u32_le(spec.coefficient_count() as u32);
    for &coefficient in &spec.coefficients {
        buf.put_f64_le(coefficient);
    }
    buf.put_f64_le(spec.interval_begin);
    buf.put_f64_le(spec.interval_end);
    buf.put_u32_le(spec.subintervals);
    buf.freeze()
}

/// Exact inverse of [`encode`]. A buffer whose length disagrees with the
/// declared coefficient count is corruption and fails fast.
pub fn decode(mut buf: &[u8]) -> Result<ProblemSpec, CodecError> {
    if buf.remaining() < COUNT_FIELD {
        return Err(CodecError::Truncated {
            needed: COUNT_FIELD,
            available: buf.remaining(),
        });
    }
    let count = buf.get_u32_le() as usize;
    if count == 0 {
        return Err(CodecError::EmptyPolynomial);
    }

    let needed = count * COEFFICIENT_FIELD + BOUND_FIELDS + SUBINTERVAL_FIELD;
    if buf.remaining() < needed {
        return Err(CodecError::Truncated {
            needed,
            available: buf.remaining(),
        });
    }

    let mut coefficients = Vec::with_capacity(count);
    for _ in 0..count {
        coefficients.push(buf.get_f64_le());
    }
    let interval_begin = buf.get_f64_le();
    let interval_end = buf.get_f64_le();
    let subintervals = buf.get_u32_le();

    if buf.has_remaining() {
        return Err(CodecError::TrailingBytes(buf.remaining()));
    }

    Ok(ProblemSpec::new(
        coefficients,
        interval_begin,
        interval_end,
        subintervals,
    ))
}
