// Mon Jan 26 2026 - Alex

use crate::problem::ProblemSpec;

/// Contiguous run of subintervals owned by one rank, global 0-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionRange {
    pub start: u32,
    pub count: u32,
}

impl PartitionRange {
    /// One past the last owned subinterval.
    pub fn end(&self) -> u32 {
        self.start + self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Slice of `[0, subintervals)` owned by `rank`. Pure function of its
/// arguments: every rank computes the same partitioning with no
/// communication. The first `N % P` ranks absorb one extra subinterval each,
/// so the ranges tile the full index space with no gaps or overlaps, also
/// when P exceeds N (high ranks own nothing).
pub fn partition(rank: usize, workers: usize, subintervals: u32) -> PartitionRange {
    debug_assert!(rank < workers);
    let rank = rank as u32;
    let workers = workers as u32;
    let per_worker = subintervals / workers;
    let remainder = subintervals % workers;

    if rank < remainder {
        PartitionRange {
            start: rank * (per_worker + 1),
            count: per_worker + 1,
        }
    } else {
        PartitionRange {
            start: remainder * (per_worker + 1) + (rank - remainder) * per_worker,
            count: per_worker,
        }
    }
}

/// Bounds of `range` inside the spec's integration domain, derived from the
/// global subinterval width.
pub fn local_bounds(spec: &ProblemSpec, range: &PartitionRange) -> (f64, f64) {
    let height = spec.subinterval_width();
    let lower = spec.interval_begin + range.start as f64 * height;
    let upper = lower + range.count as f64 * height;
    (lower, upper)
}
