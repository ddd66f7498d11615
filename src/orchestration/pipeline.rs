// Wed Jan 28 2026 - Alex

use crate::codec;
use crate::comm::GroupLink;
use crate::partition;
use crate::problem::{self, ProblemSpec};
use crate::quadrature;
use anyhow::{Context, Result};
use std::path::Path;

/// Rank that reads the input, originates the broadcast, and receives the
/// reduced result.
pub const COORDINATOR: usize = 0;

/// What one worker hands back to the runner once both collectives completed.
#[derive(Debug)]
pub enum WorkerOutcome {
    /// Coordinator: reduced numerical result plus the analytical reference.
    Coordinated {
        numerical: f64,
        analytical: f64,
        spec: ProblemSpec,
    },
    /// Any other rank: contributed its partial sum and is done.
    Contributed,
}

/// The pipeline every worker runs. The program text is identical on every
/// rank; coordinator-only steps (input acquisition, analytical reference)
/// are explicit branches on the rank, not global state.
pub fn run_worker(link: &GroupLink, input: &Path) -> Result<WorkerOutcome> {
    let rank = link.rank();

    let spec = if rank == COORDINATOR {
        let spec = match problem::parse_file(input) {
            Ok(spec) => spec,
            Err(err) => {
                // no rank may proceed on an undefined problem
                link.abort(&err.to_string());
                return Err(err)
                    .with_context(|| format!("reading problem from {}", input.display()));
            }
        };
        let payload = codec::encode(&spec);
        log::debug!("rank {}: broadcasting {} byte problem", rank, payload.len());
        link.broadcast(COORDINATOR, Some(payload))?;
        spec
    } else {
        let payload = link.broadcast(COORDINATOR, None)?;
        log::debug!("rank {}: received {} byte problem", rank, payload.len());
        codec::decode(&payload).context("decoding broadcast problem")?
    };

    let range = partition::partition(rank, link.size(), spec.subintervals);
    let (lower, upper) = partition::local_bounds(&spec, &range);
    log::info!(
        "rank {}: coeffs {:?} interval [{}, {}] N {} -> owns [{}, {}) l(r) {:.6} u(r) {:.6}",
        rank,
        spec.coefficients,
        spec.interval_begin,
        spec.interval_end,
        spec.subintervals,
        range.start,
        range.end(),
        lower,
        upper
    );

    let partial = quadrature::integrate(&spec.coefficients, lower, upper, range.count);

    match link.reduce_sum(COORDINATOR, partial)? {
        Some(numerical) => {
            let analytical = quadrature::definite_integral(
                &spec.coefficients,
                spec.interval_begin,
                spec.interval_end,
            );
            Ok(WorkerOutcome::Coordinated {
                numerical,
                analytical,
                spec,
            })
        }
        None => Ok(WorkerOutcome::Contributed),
    }
}
