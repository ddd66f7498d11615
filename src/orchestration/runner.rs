// Wed Jan 28 2026 - Alex

use crate::comm::CommGroup;
use crate::config::RunConfig;
use crate::orchestration::pipeline::{self, WorkerOutcome};
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::thread;

/// Coordinator-side record of one completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub numerical: f64,
    pub analytical: f64,
    pub absolute_difference: f64,
    pub workers: usize,
    pub subintervals: u32,
    pub coefficient_count: usize,
}

/// Spawn the fixed worker group, run the collective pipeline on every rank,
/// join them all, and return the coordinator's summary. The first worker
/// error wins; secondary failures (ranks torn down by an abort) are logged
/// at debug level.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    config.validate().map_err(|message| anyhow!(message))?;

    let workers = config.workers;
    log::info!(
        "starting {} workers for {}",
        workers,
        config.input_file.display()
    );

    let mut handles = Vec::with_capacity(workers);
    for link in CommGroup::links(workers) {
        let input = config.input_file.clone();
        let handle = thread::Builder::new()
            .name(format!("worker-{}", link.rank()))
            .spawn(move || pipeline::run_worker(&link, &input))
            .context("spawning worker thread")?;
        handles.push(handle);
    }

    let mut summary = None;
    let mut first_error = None;
    for (rank, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(Ok(WorkerOutcome::Coordinated {
                numerical,
                analytical,
                spec,
            })) => {
                summary = Some(RunSummary {
                    numerical,
                    analytical,
                    absolute_difference: (numerical - analytical).abs(),
                    workers,
                    subintervals: spec.subintervals,
                    coefficient_count: spec.coefficient_count(),
                });
            }
            Ok(Ok(WorkerOutcome::Contributed)) => {}
            Ok(Err(err)) => {
                if first_error.is_none() {
                    first_error = Some(err);
                } else {
                    log::debug!("rank {} failed: {:#}", rank, err);
                }
            }
            Err(_) => {
                if first_error.is_none() {
                    first_error = Some(anyhow!("worker {} panicked", rank));
                }
            }
        }
    }

    if let Some(err) = first_error {
        return Err(err);
    }
    summary.ok_or_else(|| anyhow!("coordinator produced no result"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_problem(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("polyquad-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    fn config(path: PathBuf, workers: usize) -> RunConfig {
        RunConfig::new(path).with_workers(workers)
    }

    #[test]
    fn test_constant_polynomial_matches_closed_form() {
        let path = write_problem("const.in", "degree0\ncoeffs2.5\ninterval0 4\nintegration9\n");
        let summary = run(&config(path.clone(), 4)).unwrap();
        assert!((summary.numerical - 10.0).abs() < 1e-9);
        assert!((summary.analytical - 10.0).abs() < 1e-9);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_linear_is_exact_for_every_worker_count() {
        let path = write_problem("linear.in", "degree1\ncoeffs0 1\ninterval0 1\nintegration4\n");
        for workers in [1usize, 2, 3, 7] {
            let summary = run(&config(path.clone(), workers)).unwrap();
            assert!(
                (summary.numerical - 0.5).abs() < 1e-12,
                "workers {}",
                workers
            );
            assert!((summary.analytical - 0.5).abs() < 1e-12);
        }
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_result_independent_of_worker_count() {
        // x^2 over [0, 2], N = 100: decomposition must not change the sum
        let path = write_problem(
            "square.in",
            "degree2\ncoeffs0 0 1\ninterval0 2\nintegration100\n",
        );
        let reference = run(&config(path.clone(), 1)).unwrap().numerical;
        for workers in [2usize, 3, 4, 7, 16] {
            let numerical = run(&config(path.clone(), workers)).unwrap().numerical;
            assert!(
                (numerical - reference).abs() < 1e-9,
                "workers {}: {} vs {}",
                workers,
                numerical,
                reference
            );
        }
        assert!((reference - 8.0 / 3.0).abs() < 1e-3);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_more_workers_than_subintervals() {
        let path = write_problem("tiny.in", "degree1\ncoeffs1 1\ninterval0 1\nintegration2\n");
        let summary = run(&config(path.clone(), 8)).unwrap();
        assert!((summary.numerical - 1.5).abs() < 1e-12);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_fails_every_rank() {
        let path = std::env::temp_dir().join("polyquad-does-not-exist.in");
        let err = run(&config(path, 4)).unwrap_err();
        assert!(format!("{:#}", err).contains("reading problem"));
    }

    #[test]
    fn test_malformed_file_aborts_run() {
        let path = write_problem("bad.in", "degree2\ncoeffs1 2\ninterval0 1\nintegration10\n");
        assert!(run(&config(path.clone(), 3)).is_err());
        fs::remove_file(path).ok();
    }
}
