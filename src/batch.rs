//! Running many queries on a fixed-size worker pool.
//!
//! Every task runs to completion regardless of how the others fare; the
//! report keeps each task's own outcome in task order and lists the
//! failures separately.

use log::{info, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::command::RepoQueryParams;
use crate::error::{Error, Result};
use crate::executor::QueryExecutor;
use crate::revision::PackageRevision;

/// The result of one query task.
#[derive(Debug)]
pub struct TaskOutcome {
    pub params: RepoQueryParams,
    pub result: Result<Option<PackageRevision>>,
}

/// A failed task, reduced to what a report needs to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFailure {
    pub index: usize,
    pub location: String,
    pub spec: String,
    pub message: String,
}

/// Outcomes of a batch, in the order the tasks were given.
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<TaskOutcome>,
}

impl BatchReport {
    pub fn failures(&self) -> Vec<TaskFailure> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(index, outcome)| {
                outcome.result.as_ref().err().map(|e| TaskFailure {
                    index,
                    location: outcome.params.location().to_string(),
                    spec: outcome.params.spec().to_string(),
                    message: e.to_string(),
                })
            })
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.result.is_ok())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Runs `tasks` through `executor` on a pool of `workers` threads.
///
/// Fails only if the pool itself cannot be created; query failures are
/// reported per task.
pub fn run_batch(
    executor: &QueryExecutor,
    tasks: Vec<RepoQueryParams>,
    workers: usize,
) -> Result<BatchReport> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .thread_name(|i| format!("repoquery-worker-{}", i))
        .build()
        .map_err(|e| Error::WorkerPool {
            message: e.to_string(),
        })?;

    let outcomes: Vec<TaskOutcome> = pool.install(|| {
        tasks
            .into_par_iter()
            .map(|params| {
                let result = executor.execute(&params);
                TaskOutcome { params, result }
            })
            .collect()
    });

    let report = BatchReport { outcomes };
    let failed = report.failures().len();
    if failed > 0 {
        warn!("{} of {} queries failed", failed, report.len());
    } else {
        info!("{} queries completed", report.len());
    }
    Ok(report)
}
