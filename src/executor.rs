//! # Query Executor
//!
//! This module ties the pipeline together: it builds the `repoquery`
//! invocation for a [`RepoQueryParams`], runs it through a
//! [`ProcessRunner`], and turns the result into a [`PackageRevision`].
//!
//! ## Outcomes
//!
//! - `Ok(Some(revision))`: exactly one package matched.
//! - `Ok(None)`: nothing matched. Absent metadata is not an error.
//! - `Err(Error::QueryFailed)`: `repoquery` exited with a non-zero status.
//! - `Err(Error::AmbiguousResult)`: more than one package matched.
//!
//! ## Concurrency
//!
//! A `QueryExecutor` holds nothing but a shared runner, so one instance can
//! serve any number of threads at once. Each call builds its own command,
//! environment and result. Races between queries on the same repository id
//! are left to `repoquery` and its on-disk cache.

use std::sync::Arc;

use log::debug;

use crate::command::{RepoQueryCommand, RepoQueryParams};
use crate::error::{Error, Result};
use crate::parser;
use crate::process::{ProcessRunner, SystemProcessRunner};
use crate::revision::PackageRevision;

/// Runs package queries against repositories.
#[derive(Clone)]
pub struct QueryExecutor {
    runner: Arc<dyn ProcessRunner>,
}

impl QueryExecutor {
    /// Creates an executor that runs the real `repoquery` binary.
    pub fn new() -> Self {
        Self::with_runner(Arc::new(SystemProcessRunner))
    }

    /// Creates an executor with a custom [`ProcessRunner`].
    pub fn with_runner(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }

    /// Resolves `params` to at most one package revision.
    pub fn execute(&self, params: &RepoQueryParams) -> Result<Option<PackageRevision>> {
        self.execute_command(params, &RepoQueryCommand::build(params))
    }

    /// Runs an already built command for `params`.
    ///
    /// Useful when the environment must not come from the current process.
    pub fn execute_command(
        &self,
        params: &RepoQueryParams,
        command: &RepoQueryCommand,
    ) -> Result<Option<PackageRevision>> {
        debug!("Running {}", command);
        let output = self.runner.execute(command.args(), command.env())?;

        if !output.success() {
            return Err(Error::QueryFailed {
                location: params.location().location().to_string(),
                spec: params.spec().to_string(),
                stderr: output.stderr_text(),
            });
        }

        let record = parser::single_record(&output.stdout, params.spec())?;
        if record.is_none() {
            debug!(
                "No package matching '{}' in {}",
                params.spec(),
                params.location()
            );
        }
        Ok(record.map(PackageRevision::from))
    }
}

impl Default for QueryExecutor {
    fn default() -> Self {
        Self::new()
    }
}
