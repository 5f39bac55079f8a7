//! # Query Command Implementation
//!
//! This module implements the `query` subcommand, which resolves one or
//! more package specs against a single repository.
//!
//! Specs are queried concurrently on a worker pool. Each spec must resolve
//! to at most one package file; the command fails if any spec fails.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use yum_repoquery::batch::{self, TaskOutcome};
use yum_repoquery::cache::CacheGuard;
use yum_repoquery::command::RepoQueryParams;
use yum_repoquery::defaults::{self, DEFAULT_WORKERS};
use yum_repoquery::executor::QueryExecutor;
use yum_repoquery::output::{self, OutputConfig};
use yum_repoquery::repo_url::RepositoryLocation;
use yum_repoquery::suggestions;
use yum_repoquery::PackageRevision;

use super::cache::CacheLocationArgs;

/// Resolve package specs against a repository
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Repository location (URL or path)
    #[arg(value_name = "LOCATION")]
    pub location: String,

    /// Package specs to resolve, e.g. `go-agent` or `go-agent-13.1.0*`
    #[arg(value_name = "SPEC", required = true)]
    pub specs: Vec<String>,

    /// Repository id passed to repoquery.
    ///
    /// Defaults to an id derived from the location.
    #[arg(long, value_name = "ID")]
    pub repo_id: Option<String>,

    /// Username for repositories behind basic auth
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password for repositories behind basic auth.
    ///
    /// Can also be set with the `YUM_REPOQUERY_PASSWORD` environment variable.
    #[arg(long, env = defaults::PASSWORD_ENV, hide_env_values = true)]
    pub password: Option<String>,

    /// Number of queries to run at the same time
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_WORKERS)]
    pub jobs: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Remove repoquery's cache before and after querying
    #[arg(long)]
    pub clean_cache: bool,

    #[command(flatten)]
    pub cache: CacheLocationArgs,
}

impl QueryArgs {
    fn tasks(&self) -> Vec<RepoQueryParams> {
        let location = RepositoryLocation::with_credentials(
            self.location.clone(),
            self.username.clone(),
            self.password.clone(),
        );

        self.specs
            .iter()
            .map(|spec| match &self.repo_id {
                Some(repo_id) => RepoQueryParams::new(repo_id.clone(), location.clone(), spec.clone()),
                None => RepoQueryParams::for_location(location.clone(), spec.clone()),
            })
            .collect()
    }
}

#[derive(Serialize)]
struct QueryResultJson<'a> {
    spec: &'a str,
    revision: Option<&'a PackageRevision>,
    error: Option<String>,
}

/// Execute the `query` command.
pub fn execute(args: QueryArgs, output: &OutputConfig) -> Result<()> {
    // The cache options only matter when the cache is cleaned.
    let cleaner = if args.clean_cache {
        Some(args.cache.cleaner()?)
    } else {
        None
    };
    let _guard = match &cleaner {
        Some(cleaner) => Some(CacheGuard::new(cleaner)?),
        None => None,
    };

    let executor = QueryExecutor::new();
    let report = batch::run_batch(&executor, args.tasks(), args.jobs)?;

    if args.json {
        print_json(&report.outcomes)?;
    } else {
        print_text(&report.outcomes, output);
    }

    let failures = report.failures();
    match failures.len() {
        0 => Ok(()),
        _ if report.len() == 1 => {
            let outcome = report.outcomes.into_iter().next();
            match outcome.map(|o| o.result) {
                Some(Err(e)) => Err(suggestions::query_error(&e)),
                _ => Ok(()),
            }
        }
        failed => anyhow::bail!("{} of {} queries failed", failed, report.len()),
    }
}

fn print_text(outcomes: &[TaskOutcome], output: &OutputConfig) {
    // A lone failure is reported through the returned error instead.
    let single = outcomes.len() == 1;
    for outcome in outcomes {
        let spec = outcome.params.spec();
        match &outcome.result {
            Ok(Some(revision)) => println!("{}", output::render_revision(output, spec, revision)),
            Ok(None) => println!("{}", output::render_absent(output, spec)),
            Err(e) if !single => eprintln!("{}", output::render_failure(output, spec, &e.to_string())),
            Err(_) => {}
        }
    }
}

fn print_json(outcomes: &[TaskOutcome]) -> Result<()> {
    let results: Vec<QueryResultJson<'_>> = outcomes
        .iter()
        .map(|outcome| QueryResultJson {
            spec: outcome.params.spec(),
            revision: outcome.result.as_ref().ok().and_then(Option::as_ref),
            error: outcome.result.as_ref().err().map(ToString::to_string),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
