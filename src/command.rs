//! Building the `repoquery` invocation.
//!
//! Construction is pure: the only ambient input is the `HOME` variable,
//! read once in [`RepoQueryCommand::build`] and injectable through
//! [`RepoQueryCommand::build_with_home`].

use std::collections::HashMap;
use std::env;
use std::fmt;

use crate::repo_url::{repo_id_for, RepositoryLocation};

/// Name of the external query tool.
pub const REPOQUERY: &str = "repoquery";

/// Separator placed between fields in the `--qf` template. Chosen so it
/// does not occur in real package metadata.
pub const DELIMITER: &str = "<=>";

/// Query-format tags, in the order the fields appear on every stdout line.
pub const QUERY_FIELDS: [&str; 10] = [
    "RELATIVEPATH",
    "NAME",
    "VERSION",
    "RELEASE",
    "ARCH",
    "BUILDTIME",
    "PACKAGER",
    "LOCATION",
    "URL",
    "BUILDHOST",
];

/// The `--qf` template: every tag of [`QUERY_FIELDS`] joined by
/// [`DELIMITER`].
pub fn query_format() -> String {
    QUERY_FIELDS
        .iter()
        .map(|tag| format!("%{{{}}}", tag))
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

/// Everything needed to query one repository for one package spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoQueryParams {
    repo_id: String,
    location: RepositoryLocation,
    spec: String,
}

impl RepoQueryParams {
    pub fn new(
        repo_id: impl Into<String>,
        location: RepositoryLocation,
        spec: impl Into<String>,
    ) -> Self {
        Self {
            repo_id: repo_id.into(),
            location,
            spec: spec.into(),
        }
    }

    /// Builds parameters whose repository id is derived from the location.
    pub fn for_location(location: RepositoryLocation, spec: impl Into<String>) -> Self {
        let repo_id = repo_id_for(location.location());
        Self::new(repo_id, location, spec)
    }

    pub fn repo_id(&self) -> &str {
        &self.repo_id
    }

    pub fn location(&self) -> &RepositoryLocation {
        &self.location
    }

    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// The `--repofrompath` value: `"{repoid},{location}"` with credentials
    /// embedded when both are configured.
    pub fn repo_from_path(&self) -> String {
        format!("{},{}", self.repo_id, self.location.location_with_credentials())
    }
}

/// A fully built `repoquery` invocation: argument vector plus the
/// environment variables to set for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoQueryCommand {
    args: Vec<String>,
    env: HashMap<String, String>,
    masked: String,
}

impl RepoQueryCommand {
    /// Builds the invocation using the current process's `HOME`.
    pub fn build(params: &RepoQueryParams) -> Self {
        Self::build_with_home(params, env::var("HOME").ok())
    }

    /// Builds the invocation with an explicit `HOME` value; `None` means the
    /// variable is undefined and the system temp directory is used instead.
    pub fn build_with_home(params: &RepoQueryParams, home: Option<String>) -> Self {
        let args = query_args(params.repo_id(), &params.repo_from_path(), params.spec());
        let masked_token = format!("{},{}", params.repo_id(), params.location().location_masked());
        let masked = query_args(params.repo_id(), &masked_token, params.spec()).join(" ");

        Self {
            args,
            env: home_environment(home),
            masked,
        }
    }

    /// The argument vector, program name first.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn env(&self) -> &HashMap<String, String> {
        &self.env
    }
}

impl fmt::Display for RepoQueryCommand {
    /// Shows the command line with any password masked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked)
    }
}

fn query_args(repo_id: &str, repo_from_path: &str, spec: &str) -> Vec<String> {
    vec![
        REPOQUERY.to_string(),
        format!("--repofrompath={}", repo_from_path),
        format!("--repoid={}", repo_id),
        "-q".to_string(),
        spec.to_string(),
        "--qf".to_string(),
        query_format(),
    ]
}

/// The environment for a query: only `HOME`, falling back to the system
/// temp directory so `repoquery` never writes into an undefined home.
pub fn home_environment(home: Option<String>) -> HashMap<String, String> {
    let home = home.unwrap_or_else(|| env::temp_dir().to_string_lossy().into_owned());
    HashMap::from([("HOME".to_string(), home)])
}
