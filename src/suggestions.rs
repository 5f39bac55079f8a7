//! # Error Suggestions
//!
//! Helpers that turn library errors into CLI errors which say what went
//! wrong AND how to fix it.

use crate::error::Error;

/// Wraps a query error with hints for the failure modes users hit most.
pub fn query_error(error: &Error) -> anyhow::Error {
    let hints: &[&str] = match error {
        Error::ProcessSpawn { .. } => &[
            "hint: Install repoquery (package 'yum-utils' on RHEL/CentOS 7, 'dnf-utils' later)",
            "hint: Make sure repoquery is on PATH",
        ],
        Error::AmbiguousResult { .. } => &[
            "hint: Narrow the spec with a version or architecture, e.g. 'go-agent-13.1.0*.noarch'",
        ],
        Error::QueryFailed { .. } => &[
            "hint: Check that the repository location is reachable and contains repodata/",
            "hint: Pass --username and --password for repositories behind basic auth",
        ],
        _ => &[],
    };

    if hints.is_empty() {
        anyhow::anyhow!("{error}")
    } else {
        anyhow::anyhow!("{error}\n\n{}", hints.join("\n"))
    }
}

/// Error for a cache clean that would match every entry in the cache root.
pub fn empty_cache_prefix() -> anyhow::Error {
    anyhow::anyhow!(
        "Cache prefix must not be empty\n\n\
         hint: Use --cache-prefix yum-<user>- to match repoquery's cache directories\n\
         hint: Or unset YUM_REPOQUERY_CACHE_PREFIX to use the default"
    )
}

/// Error for a cache clean where the current user, and so the default
/// prefix, cannot be determined.
pub fn unknown_cache_user() -> anyhow::Error {
    anyhow::anyhow!(
        "Cannot determine the current user for the default cache prefix\n\n\
         hint: Set USER, or pass --cache-prefix yum-<user>-\n\
         hint: Or set YUM_REPOQUERY_CACHE_PREFIX"
    )
}
