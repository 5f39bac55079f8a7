//! Default values for yum-repoquery configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the cache root.
pub const CACHE_ROOT_ENV: &str = "YUM_REPOQUERY_CACHE_ROOT";

/// Environment variable overriding the cache directory prefix.
pub const CACHE_PREFIX_ENV: &str = "YUM_REPOQUERY_CACHE_PREFIX";

/// Environment variable holding the repository password.
pub const PASSWORD_ENV: &str = "YUM_REPOQUERY_PASSWORD";

/// Number of worker threads used when several specs are queried at once.
pub const DEFAULT_WORKERS: usize = 20;

/// Returns the directory under which `repoquery` keeps per-user metadata
/// caches when run by a non-root user.
///
/// This can be overridden by the `--cache-root` CLI flag or the
/// `YUM_REPOQUERY_CACHE_ROOT` environment variable.
pub fn default_cache_root() -> PathBuf {
    PathBuf::from("/var/tmp")
}

/// Returns the prefix of the cache directories `repoquery` creates for the
/// current user: `yum-<user>-`.
///
/// The user comes from `USER`, then `LOGNAME`, then the name of the home
/// directory. Returns `None` if no user can be determined, since a bare
/// `yum-` would match every user's cache.
pub fn default_cache_prefix() -> Option<String> {
    cache_prefix_for(current_user().as_deref())
}

fn cache_prefix_for(user: Option<&str>) -> Option<String> {
    user.filter(|user| !user.is_empty())
        .map(|user| format!("yum-{}-", user))
}

fn current_user() -> Option<String> {
    ["USER", "LOGNAME"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|user| !user.is_empty())
        .or_else(|| {
            dirs::home_dir()
                .and_then(|home| home.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
}
