//! Cleanup of the on-disk metadata cache `repoquery` keeps between runs.
//!
//! `repoquery` caches repository metadata per repository id in directories
//! named `yum-<user>-<random>` under `/var/tmp`. Stale entries make later
//! queries see old metadata, so a query cycle starts and ends by removing
//! them. The cleaner is an explicit value handed to whoever runs the cycle,
//! never global state.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Trait for cache cleanup - allows mocking in tests
///
/// Implementations must be idempotent and safe to call from several threads
/// at once.
pub trait CacheCleaner: Send + Sync {
    fn perform_cleanup(&self) -> Result<()>;
}

/// Removes `repoquery` cache directories matching a name prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoqueryCacheCleaner {
    root: PathBuf,
    prefix: String,
}

impl RepoqueryCacheCleaner {
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Lists the cache entries that [`clean`](Self::clean) would remove.
    pub fn list_entries(&self) -> Result<Vec<PathBuf>> {
        if self.prefix.is_empty() {
            return Err(Error::CacheCleanup {
                path: self.root.display().to_string(),
                message: "refusing to clean with an empty prefix".to_string(),
            });
        }

        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                // Removed by a concurrent cleanup between listing and stat.
                Err(e) if e.io_error().is_some_and(|io| io.kind() == ErrorKind::NotFound) => {
                    continue
                }
                Err(e) => {
                    return Err(Error::CacheCleanup {
                        path: self.root.display().to_string(),
                        message: e.to_string(),
                    })
                }
            };

            if entry.file_name().to_string_lossy().starts_with(&self.prefix) {
                entries.push(entry.into_path());
            }
        }
        Ok(entries)
    }

    /// Removes every matching entry and returns the paths that were removed.
    ///
    /// Entries that disappear while cleaning are skipped silently.
    pub fn clean(&self) -> Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for path in self.list_entries()? {
            let result = if path.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };

            match result {
                Ok(()) => {
                    debug!("Removed repoquery cache {}", path.display());
                    removed.push(path);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(Error::CacheCleanup {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    })
                }
            }
        }
        Ok(removed)
    }
}

impl CacheCleaner for RepoqueryCacheCleaner {
    fn perform_cleanup(&self) -> Result<()> {
        self.clean().map(|_| ())
    }
}

/// Brackets a query cycle: cleans the cache when created and again when
/// dropped.
///
/// A failed cleanup on drop is logged, not raised.
pub struct CacheGuard<'a> {
    cleaner: &'a dyn CacheCleaner,
}

impl<'a> CacheGuard<'a> {
    pub fn new(cleaner: &'a dyn CacheCleaner) -> Result<Self> {
        cleaner.perform_cleanup()?;
        Ok(Self { cleaner })
    }
}

impl Drop for CacheGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.cleaner.perform_cleanup() {
            warn!("Cache cleanup after query cycle failed: {}", e);
        }
    }
}
