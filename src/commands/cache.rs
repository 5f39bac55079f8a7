//! # Cache Command Implementation
//!
//! This module implements the `cache` subcommand for the metadata cache
//! `repoquery` leaves under `/var/tmp`.
//!
//! ## Subcommands
//!
//! - **`list`**: Display the cache directories that belong to the current user
//! - **`clean`**: Remove them (`--dry-run` only shows what would go)

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use yum_repoquery::cache::RepoqueryCacheCleaner;
use yum_repoquery::defaults;
use yum_repoquery::output::{emoji, OutputConfig};
use yum_repoquery::suggestions;

/// Where repoquery keeps its cache and how its directories are named
#[derive(Args, Debug, Clone)]
pub struct CacheLocationArgs {
    /// The directory holding repoquery's cache directories.
    ///
    /// Defaults to `/var/tmp`.
    /// Can also be set with the `YUM_REPOQUERY_CACHE_ROOT` environment variable.
    #[arg(long, value_name = "DIR", env = defaults::CACHE_ROOT_ENV)]
    pub cache_root: Option<PathBuf>,

    /// Name prefix of the cache directories to remove.
    ///
    /// Defaults to `yum-<user>-`.
    /// Can also be set with the `YUM_REPOQUERY_CACHE_PREFIX` environment variable.
    #[arg(long, value_name = "PREFIX", env = defaults::CACHE_PREFIX_ENV)]
    pub cache_prefix: Option<String>,
}

impl CacheLocationArgs {
    /// Builds the cleaner, falling back to the defaults for unset options.
    pub fn cleaner(&self) -> Result<RepoqueryCacheCleaner> {
        let prefix = match &self.cache_prefix {
            Some(prefix) => prefix.clone(),
            None => defaults::default_cache_prefix().ok_or_else(suggestions::unknown_cache_user)?,
        };
        if prefix.is_empty() {
            return Err(suggestions::empty_cache_prefix());
        }

        let root = self
            .cache_root
            .clone()
            .unwrap_or_else(defaults::default_cache_root);
        Ok(RepoqueryCacheCleaner::new(root, prefix))
    }
}

/// Manage repoquery's metadata cache
#[derive(Args, Debug)]
pub struct CacheArgs {
    #[command(flatten)]
    pub location: CacheLocationArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CacheSubcommand {
    /// List cache directories belonging to the current user
    List,
    /// Remove cache directories belonging to the current user
    Clean(CleanArgs),
}

/// Arguments for the cache clean command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Show what would be deleted without actually deleting anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute the `cache` command.
pub fn execute(args: CacheArgs, output: &OutputConfig) -> Result<()> {
    let cleaner = args.location.cleaner()?;
    match args.command {
        CacheSubcommand::List => execute_list(&cleaner),
        CacheSubcommand::Clean(clean_args) => execute_clean(&cleaner, clean_args, output),
    }
}

fn execute_list(cleaner: &RepoqueryCacheCleaner) -> Result<()> {
    let entries = cleaner.list_entries()?;
    if entries.is_empty() {
        println!(
            "No repoquery cache directories matching '{}' in: {}",
            cleaner.prefix(),
            cleaner.root().display()
        );
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.display());
    }
    Ok(())
}

fn execute_clean(
    cleaner: &RepoqueryCacheCleaner,
    args: CleanArgs,
    output: &OutputConfig,
) -> Result<()> {
    if args.dry_run {
        let entries = cleaner.list_entries()?;
        println!("Would remove {} cache director(ies):", entries.len());
        for entry in entries {
            println!("  {}", entry.display());
        }
        return Ok(());
    }

    let removed = cleaner.clean()?;
    for path in &removed {
        println!("  removed {}", path.display());
    }
    println!(
        "{} Removed {} cache director(ies) from {}",
        emoji(output, "🧹", "[CLEAN]"),
        removed.len(),
        cleaner.root().display()
    );
    Ok(())
}
