//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use yum_repoquery::output::OutputConfig;

use crate::commands;

/// yum-repoquery - Resolve package revisions from yum repositories
#[derive(Parser, Debug)]
#[command(name = "yum-repoquery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve package specs against a repository
    Query(commands::query::QueryArgs),

    /// Print the repository id derived from a location
    RepoId(commands::repo_id::RepoIdArgs),

    /// Manage repoquery's metadata cache
    Cache(commands::cache::CacheArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Query(args) => commands::query::execute(args, &output),
            Commands::RepoId(args) => commands::repo_id::execute(args),
            Commands::Cache(args) => commands::cache::execute(args, &output),
        }
    }
}

/// `RUST_LOG` wins over `--log-level` when set.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // Ignore a second initialisation; only the first logger counts.
    let _ = env_logger::Builder::from_env(env)
        .format_target(false)
        .try_init();
}
