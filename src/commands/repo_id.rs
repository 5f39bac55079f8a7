//! # Repo-Id Command Implementation
//!
//! Prints the repository id `query` derives for a location when
//! `--repo-id` is not given, which is also the name repoquery uses for the
//! repository inside its cache directories.

use anyhow::Result;
use clap::Args;

use yum_repoquery::repo_url::repo_id_for;

/// Print the repository id derived from a location
#[derive(Args, Debug)]
pub struct RepoIdArgs {
    /// Repository location (URL or path)
    #[arg(value_name = "LOCATION")]
    pub location: String,
}

/// Execute the `repo-id` command.
pub fn execute(args: RepoIdArgs) -> Result<()> {
    println!("{}", repo_id_for(&args.location));
    Ok(())
}
