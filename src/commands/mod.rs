//! # CLI Command Implementations
//!
//! Each subcommand of `yum-repoquery` lives in its own file with:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `yum_repoquery` library.

pub mod cache;
pub mod query;
pub mod repo_id;
