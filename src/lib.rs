//! # yum-repoquery
//!
//! This library resolves a package spec against a yum repository by running
//! `repoquery` and turns its answer into a [`PackageRevision`]: the
//! `name-version-release.arch` revision, build time, packager, download
//! location, trackback URL and build host of the one package the spec
//! selects. It is used by the `yum-repoquery` command-line tool and is meant
//! to be embedded by CI material pollers that watch repositories for new
//! builds.
//!
//! ## Quick Example
//!
//! ```no_run
//! use yum_repoquery::command::RepoQueryParams;
//! use yum_repoquery::executor::QueryExecutor;
//! use yum_repoquery::repo_url::RepositoryLocation;
//!
//! let location = RepositoryLocation::with_credentials(
//!     "https://repo.example.com/el7",
//!     Some("ci".to_string()),
//!     Some("s3cret!".to_string()),
//! );
//! let params = RepoQueryParams::for_location(location, "go-agent");
//!
//! match QueryExecutor::new().execute(&params)? {
//!     Some(revision) => println!("{}", revision.revision()),
//!     None => println!("no package matches"),
//! }
//! # Ok::<(), yum_repoquery::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Locations (`repo_url`)**: repository URLs with optional basic-auth
//!   credentials, and repository id derivation.
//! - **Command building (`command`)**: the exact `repoquery` argument
//!   vector and the environment it runs under.
//! - **Output parsing (`parser`)**: delimited stdout lines to records, with
//!   the `None` sentinel mapped to absent values.
//! - **Execution (`executor`, `process`)**: runs the command and maps exit
//!   status and output to a revision or a typed error.
//! - **Query cycles (`cache`, `batch`)**: cache cleanup around a cycle and
//!   a worker pool for many concurrent queries.

pub mod batch;
pub mod cache;
pub mod command;
pub mod defaults;
pub mod error;
pub mod executor;
pub mod output;
pub mod parser;
pub mod process;
pub mod repo_url;
pub mod revision;
pub mod suggestions;

pub use revision::PackageRevision;

#[cfg(test)]
mod repo_url_proptest;
