//! # Error Handling
//!
//! This module defines the error type for every repository query performed by
//! the `yum-repoquery` library. It uses the `thiserror` library to describe
//! each failure mode with a message a CI user can act on.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failures. The two query outcomes callers
//!   most often match on are `QueryFailed` (the `repoquery` process exited
//!   with a non-zero status) and `AmbiguousResult` (the package spec matched
//!   more than one file). Their `Display` output is part of the public
//!   contract and must not change.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! A query that matches nothing is not an error; see
//! [`crate::executor::QueryExecutor::execute`].

use thiserror::Error;

/// Main error type for repository queries
#[derive(Error, Debug)]
pub enum Error {
    /// `repoquery` exited with a non-zero status.
    ///
    /// `location` is the repository location as configured, without any
    /// embedded credentials.
    #[error("Error while querying repository with path '{location}' and package spec '{spec}'. Error Message: {stderr}")]
    QueryFailed {
        location: String,
        spec: String,
        stderr: String,
    },

    /// The package spec matched more than one package file.
    ///
    /// `paths` holds the relative path of every candidate in the order
    /// `repoquery` printed them.
    #[error("Given Package Spec ({spec}) resolves to more than one file on the repository: {}", .paths.join(", "))]
    AmbiguousResult { spec: String, paths: Vec<String> },

    /// A stdout line did not have the expected number of fields.
    #[error("Malformed repoquery output: expected {expected} fields but found {found} in line '{line}'")]
    MalformedOutput {
        line: String,
        expected: usize,
        found: usize,
    },

    /// The build-time field was not an integer second count.
    #[error("Invalid build time '{value}' in repoquery output")]
    InvalidBuildTime { value: String },

    /// The query process could not be started at all.
    #[error("Failed to run '{command}': {message}")]
    ProcessSpawn { command: String, message: String },

    /// An error occurred while removing cached repository metadata.
    #[error("Cache cleanup error for {path}: {message}")]
    CacheCleanup { path: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A worker pool could not be created.
    #[error("Worker pool error: {message}")]
    WorkerPool { message: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
