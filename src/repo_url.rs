//! Repository locations and credential embedding.
//!
//! `repoquery` has no separate flag for repository credentials, so basic
//! auth has to travel inside the location given to `--repofrompath`. The
//! password is percent-encoded before it is spliced into the authority
//! component; the username is used as given.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters left untouched when encoding a password: ASCII alphanumerics
/// and `-`, `.`, `_`, `*`.
const PASSWORD_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'*');

const MASKED_PASSWORD: &str = "****";

/// A repository location (URL or path) with optional basic-auth credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocation {
    location: String,
    username: Option<String>,
    password: Option<String>,
}

impl RepositoryLocation {
    /// Creates a location without credentials.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            username: None,
            password: None,
        }
    }

    /// Creates a location with optional credentials.
    ///
    /// Credentials are only embedded when both are present.
    pub fn with_credentials(
        location: impl Into<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Self {
        Self {
            location: location.into(),
            username,
            password,
        }
    }

    /// The location exactly as configured, never carrying credentials.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns the location with `username:password@` spliced into its
    /// authority, or the location verbatim if either credential is missing.
    pub fn location_with_credentials(&self) -> String {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password)) => {
                let encoded = utf8_percent_encode(password, PASSWORD_ENCODE_SET).to_string();
                embed_userinfo(&self.location, username, &encoded)
            }
            _ => self.location.clone(),
        }
    }

    /// Same as [`location_with_credentials`](Self::location_with_credentials)
    /// but with the password replaced by a fixed mask. Safe to log.
    pub fn location_masked(&self) -> String {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(_)) => embed_userinfo(&self.location, username, MASKED_PASSWORD),
            _ => self.location.clone(),
        }
    }
}

impl fmt::Display for RepositoryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location)
    }
}

/// Inserts `username:password@` right after `scheme://`.
///
/// Locations that are not hierarchical URLs (plain paths, `mailto:`-style
/// URLs) are returned unchanged.
fn embed_userinfo(location: &str, username: &str, password: &str) -> String {
    let hierarchical = Url::parse(location).is_ok_and(|url| !url.cannot_be_a_base());

    match location.split_once("://") {
        Some((scheme, rest)) if hierarchical => {
            format!("{}://{}:{}@{}", scheme, username, password, rest)
        }
        _ => location.to_string(),
    }
}

/// Derives a repository id from a location.
///
/// The id is the MD5 hex digest of the location string, so the same
/// location maps to the same `repoquery` cache directory across runs and
/// releases.
pub fn repo_id_for(location: &str) -> String {
    format!("{:x}", md5::compute(location.as_bytes()))
}
