//! The package revision record returned to callers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Data key under which the package download location is stored.
pub const PACKAGE_LOCATION: &str = "LOCATION";

/// Metadata describing one resolved package build in a repository.
///
/// Values are fixed at construction; the `with_*` methods consume and
/// return the record so it is never mutated once handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRevision {
    revision: String,
    timestamp: DateTime<Utc>,
    user: Option<String>,
    trackback_url: Option<String>,
    revision_comment: Option<String>,
    data: BTreeMap<String, String>,
}

impl PackageRevision {
    pub fn new(revision: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            revision: revision.into(),
            timestamp,
            user: None,
            trackback_url: None,
            revision_comment: None,
            data: BTreeMap::new(),
        }
    }

    pub fn with_user(mut self, user: Option<String>) -> Self {
        self.user = user;
        self
    }

    pub fn with_trackback_url(mut self, trackback_url: Option<String>) -> Self {
        self.trackback_url = trackback_url;
        self
    }

    pub fn with_revision_comment(mut self, comment: Option<String>) -> Self {
        self.revision_comment = comment;
        self
    }

    /// Adds a data entry; `None` leaves the key out entirely.
    pub fn with_data(mut self, key: impl Into<String>, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.data.insert(key.into(), value);
        }
        self
    }

    /// `name-version-release.arch`
    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn trackback_url(&self) -> Option<&str> {
        self.trackback_url.as_deref()
    }

    pub fn revision_comment(&self) -> Option<&str> {
        self.revision_comment.as_deref()
    }

    pub fn data(&self) -> &BTreeMap<String, String> {
        &self.data
    }

    pub fn data_value(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Shortcut for the [`PACKAGE_LOCATION`] data entry.
    pub fn package_location(&self) -> Option<&str> {
        self.data_value(PACKAGE_LOCATION)
    }
}
