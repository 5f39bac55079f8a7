//! Parsing `repoquery` stdout into package records.
//!
//! Each stdout line is one matching package, with the fields of
//! [`QUERY_FIELDS`](crate::command::QUERY_FIELDS) joined by
//! [`DELIMITER`]. `repoquery` prints `None` for metadata a package does not
//! carry; that sentinel is turned into `Option::None` here and nowhere else.

use chrono::{DateTime, Utc};

use crate::command::{DELIMITER, QUERY_FIELDS};
use crate::error::{Error, Result};
use crate::revision::{PackageRevision, PACKAGE_LOCATION};

/// One parsed stdout line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoQueryRecord {
    pub relative_path: String,
    pub name: String,
    pub version: String,
    pub release: String,
    pub arch: String,
    pub build_time: DateTime<Utc>,
    pub packager: Option<String>,
    pub location: Option<String>,
    pub trackback_url: Option<String>,
    pub build_host: Option<String>,
}

impl RepoQueryRecord {
    /// `name-version-release.arch`
    pub fn revision(&self) -> String {
        format!(
            "{}-{}-{}.{}",
            self.name, self.version, self.release, self.arch
        )
    }
}

impl From<RepoQueryRecord> for PackageRevision {
    fn from(record: RepoQueryRecord) -> Self {
        let comment = record
            .build_host
            .as_ref()
            .map(|host| format!("Built on {}", host));

        PackageRevision::new(record.revision(), record.build_time)
            .with_user(record.packager)
            .with_trackback_url(record.trackback_url)
            .with_revision_comment(comment)
            .with_data(PACKAGE_LOCATION, record.location)
    }
}

/// `None` for any casing of the `none` sentinel, the value otherwise.
fn optional_field(value: &str) -> Option<String> {
    if value.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_build_time(value: &str) -> Result<DateTime<Utc>> {
    let invalid = || Error::InvalidBuildTime {
        value: value.to_string(),
    };

    let seconds: i64 = value.trim().parse().map_err(|_| invalid())?;
    seconds
        .checked_mul(1000)
        .and_then(DateTime::from_timestamp_millis)
        .ok_or_else(invalid)
}

/// Parses a single stdout line.
pub fn parse_line(line: &str) -> Result<RepoQueryRecord> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [relative_path, name, version, release, arch, build_time, packager, location, trackback_url, build_host] =
        fields[..]
    else {
        return Err(Error::MalformedOutput {
            line: line.to_string(),
            expected: QUERY_FIELDS.len(),
            found: fields.len(),
        });
    };

    Ok(RepoQueryRecord {
        relative_path: relative_path.to_string(),
        name: name.to_string(),
        version: version.to_string(),
        release: release.to_string(),
        arch: arch.to_string(),
        build_time: parse_build_time(build_time)?,
        packager: optional_field(packager),
        location: optional_field(location),
        trackback_url: optional_field(trackback_url),
        build_host: optional_field(build_host),
    })
}

/// Parses every non-blank stdout line, keeping output order.
pub fn parse_output<S: AsRef<str>>(lines: &[S]) -> Result<Vec<RepoQueryRecord>> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

/// Parses the output of a query for `spec`, which may match at most one
/// package.
///
/// The candidate count is checked before any line is parsed, so several
/// candidates are reported as ambiguous even if one of them is malformed.
/// Identical duplicate lines still count as separate candidates.
pub fn single_record<S: AsRef<str>>(lines: &[S], spec: &str) -> Result<Option<RepoQueryRecord>> {
    let candidates: Vec<&str> = lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| !line.trim().is_empty())
        .collect();

    match candidates[..] {
        [] => Ok(None),
        [line] => parse_line(line).map(Some),
        _ => Err(Error::AmbiguousResult {
            spec: spec.to_string(),
            paths: candidates.iter().map(|line| file_name(line)).collect(),
        }),
    }
}

/// File name of the relative path leading a stdout line.
fn file_name(line: &str) -> String {
    let relative_path = line.split(DELIMITER).next().unwrap_or(line);
    relative_path
        .rsplit('/')
        .next()
        .unwrap_or(relative_path)
        .to_string()
}
