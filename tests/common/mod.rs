//! Shared test utilities for integration and E2E tests.
//!
//! The central piece is [`FakeRepoquery`]: a temporary directory holding an
//! executable `repoquery` shell script, put first on `PATH` for the CLI
//! under test. The script answers according to the package spec it is
//! given:
//!
//! - `broken`: prints an error to stderr and exits with status 1
//! - `nothing`: prints nothing and exits with status 0
//! - `multi`: prints two matches under `getPackage/` (noarch and x86_64)
//! - anything else: prints one match whose build host is `$HOME`
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fake = FakeRepoquery::new();
//! fake.command().arg("query").arg("http://repo").arg("go-agent").assert().success();
//! ```

#![cfg(unix)]

use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_fs::prelude::*;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::FakeRepoquery;
}

const SCRIPT: &str = r#"#!/bin/sh
if [ -n "$REPOQUERY_ARGS_LOG" ]; then
    printf '%s\n' "$@" >> "$REPOQUERY_ARGS_LOG"
fi
spec="$4"
case "$spec" in
    broken)
        echo "Cannot retrieve repository metadata (repomd.xml)" >&2
        exit 1
        ;;
    nothing)
        exit 0
        ;;
    multi)
        printf '%s<=>%s<=>1.0<=>1<=>%s<=>5<=>packager<=>http://repo/%s<=>None<=>builder\n' \
            "getPackage/multi-1.0-1.noarch.rpm" "multi" "noarch" "multi-1.0-1.noarch.rpm"
        printf '%s<=>%s<=>1.0<=>1<=>%s<=>5<=>packager<=>http://repo/%s<=>None<=>builder\n' \
            "getPackage/multi-1.0-1.x86_64.rpm" "multi" "x86_64" "multi-1.0-1.x86_64.rpm"
        ;;
    *)
        printf '%s<=>%s<=>1.0<=>1<=>noarch<=>5<=>packager<=>http://repo/%s<=>None<=>%s\n' \
            "$spec-1.0-1.noarch.rpm" "$spec" "$spec-1.0-1.noarch.rpm" "$HOME"
        ;;
esac
"#;

/// A temporary directory with a scripted `repoquery` on `PATH`.
pub struct FakeRepoquery {
    temp_dir: assert_fs::TempDir,
}

impl FakeRepoquery {
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        let bin = temp_dir.child("bin");
        bin.create_dir_all().expect("Failed to create bin directory");

        let script = bin.child("repoquery");
        fs::write(script.path(), SCRIPT).expect("Failed to write fake repoquery");
        fs::set_permissions(script.path(), fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake repoquery executable");

        Self { temp_dir }
    }

    /// Root of the fixture directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// File the script appends its arguments to, one per line.
    pub fn args_log(&self) -> PathBuf {
        self.temp_dir.path().join("args.log")
    }

    /// Arguments recorded so far.
    #[allow(dead_code)]
    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(self.args_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// The CLI binary with the fake `repoquery` first on `PATH`.
    pub fn command(&self) -> assert_cmd::Command {
        let path = match env::var_os("PATH") {
            Some(path) => format!(
                "{}:{}",
                self.temp_dir.path().join("bin").display(),
                path.to_string_lossy()
            ),
            None => self.temp_dir.path().join("bin").display().to_string(),
        };

        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("yum-repoquery");
        cmd.env("PATH", path)
            .env("REPOQUERY_ARGS_LOG", self.args_log())
            .env("HOME", self.temp_dir.path())
            .env_remove("YUM_REPOQUERY_PASSWORD")
            .env_remove("YUM_REPOQUERY_CACHE_ROOT")
            .env_remove("YUM_REPOQUERY_CACHE_PREFIX")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for FakeRepoquery {
    fn default() -> Self {
        Self::new()
    }
}
