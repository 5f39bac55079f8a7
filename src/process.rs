//! Running external commands.
//!
//! [`ProcessRunner`] is the seam between query logic and the operating
//! system, so queries can be exercised in tests without `repoquery`
//! installed. [`SystemProcessRunner`] is the real implementation.

use std::collections::HashMap;
use std::process::Command;

use log::trace;

use crate::error::{Error, Result};

/// Exit code, stdout and stderr of one finished process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl ProcessOutput {
    pub fn new(exit_code: i32, stdout: Vec<String>, stderr: Vec<String>) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Stderr lines joined with newlines.
    pub fn stderr_text(&self) -> String {
        self.stderr.join("\n")
    }
}

/// Trait for process execution - allows mocking in tests
pub trait ProcessRunner: Send + Sync {
    /// Runs `command` (program first, then its arguments) with `env` added
    /// to the inherited environment, blocking until it exits.
    fn execute(&self, command: &[String], env: &HashMap<String, String>) -> Result<ProcessOutput>;
}

/// Runs commands with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn execute(&self, command: &[String], env: &HashMap<String, String>) -> Result<ProcessOutput> {
        let (program, args) = command.split_first().ok_or_else(|| Error::ProcessSpawn {
            command: String::new(),
            message: "empty command".to_string(),
        })?;

        let output = Command::new(program)
            .args(args)
            .envs(env)
            .output()
            .map_err(|e| Error::ProcessSpawn {
                command: program.clone(),
                message: e.to_string(),
            })?;

        // A process killed by a signal has no exit code.
        let exit_code = output.status.code().unwrap_or(-1);
        trace!("{} exited with {}", program, exit_code);

        Ok(ProcessOutput {
            exit_code,
            stdout: into_lines(&output.stdout),
            stderr: into_lines(&output.stderr),
        })
    }
}

fn into_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}
