//! Common test utilities for ganrun integration tests
//!
//! Provides CLI invocation helpers and fixture trainer scripts. Every test
//! pins GANRUN_TRAINER so no test ever shells out to a real `th` install.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// The exact stdout produced for the default configuration.
pub const BEGAN_JSON: &str = "{\n    \"type\": \"began\"\n}\n";

/// The error line printed for an unsupported type.
pub const WRONG_TYPE_LINE: &str = "Error: wrong type arguments!";

/// Result of running the launcher
#[derive(Debug)]
pub struct CliResponse {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Raw exit code (-1 if terminated by signal)
    pub exit_code: i32,
}

impl CliResponse {
    /// Check if stdout contains a substring
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }
}

/// Run the launcher with the given arguments and trainer command.
///
/// # Arguments
/// * `args` - Command line arguments (excluding the program name)
/// * `trainer` - Value for GANRUN_TRAINER
pub fn ganrun(args: &[&str], trainer: &str) -> CliResponse {
    let output = Command::new(env!("CARGO_BIN_EXE_ganrun"))
        .args(args)
        .env("GANRUN_TRAINER", trainer)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute ganrun");

    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

/// A fixture trainer: a shell script that records each invocation in a log
/// file and exits with a fixed code.
pub struct FixtureTrainer {
    dir: TempDir,
    script: PathBuf,
    log: PathBuf,
}

#[cfg(unix)]
impl FixtureTrainer {
    pub fn new(exit_code: i32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().expect("Failed to create temp dir");
        let script = dir.path().join("trainer.sh");
        let log = dir.path().join("invocations.log");

        let body = format!(
            "#!/bin/sh\necho invoked >> \"{}\"\nexit {}\n",
            log.display(),
            exit_code
        );
        std::fs::write(&script, body).expect("Failed to write trainer script");

        let mut perms = std::fs::metadata(&script)
            .expect("Failed to stat trainer script")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).expect("Failed to chmod trainer script");

        Self { dir, script, log }
    }

    /// Command string to place in GANRUN_TRAINER
    pub fn command(&self) -> String {
        self.script.display().to_string()
    }

    /// How many times the trainer was invoked
    pub fn invocations(&self) -> usize {
        match std::fs::read_to_string(&self.log) {
            Ok(content) => content.lines().count(),
            Err(_) => 0,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
