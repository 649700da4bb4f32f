//! Environment struct (stdout/stderr/program name)

use std::io::{self, Stderr, Stdout};

/// Execution environment
///
/// Holds the process's output handles and resolved program name so that
/// core::run writes through an explicit value rather than hidden globals.
pub struct Environment {
    pub stdout: Stdout,
    pub stderr: Stderr,
    pub program_name: String,
}

impl Environment {
    pub fn init() -> Self {
        Self::default()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            stdout: io::stdout(),
            stderr: io::stderr(),
            program_name: "ganrun".to_string(),
        }
    }
}
