//! Exit status codes for the CLI
//!
//! ganrun follows standard Unix exit code conventions:
//! - 0: Success
//! - 1: Any launcher error (unsupported trainer type, spawn failure)
//! - N: The trainer's own exit code, passed through unchanged
//!
//! The original launcher this tool replaces discarded the trainer's exit
//! code entirely; passing it through lets callers script on training
//! failures with plain shell conditionals.

use std::process::{ExitCode, Termination};

/// Exit status of a launcher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Successful execution (trainer exited 0, or no trainer was needed)
    Success,
    /// Launcher error (unsupported type, failed spawn, bad arguments)
    Error,
    /// The trainer exited non-zero; its code is passed through as-is
    Trainer(u8),
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Error => ExitCode::from(1),
            ExitStatus::Trainer(code) => ExitCode::from(code),
        }
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        self.into()
    }
}

impl ExitStatus {
    /// Map a child process status to a launcher exit status.
    ///
    /// A child killed by a signal has no exit code; that maps to Error.
    pub fn from_child(status: std::process::ExitStatus) -> Self {
        match status.code() {
            Some(0) => ExitStatus::Success,
            Some(code) => ExitStatus::Trainer((code & 0xff) as u8),
            None => ExitStatus::Error,
        }
    }
}
