//! External trainer invocation
//!
//! The trainer is a separate, opaque executable. The launcher spawns it as
//! a blocking child process with inherited stdio and passes its exit status
//! back to the caller. No timeout is enforced and interrupts are left to
//! the operating system's default delivery.

use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::errors::{GanrunError, Result};

/// Default trainer command, matching the original launcher.
pub const DEFAULT_TRAINER_COMMAND: &str = "th script/main.lua";

/// Environment variable that overrides the trainer command.
pub const TRAINER_ENV_VAR: &str = "GANRUN_TRAINER";

/// Get the trainer command from the environment or use the default
pub fn trainer_command() -> String {
    std::env::var(TRAINER_ENV_VAR).unwrap_or_else(|_| DEFAULT_TRAINER_COMMAND.to_string())
}

/// Split a command line into program and arguments on whitespace.
///
/// Returns None for an empty or all-whitespace command.
fn split_command(cmd: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = cmd.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Run the trainer command to completion and return its exit status.
///
/// The child inherits the launcher's stdin/stdout/stderr, so training
/// output streams straight through.
pub fn run(cmd: &str) -> Result<ExitStatus> {
    let (program, args) = split_command(cmd)
        .ok_or_else(|| GanrunError::Trainer("empty trainer command".to_string()))?;

    debug!(program = %program, args = ?args, "Spawning trainer");

    let mut child = Command::new(program)
        .args(&args)
        .spawn()
        .map_err(|e| GanrunError::Trainer(format!("failed to spawn {}: {}", program, e)))?;

    let status = child.wait()?;
    debug!(code = ?status.code(), "Trainer finished");

    Ok(status)
}
