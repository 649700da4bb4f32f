//! Main execution logic
//!
//! run() is the whole launcher: parse, report the resolved configuration,
//! then either hand off to the trainer or reject the type.

use std::io::Write;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{self, Args};
use crate::config::Config;
use crate::context::Environment;
use crate::status::ExitStatus;
use crate::trainer;

/// Error line printed when the type is not supported.
///
/// Goes to stdout, after the configuration JSON, matching the launcher
/// this tool replaces.
const WRONG_TYPE_MESSAGE: &str = "Error: wrong type arguments!";

/// Main entry point for the CLI.
///
/// Parses arguments, prints the resolved configuration as indented JSON,
/// and dispatches to the external trainer when the type is supported. The
/// configuration is printed on both the success and the failure path.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = std::path::Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    init_logging(parsed.debug);

    let config = cli::resolve_config(&parsed);
    debug!(trainer_type = %config.trainer_type(), program = %env.program_name, "Resolved configuration");

    if let Err(e) = report_config(&config, &mut env) {
        let _ = writeln!(env.stderr, "Error: {}", e);
        return ExitStatus::Error;
    }

    dispatch(&config, &mut env)
}

/// Print the resolved configuration as 4-space-indented JSON to stdout.
fn report_config(config: &Config, env: &mut Environment) -> crate::errors::Result<()> {
    let json = config.to_pretty_json()?;
    writeln!(env.stdout, "{}", json)?;
    // The trainer inherits stdout; make sure the JSON lands first.
    env.stdout.flush()?;
    Ok(())
}

/// Run the trainer for a supported type, reject anything else.
fn dispatch(config: &Config, env: &mut Environment) -> ExitStatus {
    if cli::process::validate(config).is_err() {
        let _ = writeln!(env.stdout, "{}", WRONG_TYPE_MESSAGE);
        return ExitStatus::Error;
    }

    match trainer::run(&trainer::trainer_command()) {
        Ok(status) => ExitStatus::from_child(status),
        Err(e) => {
            let _ = writeln!(env.stderr, "Error: {}", e);
            ExitStatus::Error
        }
    }
}

/// Initialize stderr logging.
///
/// --debug forces debug level; otherwise RUST_LOG governs, defaulting to
/// silence. Logs never touch stdout, which carries only the JSON contract.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
