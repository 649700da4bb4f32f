//! Post-processing argument logic
//!
//! clap accepts any string for --type; validation happens here, after the
//! resolved configuration has been built, so the launcher can report the
//! configuration before rejecting it.

use crate::cli::args::Args;
use crate::config::Config;
use crate::errors::{GanrunError, Result};

/// Build the resolved run configuration from parsed arguments.
pub fn resolve_config(args: &Args) -> Config {
    Config::new(args.trainer_type.clone())
}

/// Validate the resolved configuration.
///
/// The empty string is not a supported type.
pub fn validate(config: &Config) -> Result<()> {
    if config.is_supported() {
        Ok(())
    } else {
        Err(GanrunError::UnsupportedType(config.trainer_type().to_string()))
    }
}
