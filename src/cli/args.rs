//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for ganrun.

use clap::Parser;

/// ganrun - A command-line launcher for GAN training runs
#[derive(Parser, Debug, Clone)]
#[command(name = "ganrun", version, about, long_about = None)]
pub struct Args {
    /// GAN algorithm to train (currently only "began" is supported)
    ///
    /// Any string is accepted here; the value is validated after parsing
    /// so the resolved configuration can be reported either way.
    #[arg(long = "type", value_name = "TYPE", default_value = "began")]
    pub trainer_type: String,

    /// Enable debug-level logging on stderr
    #[arg(long)]
    pub debug: bool,
}
