//! CLI argument parsing and processing

pub mod args;
pub mod process;

// Re-exports
pub use args::Args;
pub use process::resolve_config;
