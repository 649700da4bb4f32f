//! ganrun library interface
//!
//! This crate provides a command-line launcher for GAN training runs.
//!
//! # Module Organization
//!
//! - [`cli`] - Argument definitions and post-parse processing
//! - [`config`] - Resolved run configuration and its JSON rendering
//! - [`trainer`] - External trainer invocation
//! - [`errors`] - Error types (GanrunError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main execution logic

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod status;
pub mod trainer;
