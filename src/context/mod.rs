//! Execution context passed into core::run

pub mod environment;

pub use environment::Environment;
