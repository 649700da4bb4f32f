//! Resolved run configuration
//!
//! Built once from the command line at startup and passed around by value;
//! there is no configuration file and no global state.

use serde::Serialize;

use crate::errors::Result;

/// The type value the launcher knows how to dispatch.
pub const SUPPORTED_TYPE: &str = "began";

/// Immutable run configuration.
///
/// Serializes to a single-key JSON object, e.g. `{"type": "began"}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Config {
    #[serde(rename = "type")]
    trainer_type: String,
}

impl Config {
    pub fn new(trainer_type: String) -> Self {
        Self { trainer_type }
    }

    pub fn trainer_type(&self) -> &str {
        &self.trainer_type
    }

    /// Whether this configuration selects a trainer the launcher supports.
    pub fn is_supported(&self) -> bool {
        self.trainer_type == SUPPORTED_TYPE
    }

    /// Render the configuration as JSON with a 4-space indent.
    pub fn to_pretty_json(&self) -> Result<String> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
