//! Configuration type definitions.

use crate::constants::DEFAULT_INDENT_STRING;
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// How the merged document is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print element structure.
    pub indent: bool,

    /// Indentation unit (whitespace only).
    pub indent_string: String,

    /// Emit an `<?xml ...?>` prolog.
    pub xml_declaration: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: true,
            indent_string: DEFAULT_INDENT_STRING.to_string(),
            xml_declaration: false,
        }
    }
}
