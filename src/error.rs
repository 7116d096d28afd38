//! Error types for kml-merge.

use std::path::PathBuf;

/// Result type alias for kml-merge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for kml-merge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Inputs and sample rates do not line up, or no inputs were given.
    #[error("invalid merge configuration: {message}")]
    Configuration {
        /// Description of the problem.
        message: String,
    },

    /// A sample rate could not be parsed or is out of range.
    #[error("invalid sample rate '{value}': {reason}")]
    InvalidSampleRate {
        /// The rate as given on the command line.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Failed to open an input track.
    #[error("failed to open input file '{path}'")]
    InputOpen {
        /// Path to the input file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Input is not well-formed XML.
    #[error("failed to parse XML in '{path}'")]
    Parse {
        /// Path to the input file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: xmltree::ParseError,
    },

    /// The coordinate element is missing from a parsed document.
    #[error("no {expected} element in '{path}' (missing '{missing}')")]
    Structure {
        /// Path to the input file.
        path: PathBuf,
        /// Full element path that was searched for.
        expected: String,
        /// First path step that could not be found.
        missing: String,
    },

    /// Failed to serialize the merged document.
    #[error("failed to serialize merged document")]
    Serialize {
        /// Underlying emitter error.
        #[source]
        source: xmltree::Error,
    },

    /// Failed to write the merged document to the output file.
    #[error("failed to write output file '{path}'")]
    OutputWrite {
        /// Path to the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this error was raised while validating inputs and rates,
    /// before any track was read.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::InvalidSampleRate { .. }
        )
    }

    /// This error followed by each of its causes, separated by `": "`.
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            out.push_str(": ");
            out.push_str(&err.to_string());
            cause = err.source();
        }
        out
    }
}
