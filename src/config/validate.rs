//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    let output = &config.output;

    if !output.indent_string.chars().all(char::is_whitespace) {
        return Err(Error::ConfigValidation {
            message: format!(
                "output.indent_string must contain only whitespace, got {:?}",
                output.indent_string
            ),
        });
    }

    Ok(())
}
