//! Parsing of the comma-separated positional lists.

use crate::constants::LIST_SEPARATOR;
use crate::error::{Error, Result};
use crate::kml::SampleRate;
use std::path::PathBuf;

/// Split the input list into paths.
pub fn parse_input_list(s: &str) -> Result<Vec<PathBuf>> {
    split_list(s, "input")
        .map(|entries| entries.into_iter().map(PathBuf::from).collect())
}

/// Split the rate list and parse every entry.
pub fn parse_rate_list(s: &str) -> Result<Vec<SampleRate>> {
    split_list(s, "rate")?
        .into_iter()
        .map(|entry| {
            entry
                .parse::<SampleRate>()
                .map_err(|reason| Error::InvalidSampleRate {
                    value: entry.to_string(),
                    reason,
                })
        })
        .collect()
}

fn split_list<'a>(s: &'a str, what: &str) -> Result<Vec<&'a str>> {
    let entries: Vec<&str> = s.split(LIST_SEPARATOR).collect();
    if let Some(pos) = entries.iter().position(|e| e.trim().is_empty()) {
        return Err(Error::Configuration {
            message: format!("{what} list '{s}' has an empty entry at position {}", pos + 1),
        });
    }
    Ok(entries)
}
