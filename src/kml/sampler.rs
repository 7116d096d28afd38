//! Stride downsampling of coordinate text.
//!
//! Points are opaque lines of text. A [`SampleRate`] resolves to an integer
//! stride (the sample factor) and every stride-th line is kept, starting
//! with the first.

use crate::constants::FRACTION_RATE_LIMIT;
use std::fmt;
use std::str::FromStr;

/// How aggressively to thin one input's point sequence.
///
/// Values at or below 1.0 are the fraction of points to keep. Values above
/// 1.0 are the approximate number of points to keep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRate(f64);

impl SampleRate {
    /// Create a sample rate, rejecting zero, negative and NaN values.
    pub fn new(value: f64) -> Result<Self, String> {
        if value.is_nan() {
            return Err("not a number".to_string());
        }
        if value <= 0.0 {
            return Err(format!("must be greater than 0, got {value}"));
        }
        Ok(Self(value))
    }

    /// The raw rate.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether the rate is a retention fraction rather than a point count.
    pub fn is_fraction(self) -> bool {
        self.0 <= FRACTION_RATE_LIMIT
    }

    /// Stride for a sequence whose raw text contains `newline_count` `\n`
    /// characters. Never less than 1.
    ///
    /// For point-count rates this divides the newline count rather than the
    /// number of lines. The two differ by one when the text lacks a trailing
    /// newline; existing merged tracks depend on this exact formula.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn factor(self, newline_count: usize) -> usize {
        let raw = if self.is_fraction() {
            (1.0 / self.0).floor()
        } else {
            (newline_count as f64 / self.0).floor()
        };
        (raw as usize).max(1)
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SampleRate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{s}' is not a valid number"))?;
        Self::new(value)
    }
}

/// Result of downsampling one coordinate sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledPoints {
    /// Retained points, each followed by `\n`.
    pub text: String,
    /// Stride that was applied.
    pub factor: usize,
    /// Number of lines in the source text.
    pub total: usize,
    /// Number of lines retained.
    pub kept: usize,
}

/// Keep every `factor`-th line of `coordinates`, starting with line 0.
///
/// Blank lines in the middle of the text count as points. A trailing newline
/// does not produce an extra empty point.
pub fn downsample(coordinates: &str, rate: SampleRate) -> SampledPoints {
    let newline_count = coordinates.matches('\n').count();
    let factor = rate.factor(newline_count);

    let mut text = String::with_capacity(coordinates.len() / factor + 1);
    let mut total = 0;
    let mut kept = 0;
    for (i, point) in coordinates.lines().enumerate() {
        total += 1;
        if i % factor == 0 {
            text.push_str(point);
            text.push('\n');
            kept += 1;
        }
    }

    SampledPoints {
        text,
        factor,
        total,
        kept,
    }
}
