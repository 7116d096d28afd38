//! Merge execution.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::kml::{SampleRate, TrackDocument, WriteOptions, downsample};

/// One input track and the rate to thin it with.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackInput {
    /// Path to the KML file.
    pub path: PathBuf,
    /// Sample rate applied to this file's points.
    pub rate: SampleRate,
}

/// What sampling did to one input.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSummary {
    /// Path to the KML file.
    pub path: PathBuf,
    /// Requested sample rate.
    pub rate: SampleRate,
    /// Stride that was applied.
    pub factor: usize,
    /// Points in the input.
    pub total: usize,
    /// Points carried into the merged track.
    pub kept: usize,
}

/// The merged document and per-input sampling results.
#[derive(Debug, Clone)]
pub struct MergedTrack {
    /// First input's document carrying the concatenated coordinates.
    pub document: TrackDocument,
    /// One entry per input, in input order.
    pub inputs: Vec<InputSummary>,
}

impl MergedTrack {
    /// Number of points in the merged track.
    pub fn point_count(&self) -> usize {
        self.inputs.iter().map(|s| s.kept).sum()
    }

    /// Serialize the merged document into memory.
    pub fn to_bytes(&self, options: &WriteOptions) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.document.write_to(&mut out, options)?;
        Ok(out)
    }
}

/// Pair input paths with sample rates by position.
///
/// Fails without touching the filesystem if there are no inputs or the two
/// lists differ in length.
pub fn pair_inputs(inputs: &[PathBuf], rates: &[SampleRate]) -> Result<Vec<TrackInput>> {
    if inputs.len() != rates.len() {
        return Err(Error::Configuration {
            message: format!(
                "exactly one sample rate must be provided for each input ({} inputs, {} rates)",
                inputs.len(),
                rates.len()
            ),
        });
    }
    if inputs.is_empty() {
        return Err(Error::Configuration {
            message: "at least one input is required".to_string(),
        });
    }

    Ok(inputs
        .iter()
        .zip(rates)
        .map(|(path, &rate)| TrackInput {
            path: path.clone(),
            rate,
        })
        .collect())
}

/// Downsample every input and splice the results into the first input's
/// document.
pub fn merge_tracks(inputs: &[TrackInput]) -> Result<MergedTrack> {
    let Some((first, rest)) = inputs.split_first() else {
        return Err(Error::Configuration {
            message: "at least one input is required".to_string(),
        });
    };

    let mut document = TrackDocument::open(&first.path)?;
    let mut points = String::new();
    let mut summaries = Vec::with_capacity(inputs.len());

    summaries.push(sample_into(&document, first.rate, &mut points)?);
    for input in rest {
        let doc = TrackDocument::open(&input.path)?;
        summaries.push(sample_into(&doc, input.rate, &mut points)?);
    }

    document.set_coordinates_text(points)?;

    Ok(MergedTrack {
        document,
        inputs: summaries,
    })
}

/// Merge `inputs`, paired positionally with `rates`, and return the
/// serialized document.
///
/// Nothing is written anywhere; any failure leaves no partial output.
pub fn combine(
    inputs: &[PathBuf],
    rates: &[SampleRate],
    options: &WriteOptions,
) -> Result<Vec<u8>> {
    let inputs = pair_inputs(inputs, rates)?;
    let merged = merge_tracks(&inputs)?;
    debug!(
        "Merged {} points from {} input(s)",
        merged.point_count(),
        merged.inputs.len()
    );
    merged.to_bytes(options)
}

fn sample_into(doc: &TrackDocument, rate: SampleRate, points: &mut String) -> Result<InputSummary> {
    let coordinates = doc.coordinates_text()?;
    let sampled = downsample(&coordinates, rate);
    points.push_str(&sampled.text);

    info!(
        "Sampled {}: kept {} of {} points (rate {rate}, every {})",
        doc.source().display(),
        sampled.kept,
        sampled.total,
        sampled.factor
    );

    Ok(InputSummary {
        path: doc.source().to_path_buf(),
        rate,
        factor: sampled.factor,
        total: sampled.total,
        kept: sampled.kept,
    })
}
