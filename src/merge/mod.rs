//! Track merging.
//!
//! Each input is downsampled on its own and the results are concatenated,
//! in input order, into the coordinate text of the first input's document.

mod combine;

pub use combine::{InputSummary, MergedTrack, TrackInput, combine, merge_tracks, pair_inputs};
