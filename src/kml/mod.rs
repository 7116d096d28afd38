//! KML track documents, point sampling and serialization.

mod document;
mod sampler;
mod writer;

pub use document::TrackDocument;
pub use sampler::{SampleRate, SampledPoints, downsample};
pub use writer::{WriteOptions, write_element};
