pub mod sample;

pub use sample::{canonical_json, Sample, MOVES_FIELD};
