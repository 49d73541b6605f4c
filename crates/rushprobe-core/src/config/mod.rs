pub mod settings;

pub use settings::{ProbeConfig, SamplingBudget, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
