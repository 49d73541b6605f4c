pub mod error;
pub mod http;
pub mod sampler;

pub use error::{FetchError, SamplerError};
pub use http::{BoardClient, SampleSource};
pub use sampler::{Collection, SampleEvent, Sampler};
