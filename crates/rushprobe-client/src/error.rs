use thiserror::Error;

/// Why a single request did not produce a sample.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("Request {attempt} failed: {source}")]
    Aborted {
        attempt: usize,
        #[source]
        source: FetchError,
    },
}
