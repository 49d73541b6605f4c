pub mod format;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Envelope for `--format json` results.
#[derive(Debug, Serialize)]
pub struct RunReport<T: Serialize> {
    pub command: &'static str,
    pub endpoint: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: T,
}

impl<T: Serialize> RunReport<T> {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
