use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing field in sample: {0}")]
    MissingField(String),

    #[error("Invalid value for field {field}: {value}")]
    InvalidField { field: String, value: String },

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Move range {min}..={max} is too wide to chart (limit {limit} values)")]
    AxisTooWide { min: u32, max: u32, limit: u32 },

    #[error("Chart rendering failed: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
