pub mod config;
pub mod detect;
pub mod error;
pub mod histogram;
pub mod model;

pub use error::CoreError;
