//! Error types for the load test

use thiserror::Error;

/// Errors that can occur while configuring or running a load test
#[derive(Debug, Error)]
pub enum LoadTestError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid wait range: min={min}s, max={max}s")]
    InvalidWaitRange { min: f64, max: f64 },

    #[error("Load test failed: {0}")]
    Goose(#[from] goose::GooseError),
}

pub type Result<T> = std::result::Result<T, LoadTestError>;
