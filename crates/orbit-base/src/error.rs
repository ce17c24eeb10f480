//! Error types for Orbit

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum OrbitError {
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type OrbitResult<T> = Result<T, OrbitError>;
