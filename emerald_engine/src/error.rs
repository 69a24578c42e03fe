//! Error types for the Emerald engine
//!
//! Only conditions that make continued rendering meaningless are surfaced
//! as errors (display/context setup, scene loading, configuration).
//! Per-entity anomalies inside the frame loop never produce an `Error`.

use std::fmt;

/// Result type for Emerald engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Emerald engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Initialization failed (display, context, scene load)
    InitializationFailed(String),

    /// Configuration could not be parsed or failed validation
    InvalidConfig(String),

    /// I/O failure while reading engine files
    Io(String),

    /// Failure reported by an external collaborator (renderer, presenter)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
