//! Error types for the Saturi library.
//!
//! All errors are represented by the [`SaturiError`] enum. Dictionary errors
//! ([`SaturiError::DataFormat`], [`SaturiError::Schema`]) are fatal at startup,
//! while request-level errors carry an HTTP-style status through
//! [`SaturiError::status_code`] so a transport layer can shape its reply.
//!
//! # Examples
//!
//! ```
//! use saturi::error::{Result, SaturiError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SaturiError::client_input("missing required field: sentence"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => assert_eq!(e.status_code(), 400),
//! }
//! ```

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Why the external translation fallback could not produce a sentence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FallbackFailure {
    /// The translator did not answer within the configured timeout.
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// The translator answered with an error or could not be reached.
    #[error("{0}")]
    Service(String),
}

/// The main error type for Saturi operations.
#[derive(Error, Debug)]
pub enum SaturiError {
    /// I/O errors outside of dictionary loading
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary source could not be read or decoded
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// Dictionary source is structurally invalid (no header row)
    #[error("Schema error: {0}")]
    Schema(String),

    /// Invalid or missing request field
    #[error("Invalid request: {0}")]
    ClientInput(String),

    /// External translation failed or timed out
    #[error("Fallback translation unavailable: {0}")]
    FallbackUnavailable(FallbackFailure),

    /// Configuration value out of range or unknown
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SaturiError.
pub type Result<T> = std::result::Result<T, SaturiError>;

impl SaturiError {
    /// Create a new data format error.
    pub fn data_format<S: Into<String>>(msg: S) -> Self {
        SaturiError::DataFormat(msg.into())
    }

    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        SaturiError::Schema(msg.into())
    }

    /// Create a new client input error.
    pub fn client_input<S: Into<String>>(msg: S) -> Self {
        SaturiError::ClientInput(msg.into())
    }

    /// Create a fallback error for a translator that failed.
    pub fn fallback_service<S: Into<String>>(msg: S) -> Self {
        SaturiError::FallbackUnavailable(FallbackFailure::Service(msg.into()))
    }

    /// Create a fallback error for a translator that did not answer in time.
    pub fn fallback_timeout(after: Duration) -> Self {
        SaturiError::FallbackUnavailable(FallbackFailure::Timeout(after))
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SaturiError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SaturiError::Other(msg.into())
    }

    /// Whether this error was caused by the caller rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SaturiError::ClientInput(_))
    }

    /// HTTP-style status code a transport should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            SaturiError::ClientInput(_) => 400,
            SaturiError::FallbackUnavailable(FallbackFailure::Timeout(_)) => 504,
            SaturiError::FallbackUnavailable(FallbackFailure::Service(_)) => 502,
            _ => 500,
        }
    }
}
