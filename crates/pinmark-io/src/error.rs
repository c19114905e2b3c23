//! I/O error types
//!
//! Provides a unified error type for reading image headers and writing
//! exports. Each format-specific module maps its underlying library errors
//! into `IoError` variants so that callers only need to handle one error
//! type.

use thiserror::Error;

/// Error type for pinmark I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// An encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Invalid plot or export configuration
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] pinmark_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
