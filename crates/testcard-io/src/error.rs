//! I/O error types
//!
//! Provides a unified error type for image read/write operations. Each
//! format module maps its underlying library errors into `IoError`
//! variants so that callers only need to handle one error type; core
//! errors pass through unchanged.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The container or pixel layout is not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// No format given and none could be inferred from the file name
    #[error("cannot infer image format from '{0}'")]
    UnknownExtension(String),

    /// The file contents are structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// A format-specific decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// A format-specific encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library, surfaced unchanged
    #[error("core error: {0}")]
    Core(#[from] testcard_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
