//! I/O error types
//!
//! Each format module maps its decoder's errors into `IoError` variants,
//! so callers handle a single error type.

use thiserror::Error;

/// Error type for image decoding
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not recognized or not enabled via features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// A format-specific decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
