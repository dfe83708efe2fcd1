//! Error types for commoncolors-color

use thiserror::Error;

/// Errors that can occur while building a palette
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] commoncolors_core::Error),

    /// The `algorithm` option names no known distance metric
    #[error("unsupported algorithm: {0:?} (expected \"simple\" or \"yiq\")")]
    UnsupportedAlgorithm(String),

    /// A gradient was requested for a palette with no colors
    #[error("empty palette: no gradient available")]
    EmptyPalette,
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
