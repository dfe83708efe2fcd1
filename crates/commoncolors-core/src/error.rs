//! Error types for commoncolors-core
//!
//! The color-space functions themselves are total; only operations that
//! reduce a collection of colors or parse external text can fail.

use thiserror::Error;

/// Commoncolors core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Empty input
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// Sum of weights overflowed while merging colors
    #[error("weight overflow while merging {0} colors")]
    WeightOverflow(usize),

    /// Malformed hex color string
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
