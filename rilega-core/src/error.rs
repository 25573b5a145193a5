//! Core error types

use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors surfaced by the reflow library
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Vocabulary loading or validation error
    #[error("vocabulary error: {0}")]
    Vocabulary(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
