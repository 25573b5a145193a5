//! Rilega CLI library
//!
//! This library provides the command-line interface for the rilega
//! résumé text reflow and classification system.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod vocabulary_source;

pub use error::{CliError, CliResult};
