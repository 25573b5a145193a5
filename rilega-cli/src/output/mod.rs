//! Output formatting module

use anyhow::Result;
use rilega_core::ClassifiedLine;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single classified line
    fn format_line(&mut self, line: &ClassifiedLine, index: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
