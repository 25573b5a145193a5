//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use rilega_core::ClassifiedLine;
use std::io::{self, Write};

/// Plain text formatter - one labelled line per logical line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, line: &ClassifiedLine, _index: usize) -> Result<()> {
        writeln!(self.writer, "{:<14} {}", line.kind, line.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
