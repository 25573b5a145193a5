//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use rilega_core::{ClassifiedLine, LineKind};
use std::io::Write;

/// Markdown formatter - renders the classified résumé as a document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    line_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_line(&mut self, line: &ClassifiedLine, _index: usize) -> Result<()> {
        self.line_count += 1;
        match line.kind {
            LineKind::Title => writeln!(self.writer, "# {}", line.text)?,
            LineKind::SectionHeader => {
                writeln!(self.writer)?;
                writeln!(self.writer, "## {}", line.text)?;
            }
            LineKind::Contact => writeln!(self.writer, "*{}*", line.text)?,
            LineKind::Date => writeln!(self.writer, "**{}**", line.text)?,
            LineKind::Body => writeln!(self.writer, "{}", line.text)?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total lines: {}*", self.line_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
