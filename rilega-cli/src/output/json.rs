//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use rilega_core::{ClassifiedLine, LineKind};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs classified lines as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    lines: Vec<LineData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct LineData {
    /// Position in the merged sequence
    pub index: usize,
    /// The logical line text
    pub text: String,
    /// Assigned classification
    pub kind: LineKind,
    /// Canonical section name for header lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, line: &ClassifiedLine, index: usize) -> Result<()> {
        self.lines.push(LineData {
            index,
            text: line.text.clone(),
            kind: line.kind,
            section: line.section.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
