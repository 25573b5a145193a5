//! Output types: classified lines and processing metadata

use serde::{Deserialize, Serialize};

use crate::classifier::LineKind;

/// One logical line with its classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// Reconstructed line text, trimmed
    pub text: String,
    /// Assigned classification
    pub kind: LineKind,
    /// Canonical section name when `kind` is a section header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Total bytes processed
    pub total_bytes: usize,
    /// Total characters processed
    pub total_chars: usize,
    /// Non-blank raw lines before merging
    pub raw_lines: usize,
    /// Logical lines after merging
    pub merged_lines: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Vocabulary code used
    pub vocabulary: String,
}

/// Complete output: classified lines and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    /// Logical lines in document order
    pub lines: Vec<ClassifiedLine>,
    /// Processing metadata
    pub metadata: Metadata,
}
