//! Logical line classification
//!
//! Assigns exactly one [`LineKind`] to each merged line. Precedence is fixed
//! and evaluated top to bottom: title, section header, contact, date, body.
//! The first logical line is always the title (résumé headers are reliably
//! the candidate's name), header detection is length-gated, and contact
//! outranks date because email/phone patterns are the higher-precision
//! signal. The classifier is total: any input falls through to `Body`.

use serde::{Deserialize, Serialize};

use crate::vocabulary::Vocabulary;

/// Classification of one logical line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// First logical line of the document (the candidate's name)
    Title,
    /// Résumé section heading such as "Experience" or "Competenze"
    SectionHeader,
    /// Email, LinkedIn mention, or phone number
    Contact,
    /// Date or date range
    Date,
    /// Anything else
    Body,
}

impl LineKind {
    /// Stable lowercase label, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Title => "title",
            LineKind::SectionHeader => "section_header",
            LineKind::Contact => "contact",
            LineKind::Date => "date",
            LineKind::Body => "body",
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classifies logical lines against a vocabulary's heuristics
#[derive(Debug)]
pub struct LineClassifier<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> LineClassifier<'v> {
    /// Create a classifier using the given vocabulary's policy
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Classify a logical line by content and position
    ///
    /// Returns the kind and, for section headers, the canonical section name
    /// from the keyword table.
    pub fn classify(&self, index: usize, line: &str) -> (LineKind, Option<String>) {
        if index == 0 {
            return (LineKind::Title, None);
        }
        if let Some(section) = self.vocabulary.section_for(line) {
            return (LineKind::SectionHeader, Some(section.to_string()));
        }
        if self.vocabulary.is_contact(line) {
            return (LineKind::Contact, None);
        }
        if self.vocabulary.is_date(line) {
            return (LineKind::Date, None);
        }
        (LineKind::Body, None)
    }
}
