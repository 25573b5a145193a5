//! Configuration structures and validation
//!
//! This module defines the TOML schema for vocabulary configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root vocabulary configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Vocabulary identity
    pub metadata: Metadata,
    /// Section keyword table
    pub sections: Sections,
    /// Month abbreviations used by the date heuristic
    pub months: Months,
    /// Heuristic thresholds, all optional in the TOML
    #[serde(default)]
    pub heuristics: Heuristics,
}

/// Vocabulary metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Short vocabulary code, e.g. "en"
    pub code: String,
    /// Human-readable name, e.g. "English"
    pub name: String,
}

/// Section keyword table: canonical section name to matching keywords
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sections {
    /// Canonical section name to the keywords that identify it
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// Month abbreviation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Months {
    /// Lower-case month abbreviations, e.g. "jan", "feb"
    pub abbreviations: Vec<String>,
}

/// Tunable thresholds for the line heuristics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heuristics {
    /// Maximum line length (chars) for a section-header match
    #[serde(default = "default_section_max_chars")]
    pub section_max_chars: usize,
    /// Maximum line length (chars) for a date match
    #[serde(default = "default_date_max_chars")]
    pub date_max_chars: usize,
    /// Non-ASCII letters that still count as a lowercase continuation start
    #[serde(default)]
    pub lowercase_extra: String,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            section_max_chars: default_section_max_chars(),
            date_max_chars: default_date_max_chars(),
            lowercase_extra: String::new(),
        }
    }
}

fn default_section_max_chars() -> usize {
    35
}

fn default_date_max_chars() -> usize {
    50
}

impl VocabularyConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("Empty vocabulary code".to_string());
        }

        if self.sections.categories.is_empty() {
            return Err("No section keywords defined".to_string());
        }

        for (section, keywords) in &self.sections.categories {
            if keywords.iter().any(|kw| kw.trim().is_empty()) {
                return Err(format!("Empty keyword in section '{section}'"));
            }
        }

        if self.heuristics.section_max_chars == 0 {
            return Err("section_max_chars must be positive".to_string());
        }

        if self.heuristics.date_max_chars == 0 {
            return Err("date_max_chars must be positive".to_string());
        }

        Ok(())
    }
}
