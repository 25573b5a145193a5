//! Résumé vocabularies: the configurable policy behind the line heuristics
//!
//! A [`Vocabulary`] is the compiled runtime form of a [`VocabularyConfig`]:
//! the section keyword table, month abbreviations, and heuristic thresholds,
//! with the regex patterns built once up front. The merge/classify control
//! flow never hardcodes a keyword; tuning or localizing the heuristics means
//! editing a TOML file, not the code.

pub mod config;
pub mod loader;

use std::path::Path;

use regex::Regex;

use crate::error::{CoreError, Result};

pub use config::VocabularyConfig;
pub use loader::get_vocabulary;

/// Characters that end a logical line cleanly; a following line never
/// continues past one of these.
const CLEAN_ENDINGS: [char; 5] = ['.', ':', ';', '?', '!'];

/// One keyword of the section table, mapped to its canonical section name.
#[derive(Debug, Clone)]
struct KeywordEntry {
    keyword: String,
    section: String,
}

/// Compiled vocabulary: keyword table plus named predicates
#[derive(Debug, Clone)]
pub struct Vocabulary {
    code: String,
    name: String,
    keywords: Vec<KeywordEntry>,
    /// Month abbreviation or DD/MM-style numeric date, case-insensitive
    date_hint: Regex,
    /// Four consecutive digits (a year)
    year: Regex,
    /// Whole-line phone number: optional +, digit, 7+ phone characters
    phone: Regex,
    section_max_chars: usize,
    date_max_chars: usize,
    lowercase_extra: Vec<char>,
}

impl Vocabulary {
    /// Compile a vocabulary from a validated configuration
    pub fn from_config(config: &VocabularyConfig) -> Result<Self> {
        config.validate().map_err(CoreError::Vocabulary)?;
        Self::compile(
            config.metadata.code.clone(),
            config.metadata.name.clone(),
            std::slice::from_ref(config),
        )
    }

    /// Load and compile a vocabulary from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and compile a vocabulary from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: VocabularyConfig = toml::from_str(toml_str)
            .map_err(|e| CoreError::Vocabulary(format!("Failed to parse config: {e}")))?;
        Self::from_config(&config)
    }

    /// Compile the union of several configurations under one code
    ///
    /// Used for the builtin `multi` vocabulary, which reproduces the original
    /// combined Italian + English keyword list. Thresholds take the maximum
    /// across the merged configs.
    pub fn merged(code: &str, name: &str, configs: &[VocabularyConfig]) -> Result<Self> {
        if configs.is_empty() {
            return Err(CoreError::Vocabulary(
                "No configurations to merge".to_string(),
            ));
        }
        for config in configs {
            config.validate().map_err(CoreError::Vocabulary)?;
        }
        Self::compile(code.to_string(), name.to_string(), configs)
    }

    fn compile(code: String, name: String, configs: &[VocabularyConfig]) -> Result<Self> {
        let mut keywords: Vec<KeywordEntry> = Vec::new();
        let mut months: Vec<String> = Vec::new();
        let mut lowercase_extra: Vec<char> = Vec::new();
        let mut section_max_chars = 0;
        let mut date_max_chars = 0;

        for config in configs {
            for (section, words) in &config.sections.categories {
                for word in words {
                    let keyword = word.trim().to_lowercase();
                    if !keywords.iter().any(|e| e.keyword == keyword) {
                        keywords.push(KeywordEntry {
                            keyword,
                            section: section.clone(),
                        });
                    }
                }
            }
            for month in &config.months.abbreviations {
                let month = month.trim().to_lowercase();
                if !month.is_empty() && !months.contains(&month) {
                    months.push(month);
                }
            }
            for ch in config.heuristics.lowercase_extra.chars() {
                if !lowercase_extra.contains(&ch) {
                    lowercase_extra.push(ch);
                }
            }
            section_max_chars = section_max_chars.max(config.heuristics.section_max_chars);
            date_max_chars = date_max_chars.max(config.heuristics.date_max_chars);
        }

        // Stable match order regardless of config map iteration order
        keywords.sort_by(|a, b| a.keyword.cmp(&b.keyword));

        let mut date_alternatives: Vec<String> =
            months.iter().map(|m| regex::escape(m)).collect();
        date_alternatives.push(r"\d{2}/\d{2}".to_string());
        let date_hint = Regex::new(&format!("(?i){}", date_alternatives.join("|")))
            .map_err(|e| CoreError::Vocabulary(format!("Invalid month pattern: {e}")))?;

        let year = Regex::new(r"\d{4}").expect("year pattern is valid");
        let phone = Regex::new(r"^\+?\d[\d\s\-().]{7,}$").expect("phone pattern is valid");

        Ok(Self {
            code,
            name,
            keywords,
            date_hint,
            year,
            phone,
            section_max_chars,
            date_max_chars,
            lowercase_extra,
        })
    }

    /// Vocabulary code (e.g. "en", "it", "multi")
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable vocabulary name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of keywords in the section table
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Canonical section name for a header line, if the line is one
    ///
    /// Matches the lower-cased trimmed line against each keyword: exact,
    /// `"<keyword> "` prefix, or `" <keyword>"` suffix. Length-gated so a
    /// long body sentence containing a keyword does not match.
    pub fn section_for(&self, line: &str) -> Option<&str> {
        if line.chars().count() >= self.section_max_chars {
            return None;
        }
        let lower = line.to_lowercase();
        let lower = lower.trim();
        self.keywords
            .iter()
            .find(|entry| {
                let kw = entry.keyword.as_str();
                lower == kw
                    || lower
                        .strip_prefix(kw)
                        .is_some_and(|rest| rest.starts_with(' '))
                    || lower
                        .strip_suffix(kw)
                        .is_some_and(|rest| rest.ends_with(' '))
            })
            .map(|entry| entry.section.as_str())
    }

    /// Whether the line is a section header
    pub fn is_section_header(&self, line: &str) -> bool {
        self.section_for(line).is_some()
    }

    /// Whether the line looks like contact information
    ///
    /// An `@`, a "linkedin" mention, or a whole-line phone number.
    pub fn is_contact(&self, line: &str) -> bool {
        line.contains('@')
            || line.to_lowercase().contains("linkedin")
            || self.phone.is_match(line.trim())
    }

    /// Whether the line looks like a date or date range
    ///
    /// Requires a four-digit year, a short line, and either a month
    /// abbreviation or a DD/MM-style numeric date.
    pub fn is_date(&self, line: &str) -> bool {
        self.year.is_match(line)
            && line.chars().count() < self.date_max_chars
            && self.date_hint.is_match(line)
    }

    /// Whether a character counts as a lowercase continuation start
    pub fn starts_lowercase(&self, ch: char) -> bool {
        ch.is_ascii_lowercase() || self.lowercase_extra.contains(&ch)
    }

    /// Whether a character ends a logical line cleanly
    pub fn ends_clean(&self, ch: char) -> bool {
        CLEAN_ENDINGS.contains(&ch)
    }
}
