//! Résumé text reflow and line classification
//!
//! Document extraction (PDF/DOCX to plain text) breaks résumé sentences at
//! the source document's visual line width. This crate rejoins those
//! soft-wrapped fragments into logical lines and classifies each one as
//! title, section header, contact information, date, or body text, driven by
//! a configurable keyword vocabulary.
//!
//! Both passes are pure and total: same input, same output; malformed text
//! degrades to `Body` classification rather than an error.
//!
//! # Example
//!
//! ```
//! use rilega_core::{reflow_text, LineKind};
//!
//! let output = reflow_text("Mario Rossi\nEsperienza\nBackend engineer at\nacme corp").unwrap();
//! assert_eq!(output.lines[0].kind, LineKind::Title);
//! assert_eq!(output.lines[1].kind, LineKind::SectionHeader);
//! assert_eq!(output.lines[2].text, "Backend engineer at acme corp");
//! ```
//!
//! # Known limitation
//!
//! The heuristics are tuned for English and Italian résumés. Lines in other
//! scripts never count as lowercase continuations and month detection only
//! covers the configured abbreviations, so such text passes through unmerged
//! and classifies as body.

#![warn(missing_docs)]

pub mod classifier;
pub mod error;
pub mod input;
pub mod merger;
pub mod output;
pub mod vocabulary;

use std::sync::Arc;
use std::time::Instant;

use classifier::LineClassifier;
use merger::LineMerger;

pub use classifier::LineKind;
pub use error::{CoreError, Result};
pub use input::Input;
pub use output::{ClassifiedLine, Metadata, Output};
pub use vocabulary::{get_vocabulary, Vocabulary, VocabularyConfig};

/// High-level processing configuration
#[derive(Debug, Clone)]
pub struct Config {
    language: String,
    vocabulary: Option<Arc<Vocabulary>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "multi".to_string(),
            vocabulary: None,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configured language code
    pub fn language(&self) -> &str {
        &self.language
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the builtin vocabulary by language code
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Use a custom vocabulary instead of a builtin one
    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.config.vocabulary = Some(Arc::new(vocabulary));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.language.is_empty() && self.config.vocabulary.is_none() {
            return Err(CoreError::Config(
                "language or custom vocabulary required".to_string(),
            ));
        }
        Ok(self.config)
    }
}

/// Main entry point for résumé text reflow
///
/// Holds the resolved vocabulary; each [`process`](Self::process) call is an
/// independent pure computation over its input.
pub struct ResumeProcessor {
    vocabulary: Arc<Vocabulary>,
    config: Config,
}

impl ResumeProcessor {
    /// Create a processor with the default configuration (multilingual)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a processor with a specific builtin vocabulary
    pub fn with_language(lang_code: &str) -> Result<Self> {
        let config = Config::builder().language(lang_code).build()?;
        Self::with_config(config)
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let vocabulary = match &config.vocabulary {
            Some(vocabulary) => vocabulary.clone(),
            None => vocabulary::get_vocabulary(&config.language)?,
        };
        Ok(Self { vocabulary, config })
    }

    /// Process input and return classified logical lines
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();

        let text = input.read_text()?;
        // Upstream extractors can leak NUL bytes into the text; strip them
        // before any line handling.
        let text = sanitize(&text);

        let raw_lines: Vec<&str> = text
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .collect();
        let raw_line_count = raw_lines.len();

        let merger = LineMerger::new(&self.vocabulary);
        let merged = merger.merge(raw_lines);

        let classifier = LineClassifier::new(&self.vocabulary);
        let lines: Vec<ClassifiedLine> = merged
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let (kind, section) = classifier.classify(index, &text);
                ClassifiedLine {
                    text,
                    kind,
                    section,
                }
            })
            .collect();

        let metadata = Metadata {
            total_bytes: text.len(),
            total_chars: text.chars().count(),
            raw_lines: raw_line_count,
            merged_lines: lines.len(),
            processing_time_ms: start.elapsed().as_millis() as u64,
            vocabulary: self.vocabulary.code().to_string(),
        };

        Ok(Output { lines, metadata })
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the active vocabulary
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

/// Strip characters the upstream extractors are known to leak
fn sanitize(text: &str) -> String {
    text.replace('\0', "")
}

// Convenience functions

/// Reflow and classify text with the default configuration
pub fn reflow_text(text: &str) -> Result<Output> {
    let processor = ResumeProcessor::new()?;
    processor.process(Input::from_text(text))
}

/// Reflow and classify a file with the default configuration
pub fn reflow_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    let processor = ResumeProcessor::new()?;
    processor.process(Input::from_file(path.as_ref().to_path_buf()))
}

/// Reflow and classify text with a specific builtin vocabulary
pub fn reflow_text_with_language(text: &str, lang_code: &str) -> Result<Output> {
    let processor = ResumeProcessor::with_language(lang_code)?;
    processor.process(Input::from_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_output() {
        let output = reflow_text("").unwrap();
        assert!(output.lines.is_empty());
        assert_eq!(output.metadata.merged_lines, 0);
    }

    #[test]
    fn test_whitespace_only_input_yields_empty_output() {
        let output = reflow_text("   \n\t\n  \n").unwrap();
        assert!(output.lines.is_empty());
    }

    #[test]
    fn test_nul_bytes_stripped() {
        let output = reflow_text("Mario\0 Rossi\nbackend\0 work").unwrap();
        assert_eq!(output.lines[0].text, "Mario Rossi");
    }

    #[test]
    fn test_metadata_counts() {
        let output = reflow_text("Mario Rossi\nworked on the\nbilling platform").unwrap();
        assert_eq!(output.metadata.raw_lines, 3);
        assert_eq!(output.metadata.merged_lines, output.lines.len());
        assert!(output.metadata.merged_lines <= output.metadata.raw_lines);
        assert_eq!(output.metadata.vocabulary, "multi");
    }

    #[test]
    fn test_builder_empty_language_rejected() {
        assert!(Config::builder().language("").build().is_err());
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(ResumeProcessor::with_language("xx").is_err());
    }

    #[test]
    fn test_custom_vocabulary() {
        let toml = r#"
[metadata]
code = "custom"
name = "Custom"

[sections]
work = ["career"]

[months]
abbreviations = ["jan"]
"#;
        let vocabulary = Vocabulary::from_toml_str(toml).unwrap();
        let config = Config::builder().vocabulary(vocabulary).build().unwrap();
        let processor = ResumeProcessor::with_config(config).unwrap();

        let output = processor.process_text("Jane Doe\nCareer\nShipped things.").unwrap();
        assert_eq!(output.lines[1].kind, LineKind::SectionHeader);
        assert_eq!(output.lines[1].section.as_deref(), Some("work"));
        assert_eq!(output.metadata.vocabulary, "custom");
    }
}
