//! Vocabulary source management for CLI

use crate::commands::reflow::Language;
use std::path::PathBuf;

/// Source of the active vocabulary
#[derive(Debug, Clone)]
pub enum VocabularySource {
    /// Built-in vocabulary
    BuiltIn(Language),
    /// External configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
    },
}

impl VocabularySource {
    /// Get the display name for the vocabulary source
    pub fn display_name(&self) -> String {
        match self {
            VocabularySource::BuiltIn(lang) => format!("Built-in: {}", lang.as_str()),
            VocabularySource::External { path } => format!("External: {}", path.display()),
        }
    }
}

impl Language {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Italian => "Italian",
            Language::Multi => "Multilingual",
        }
    }

    /// Get vocabulary code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Italian => "it",
            Language::Multi => "multi",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_display_name() {
        let source = VocabularySource::BuiltIn(Language::Italian);
        assert_eq!(source.display_name(), "Built-in: Italian");
    }

    #[test]
    fn test_external_display_name() {
        let source = VocabularySource::External {
            path: PathBuf::from("custom.toml"),
        };
        assert_eq!(source.display_name(), "External: custom.toml");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Italian.code(), "it");
        assert_eq!(Language::Multi.code(), "multi");
    }
}
