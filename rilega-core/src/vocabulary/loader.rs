//! Builtin vocabulary loader
//!
//! Manages embedded vocabularies with caching.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{CoreError, Result};
use crate::vocabulary::{Vocabulary, VocabularyConfig};

/// Embedded vocabulary configurations
static EMBEDDED: OnceLock<HashMap<String, Arc<Vocabulary>>> = OnceLock::new();

/// Codes accepted by [`get_vocabulary`], canonical form first
pub const BUILTIN_CODES: &[&str] = &["multi", "en", "it"];

/// Load a builtin vocabulary by code
///
/// Accepts `en`/`english`, `it`/`italian`, and `multi`/`multilingual` (the
/// union of the two, matching the original combined keyword list).
pub fn get_vocabulary(code: &str) -> Result<Arc<Vocabulary>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        let english = parse_embedded("en", include_str!("../../configs/vocabularies/english.toml"));
        let italian = parse_embedded("it", include_str!("../../configs/vocabularies/italian.toml"));

        if let Some(config) = &english {
            match Vocabulary::from_config(config) {
                Ok(vocab) => {
                    let vocab = Arc::new(vocab);
                    map.insert("en".to_string(), vocab.clone());
                    map.insert("english".to_string(), vocab);
                }
                Err(e) => eprintln!("Warning: Failed to load English vocabulary: {e}"),
            }
        }

        if let Some(config) = &italian {
            match Vocabulary::from_config(config) {
                Ok(vocab) => {
                    let vocab = Arc::new(vocab);
                    map.insert("it".to_string(), vocab.clone());
                    map.insert("italian".to_string(), vocab);
                }
                Err(e) => eprintln!("Warning: Failed to load Italian vocabulary: {e}"),
            }
        }

        if let (Some(english), Some(italian)) = (english, italian) {
            match Vocabulary::merged(
                "multi",
                "Multilingual (English + Italian)",
                &[english, italian],
            ) {
                Ok(vocab) => {
                    let vocab = Arc::new(vocab);
                    map.insert("multi".to_string(), vocab.clone());
                    map.insert("multilingual".to_string(), vocab);
                }
                Err(e) => eprintln!("Warning: Failed to build multilingual vocabulary: {e}"),
            }
        }

        map
    });

    embedded
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| CoreError::Vocabulary(format!("Unknown vocabulary code: {code}")))
}

fn parse_embedded(code: &str, toml_str: &str) -> Option<VocabularyConfig> {
    match toml::from_str(toml_str) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Warning: Failed to parse embedded {code} vocabulary: {e}");
            None
        }
    }
}
