//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use rilega_core::Vocabulary;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to vocabulary configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub vocabulary_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating vocabulary configuration: {}",
            self.vocabulary_config.display()
        );

        match Vocabulary::from_file(&self.vocabulary_config) {
            Ok(vocabulary) => {
                println!("✓ Configuration is valid!");
                println!("  Vocabulary code: {}", vocabulary.code());
                println!("  Vocabulary name: {}", vocabulary.name());
                println!("  Section keywords: {}", vocabulary.keyword_count());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
