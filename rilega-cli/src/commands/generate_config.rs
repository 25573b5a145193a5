//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Vocabulary code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating vocabulary configuration template...");
        println!("  Vocabulary code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to customize the keyword table");
        println!("2. Validate your configuration:");
        println!(
            "   rilega validate --vocabulary-config {}",
            self.output.display()
        );
        println!("3. Use it for processing:");
        println!(
            "   rilega reflow -i resume.txt --vocabulary-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Vocabulary configuration for {}

[metadata]
code = "{}"
name = "Custom Vocabulary"

# Section keyword table: canonical section name -> matching keywords.
# A line is a section header when, lower-cased and trimmed, it equals a
# keyword, starts with "<keyword> ", or ends with " <keyword>" - and the
# whole line is shorter than section_max_chars.
[sections]
experience = ["experience"]
education = ["education"]
skills = ["skills"]
projects = ["projects"]
certifications = ["certifications"]
languages = ["languages"]
summary = ["summary"]
profile = ["profile"]
contact = ["contact"]
publications = ["publications"]

# Three-letter month abbreviations used for date detection,
# matched case-insensitively anywhere in the line.
[months]
abbreviations = [
    "jan", "feb", "mar", "apr", "may", "jun",
    "jul", "aug", "sep", "oct", "nov", "dec",
]

# Tunable thresholds for the line heuristics
[heuristics]
# Maximum line length (chars) for a section-header match
section_max_chars = 35
# Maximum line length (chars) for a date match
date_max_chars = 50
# Non-ASCII letters that still count as a lowercase continuation start
lowercase_extra = ""
"#,
            self.language_code, self.language_code
        )
    }
}
