//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod reflow;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reflow and classify extracted résumé text
    Reflow(reflow::ReflowArgs),

    /// Validate a vocabulary configuration file
    Validate(validate::ValidateArgs),

    /// Generate a vocabulary configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available builtin vocabularies
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) {
        match self {
            ListCommands::Languages => {
                println!("Available vocabularies:");
                println!("  multi - English + Italian combined (default)");
                println!("  en    - English");
                println!("  it    - Italian");
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text     - Labelled line per logical line (default)");
                println!("  json     - JSON array of classified lines");
                println!("  markdown - Rendered markdown document");
            }
        }
    }
}
