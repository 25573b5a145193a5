//! Reflow command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use rilega_core::{Config, Input, ResumeProcessor, Vocabulary};

use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use crate::vocabulary_source::VocabularySource;

/// Arguments for the reflow command
#[derive(Debug, Args)]
pub struct ReflowArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Builtin vocabulary for the heuristics
    #[arg(short, long, value_enum, default_value = "multi")]
    pub language: Language,

    /// External vocabulary configuration file (overrides --language)
    #[arg(long, value_name = "FILE", conflicts_with = "language")]
    pub vocabulary_config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Labelled line per logical line
    Text,
    /// JSON array of classified lines
    Json,
    /// Markdown formatted output
    Markdown,
}

/// Supported builtin vocabularies
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Language {
    /// English keywords only
    #[value(alias = "en")]
    English,
    /// Italian keywords only
    #[value(alias = "it")]
    Italian,
    /// English + Italian combined
    #[value(alias = "multilingual")]
    Multi,
}

impl ReflowArgs {
    /// Execute the reflow command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let source = self.vocabulary_source();
        log::info!("Vocabulary: {}", source.display_name());

        let processor = build_processor(&source)?;
        let mut formatter = self.create_formatter()?;

        if self.input.is_empty() {
            log::info!("Reading résumé text from stdin");
            let text = FileReader::read_stdin()?;
            format_document(&processor, Input::from_text(text), formatter.as_mut())?;
        } else {
            let files = resolve_patterns(&self.input)?;
            log::info!("Processing {} file(s)", files.len());

            let mut progress = ProgressReporter::new(self.quiet || self.output.is_none());
            progress.init_files(files.len() as u64);

            for path in &files {
                log::debug!(
                    "Processing {} ({} bytes)",
                    path.display(),
                    FileReader::file_size(path).unwrap_or(0)
                );
                let text = FileReader::read_text(path)?;
                format_document(&processor, Input::from_text(text), formatter.as_mut())?;
                progress.file_completed(&path.display().to_string());
            }

            progress.finish();
        }

        formatter.finish()?;
        Ok(())
    }

    fn vocabulary_source(&self) -> VocabularySource {
        match &self.vocabulary_config {
            Some(path) => VocabularySource::External { path: path.clone() },
            None => VocabularySource::BuiltIn(self.language),
        }
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn build_processor(source: &VocabularySource) -> Result<ResumeProcessor> {
    let processor = match source {
        VocabularySource::BuiltIn(language) => ResumeProcessor::with_language(language.code())?,
        VocabularySource::External { path } => {
            let vocabulary = Vocabulary::from_file(path)?;
            ResumeProcessor::with_config(Config::builder().vocabulary(vocabulary).build()?)?
        }
    };
    Ok(processor)
}

fn format_document(
    processor: &ResumeProcessor,
    input: Input,
    formatter: &mut dyn OutputFormatter,
) -> Result<()> {
    let output = processor.process(input)?;
    log::info!(
        "Merged {} raw lines into {} logical lines in {} ms",
        output.metadata.raw_lines,
        output.metadata.merged_lines,
        output.metadata.processing_time_ms,
    );

    for (index, line) in output.lines.iter().enumerate() {
        formatter.format_line(line, index)?;
    }
    Ok(())
}
