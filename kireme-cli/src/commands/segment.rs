//! Segment command implementation

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{
    format_segments_json, format_segments_text, OutputTarget, SegmentRecord,
};
use anyhow::Result;
use clap::Args;
use kireme_core::{builtin_rules, load_rules, RuleSet, Segmenter};
use std::collections::HashMap;
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input text file, one unit per line
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Rule file (default: embedded rules)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Language key to segment with
    #[arg(short, long, value_name = "CODE", default_value = "en")]
    pub language: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one segment per line
    Text,
    /// JSON array of segments with line numbers
    Json,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        let loaded;
        let rule_sets: &HashMap<String, RuleSet> = match &self.rules {
            Some(path) => {
                loaded = load_rules(path).map_err(|e| CliError::ConfigError(e.to_string()))?;
                &loaded
            }
            None => builtin_rules(),
        };

        // Using an unconfigured language key is a caller error; fail
        // before reading any input.
        let rules = rule_sets
            .get(&self.language)
            .ok_or_else(|| kireme_core::RuleError::UnknownLanguage(self.language.clone()))?;

        log::info!(
            "Segmenting {} with language '{}'",
            self.input.display(),
            self.language
        );

        let lines = FileReader::read_lines(&self.input)?;
        let segmenter = Segmenter::new(rules);

        let mut records = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            for segment in segmenter.segment(line).segments {
                records.push(SegmentRecord {
                    line: index + 1,
                    text: segment,
                });
            }
        }

        log::info!("{} lines in, {} segments out", lines.len(), records.len());

        let content = match self.format {
            OutputFormat::Text => format_segments_text(&records),
            OutputFormat::Json => format_segments_json(&records)?,
        };
        OutputTarget::from_path(self.output.clone()).write_all(&content)
    }
}
