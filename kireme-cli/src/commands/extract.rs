//! Extract command implementation

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{format_ranked_terms, OutputTarget};
use anyhow::Result;
use clap::Args;
use kireme_core::{find_matches, FrequencyTable, TagPattern, TaggedSegment, DEFAULT_PATTERNS};
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Tagged input file, one `form|TAG ...` line per segment
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Tag pattern such as "ADJ NOUN"; repeatable, default noun-phrase set
    #[arg(short, long = "pattern", value_name = "TAGS")]
    pub patterns: Vec<String>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        let specs: Vec<&str> = if self.patterns.is_empty() {
            DEFAULT_PATTERNS.to_vec()
        } else {
            self.patterns.iter().map(String::as_str).collect()
        };
        let patterns = TagPattern::parse_all(&specs)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        log::info!(
            "Extracting terms from {} with {} patterns",
            self.input.display(),
            patterns.len()
        );

        let lines = FileReader::read_lines(&self.input)?;

        let mut table = FrequencyTable::new();
        let mut skipped = 0usize;
        for (index, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            // A malformed line is a per-line condition: log it, skip it,
            // keep aggregating the rest of the corpus.
            let segment = match TaggedSegment::parse(line) {
                Ok(segment) => segment,
                Err(e) => {
                    log::warn!("line {}: {} (skipped)", index + 1, e);
                    skipped += 1;
                    continue;
                }
            };
            for found in find_matches(&segment, &patterns) {
                table.add(&found.term);
            }
        }

        log::info!(
            "{} lines in, {} distinct terms, {} lines skipped",
            lines.len(),
            table.len(),
            skipped
        );

        let content = format_ranked_terms(&table.rank());
        OutputTarget::from_path(self.output.clone()).write_all(&content)
    }
}
