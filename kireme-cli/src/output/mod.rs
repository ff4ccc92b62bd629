//! Output formatting and writing
//!
//! Formatters render the complete result in memory and the target writes
//! it in one step, so a failing batch never leaves a truncated output
//! file behind.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// One segment of one input line, for structured output
#[derive(Debug, Clone, Serialize)]
pub struct SegmentRecord {
    /// One-based input line number
    pub line: usize,
    /// Segment text
    pub text: String,
}

/// Render segments as plain text, one segment per line
pub fn format_segments_text(records: &[SegmentRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.text);
        out.push('\n');
    }
    out
}

/// Render segments as a JSON array of `{line, text}` objects
pub fn format_segments_json(records: &[SegmentRecord]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(records).context("Failed to serialize segments")?;
    out.push('\n');
    Ok(out)
}

/// Render a ranked term list as `count<TAB>term` lines
pub fn format_ranked_terms(ranked: &[(u64, String)]) -> String {
    let mut out = String::new();
    for (count, term) in ranked {
        out.push_str(&format!("{count}\t{term}\n"));
    }
    out
}

/// Where formatted output goes
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Standard output
    Stdout,
    /// A file, created only when the full result is ready
    File(PathBuf),
}

impl OutputTarget {
    /// Build a target from an optional `--output` path
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Stdout,
        }
    }

    /// Write the complete formatted result
    pub fn write_all(&self, content: &str) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(content.as_bytes())?;
                handle.flush()?;
                Ok(())
            }
            OutputTarget::File(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write output file: {}", path.display()))
            }
        }
    }
}
