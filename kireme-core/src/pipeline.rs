//! End-to-end pipeline: segment, tag, extract
//!
//! The part-of-speech tagger is an injected collaborator rather than a
//! process-wide singleton; any model-backed implementation plugs in
//! through the [`Tagger`] trait.

use crate::error::{PipelineError, TagError};
use crate::extractor::{find_matches, FrequencyTable, TagPattern, TaggedSegment};
use crate::segmenter::{RuleSet, Segmenter};

/// Part-of-speech tagger collaborator
///
/// Contract: stable tokenization, one tag per token, tags drawn from an
/// open set the extractor passes through unvalidated.
pub trait Tagger {
    /// Tag one plain-text segment
    fn tag(&self, text: &str) -> Result<TaggedSegment, TagError>;
}

/// Outcome of one pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    /// Aggregated term frequencies
    pub table: FrequencyTable,
    /// Input lines consumed
    pub lines: usize,
    /// Segments successfully tagged and matched
    pub segments: usize,
    /// Segments skipped because the tagger failed on them
    pub skipped: usize,
}

/// Segments raw lines, tags each segment, and aggregates term matches
pub struct Pipeline<'a, T: Tagger> {
    rules: &'a RuleSet,
    tagger: T,
    patterns: Vec<TagPattern>,
}

impl<'a, T: Tagger> Pipeline<'a, T> {
    /// Create a pipeline over loaded rules, a tagger, and parsed patterns
    pub fn new(rules: &'a RuleSet, tagger: T, patterns: Vec<TagPattern>) -> Self {
        Self {
            rules,
            tagger,
            patterns,
        }
    }

    /// Run the pipeline over a stream of raw text lines
    ///
    /// A tagger failure on one segment skips that segment and is counted
    /// in the report; term extraction is a best-effort aggregate, so one
    /// bad segment must not abort the corpus.
    pub fn run<I, S>(&self, lines: I) -> Result<PipelineReport, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segmenter = Segmenter::new(self.rules);
        let mut report = PipelineReport::default();

        for line in lines {
            report.lines += 1;
            for segment_text in segmenter.segment(line.as_ref()).segments {
                let trimmed = segment_text.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let tagged = match self.tagger.tag(trimmed) {
                    Ok(tagged) => tagged,
                    Err(_) => {
                        report.skipped += 1;
                        continue;
                    }
                };
                report.segments += 1;
                for found in find_matches(&tagged, &self.patterns) {
                    report.table.add(&found.term);
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::TaggedToken;
    use crate::segmenter::builtin_rule_set;

    /// Test tagger: capitalized words are NOUN, everything else OTHER.
    struct CapitalTagger;

    impl Tagger for CapitalTagger {
        fn tag(&self, text: &str) -> Result<TaggedSegment, TagError> {
            let tokens = text
                .split_whitespace()
                .map(|word| {
                    let tag = if word.chars().next().is_some_and(|c| c.is_uppercase()) {
                        "NOUN"
                    } else {
                        "OTHER"
                    };
                    TaggedToken {
                        form: word.trim_end_matches(['.', '!', '?']).to_string(),
                        tag: tag.to_string(),
                    }
                })
                .collect();
            Ok(TaggedSegment::new(tokens))
        }
    }

    /// Test tagger that refuses segments containing a marker word.
    struct FailingTagger;

    impl Tagger for FailingTagger {
        fn tag(&self, text: &str) -> Result<TaggedSegment, TagError> {
            if text.contains("poison") {
                Err(TagError("marker word".to_string()))
            } else {
                CapitalTagger.tag(text)
            }
        }
    }

    fn noun_noun() -> Vec<TagPattern> {
        TagPattern::parse_all(["NOUN NOUN"]).unwrap()
    }

    #[test]
    fn test_pipeline_segments_then_extracts() {
        let rules = builtin_rule_set("en").unwrap();
        let pipeline = Pipeline::new(rules, CapitalTagger, noun_noun());

        let report = pipeline
            .run(["Rust Belt stories. Lake Erie shores."])
            .unwrap();

        assert_eq!(report.lines, 1);
        assert_eq!(report.segments, 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.table.count("Rust Belt"), 1);
        assert_eq!(report.table.count("Lake Erie"), 1);
    }

    #[test]
    fn test_pipeline_skips_failed_segments() {
        let rules = builtin_rule_set("en").unwrap();
        let pipeline = Pipeline::new(rules, FailingTagger, noun_noun());

        let report = pipeline
            .run(["Good Line here. poison segment here.", "More Good Text."])
            .unwrap();

        assert_eq!(report.lines, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.segments, 2);
    }

    #[test]
    fn test_pipeline_ignores_blank_lines() {
        let rules = builtin_rule_set("en").unwrap();
        let pipeline = Pipeline::new(rules, CapitalTagger, noun_noun());

        let report = pipeline.run(["", "   "]).unwrap();
        assert_eq!(report.lines, 2);
        assert_eq!(report.segments, 0);
        assert!(report.table.is_empty());
    }
}
