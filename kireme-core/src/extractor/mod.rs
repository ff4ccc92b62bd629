//! Tag-pattern terminology extraction
//!
//! Matches configured part-of-speech tag sequences against tagged token
//! streams and aggregates corpus-wide surface-form frequencies. Matching
//! is a sliding window over token tags: every window start is tested, and
//! a token run satisfying several configured patterns counts under each
//! of them.

use crate::error::ExtractError;
use std::collections::HashMap;

/// Tag patterns used when the caller configures none
///
/// The classic noun-phrase inventory for terminology extraction.
pub const DEFAULT_PATTERNS: [&str; 4] = ["NOUN NOUN", "NOUN NOUN NOUN", "ADJ NOUN", "ADJ ADJ NOUN"];

/// One token of tagger output: surface form plus part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Literal word text
    pub form: String,
    /// Part-of-speech category, passed through from the tagger
    pub tag: String,
}

impl TaggedToken {
    /// Parse one `form|TAG` token
    ///
    /// Anything after a second separator is ignored, matching the corpus
    /// wire format. A token with no separator at all is malformed.
    pub fn parse(token: &str) -> Result<Self, ExtractError> {
        let mut parts = token.split('|');
        let form = parts.next().unwrap_or_default();
        let tag = parts.next().ok_or_else(|| ExtractError::MalformedToken {
            token: token.to_string(),
        })?;
        Ok(Self {
            form: form.to_string(),
            tag: tag.to_string(),
        })
    }
}

/// An ordered run of tagged tokens, usually one sentence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedSegment {
    /// Tokens in surface order
    pub tokens: Vec<TaggedToken>,
}

impl TaggedSegment {
    /// Build a segment from already-parsed tokens
    pub fn new(tokens: Vec<TaggedToken>) -> Self {
        Self { tokens }
    }

    /// Parse a whitespace-separated line of `form|TAG` tokens
    ///
    /// The first malformed token fails the whole line; callers treat this
    /// as a per-line condition and skip the line rather than abort the
    /// corpus.
    pub fn parse(line: &str) -> Result<Self, ExtractError> {
        let tokens = line
            .split_whitespace()
            .map(TaggedToken::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tokens })
    }

    /// Number of tokens in the segment
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the segment holds no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A contiguous tag sequence a candidate term must carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    tags: Vec<String>,
}

impl TagPattern {
    /// Parse a whitespace-separated tag sequence such as `"ADJ NOUN"`
    pub fn parse(pattern: &str) -> Result<Self, ExtractError> {
        let tags: Vec<String> = pattern.split_whitespace().map(str::to_string).collect();
        if tags.is_empty() {
            return Err(ExtractError::EmptyPattern);
        }
        Ok(Self { tags })
    }

    /// Parse several patterns, keeping their listed order
    pub fn parse_all<I, S>(patterns: I) -> Result<Vec<Self>, ExtractError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        patterns
            .into_iter()
            .map(|p| Self::parse(p.as_ref()))
            .collect()
    }

    /// Tags in sequence order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Pattern arity (number of tags)
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the pattern has no tags (never true for parsed patterns)
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// One pattern match inside a segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMatch {
    /// Matched surface forms joined by single spaces
    pub term: String,
    /// Index of the pattern that matched, into the configured list
    pub pattern_index: usize,
}

/// Find every pattern match in one tagged segment
///
/// Patterns are matched independently in listed order; within a pattern
/// the window start advances one token at a time, so a run of three NOUN
/// tokens yields two `NOUN NOUN` matches. Exact arity: a 2-tag pattern
/// never matches a 3-token run as a whole.
pub fn find_matches(segment: &TaggedSegment, patterns: &[TagPattern]) -> Vec<TermMatch> {
    let tokens = &segment.tokens;
    let mut matches = Vec::new();

    for (pattern_index, pattern) in patterns.iter().enumerate() {
        let arity = pattern.len();
        if arity == 0 || arity > tokens.len() {
            continue;
        }
        for start in 0..=tokens.len() - arity {
            let window = &tokens[start..start + arity];
            if window
                .iter()
                .zip(pattern.tags())
                .all(|(token, tag)| token.tag == *tag)
            {
                let term = window
                    .iter()
                    .map(|token| token.form.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                matches.push(TermMatch {
                    term,
                    pattern_index,
                });
            }
        }
    }

    matches
}

/// Corpus-wide term counts preserving first-insertion order
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of a term
    pub fn add(&mut self, term: &str) {
        match self.counts.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(term.to_string(), 1);
                self.order.push(term.to_string());
            }
        }
    }

    /// Occurrences recorded for a term
    pub fn count(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the table holds no terms
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Terms with counts, in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(|term| (term.as_str(), self.counts[term]))
    }

    /// Fold another table into this one, summing counts per term
    ///
    /// Terms new to `self` keep the order they had in `other`, so sharded
    /// workers can each build a table and merge at the end.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (term, count) in other.iter() {
            match self.counts.get_mut(term) {
                Some(existing) => *existing += count,
                None => {
                    self.counts.insert(term.to_string(), count);
                    self.order.push(term.to_string());
                }
            }
        }
    }

    /// Counts descending; equal counts keep first-insertion order
    pub fn rank(&self) -> Vec<(u64, String)> {
        let mut ranked: Vec<(u64, String)> = self
            .iter()
            .map(|(term, count)| (count, term.to_string()))
            .collect();
        // sort_by is stable, so insertion order survives among ties.
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked
    }
}

/// Fold pattern matches over a whole corpus of tagged segments
pub fn aggregate<'a, I>(corpus: I, patterns: &[TagPattern]) -> FrequencyTable
where
    I: IntoIterator<Item = &'a TaggedSegment>,
{
    let mut table = FrequencyTable::new();
    for segment in corpus {
        for found in find_matches(segment, patterns) {
            table.add(&found.term);
        }
    }
    table
}
