//! Rule-driven sentence segmentation
//!
//! A [`Segmenter`] applies one language's compiled [`RuleSet`] to a line
//! of text. Every interior character boundary is a candidate break point;
//! rules are tested in priority order and the first rule matching both
//! sides of the point decides whether a break occurs there. Positions no
//! rule matches default to no break.

pub mod rules;

pub use rules::{
    builtin_rule_set, builtin_rules, list_builtin_languages, load_rules, parse_rules, BreakRule,
    RuleSet,
};

/// Segments of one line plus the exact text between them
///
/// `delimiters` has one entry per segment: the whitespace (and nothing
/// else) trimmed off after that segment, with the last entry possibly
/// empty. Interleaving segments and delimiters reproduces the input line
/// byte for byte; whitespace at the very start of a line stays attached
/// to the first segment so nothing is lost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentationResult {
    /// Sentence-like units in input order
    pub segments: Vec<String>,
    /// Inter-segment text, one entry per segment
    pub delimiters: Vec<String>,
}

impl SegmentationResult {
    /// Rebuild the original line by interleaving segments and delimiters
    pub fn reconstruct(&self) -> String {
        let mut line = String::new();
        for (segment, delimiter) in self.segments.iter().zip(&self.delimiters) {
            line.push_str(segment);
            line.push_str(delimiter);
        }
        line
    }
}

/// Applies a rule set to lines of text
///
/// Stateless between calls: identical `(rules, line)` input always yields
/// identical output.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    rules: &'a RuleSet,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter over a loaded rule set
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Split one line into segments and delimiters
    ///
    /// An empty line yields an empty result. A line holding only
    /// whitespace is not empty: it comes back as a single whitespace
    /// segment, since dropping it would break reconstruction. A rule
    /// set with no rules never splits, so the whole line comes back as
    /// one segment.
    pub fn segment(&self, line: &str) -> SegmentationResult {
        if line.is_empty() {
            return SegmentationResult::default();
        }

        let breaks = self.break_points(line);

        let mut cuts = Vec::with_capacity(breaks.len() + 2);
        cuts.push(0);
        cuts.extend(breaks);
        cuts.push(line.len());

        let mut result = SegmentationResult::default();
        // Whitespace seen before the first segment is produced.
        let mut lead_in = String::new();

        for window in cuts.windows(2) {
            let chunk = &line[window[0]..window[1]];
            let (head, rest) = split_leading_whitespace(chunk);
            let (body, tail) = split_trailing_whitespace(rest);

            match result.delimiters.last_mut() {
                Some(delimiter) => delimiter.push_str(head),
                None => lead_in.push_str(head),
            }

            if body.is_empty() {
                // Whitespace-only chunk: fold it into the surrounding
                // delimiter instead of emitting an empty segment.
                match result.delimiters.last_mut() {
                    Some(delimiter) => delimiter.push_str(tail),
                    None => lead_in.push_str(tail),
                }
                continue;
            }

            let mut segment = std::mem::take(&mut lead_in);
            segment.push_str(body);
            result.segments.push(segment);
            result.delimiters.push(tail.to_string());
        }

        if result.segments.is_empty() && !lead_in.is_empty() {
            // The line was pure whitespace; keep it as a single segment
            // so reconstruction stays exact.
            result.segments.push(lead_in);
            result.delimiters.push(String::new());
        }

        result
    }

    /// Byte offsets where a break rule fired, in ascending order
    fn break_points(&self, line: &str) -> Vec<usize> {
        if self.rules.rules().is_empty() {
            return Vec::new();
        }

        let mut points = Vec::new();
        for (pos, _) in line.char_indices().skip(1) {
            for rule in self.rules.rules() {
                if rule.matches_at(line, pos) {
                    if rule.is_break() {
                        points.push(pos);
                    }
                    break;
                }
            }
        }
        points
    }
}

fn split_leading_whitespace(chunk: &str) -> (&str, &str) {
    let body_start = chunk
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(chunk.len());
    chunk.split_at(body_start)
}

fn split_trailing_whitespace(chunk: &str) -> (&str, &str) {
    let body_end = chunk.trim_end().len();
    chunk.split_at(body_end)
}
