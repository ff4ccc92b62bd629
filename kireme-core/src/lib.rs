//! Rule-based sentence segmentation and tag-pattern terminology extraction
//!
//! Two composable batch stages:
//!
//! - [`segmenter`]: loads per-language ordered break/no-break regex rules
//!   and splits a line into sentence segments plus the exact delimiter
//!   text between them, so the original line can always be rebuilt.
//! - [`extractor`]: matches configured part-of-speech tag patterns over
//!   tagged token streams and aggregates corpus-wide term frequencies.
//!
//! [`pipeline`] wires the two together around an injected [`Tagger`]
//! collaborator.
//!
//! ```
//! use kireme_core::{Segmenter, builtin_rule_set};
//!
//! let rules = builtin_rule_set("en").unwrap();
//! let result = Segmenter::new(rules).segment("Dr. Smith arrived. He was late.");
//! assert_eq!(result.segments, ["Dr. Smith arrived.", "He was late."]);
//! ```

pub mod error;
pub mod extractor;
pub mod pipeline;
pub mod segmenter;

pub use error::{ExtractError, PipelineError, RuleError, TagError};
pub use extractor::{
    aggregate, find_matches, FrequencyTable, TagPattern, TaggedSegment, TaggedToken, TermMatch,
    DEFAULT_PATTERNS,
};
pub use pipeline::{Pipeline, PipelineReport, Tagger};
pub use segmenter::{
    builtin_rule_set, builtin_rules, list_builtin_languages, load_rules, parse_rules, RuleSet,
    SegmentationResult, Segmenter,
};
