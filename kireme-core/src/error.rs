//! Error types for segmentation rules, extraction, and the pipeline

use thiserror::Error;

/// Errors raised while loading or using segmentation rule sets
#[derive(Debug, Error)]
pub enum RuleError {
    /// Rule file could not be read
    #[error("failed to read rule file {path}: {source}")]
    Io {
        /// Path of the rule file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Rule source is not valid TOML or violates the rule-file schema
    #[error("failed to parse rules from {origin}: {message}")]
    Parse {
        /// Where the rule source came from (file path or "<inline>")
        origin: String,
        /// Parser diagnostic
        message: String,
    },

    /// A rule carries a regex the engine cannot compile
    #[error("invalid regex in rule {index} for language '{language}': {message}")]
    InvalidRegex {
        /// Language code the rule belongs to
        language: String,
        /// Zero-based rule index within the language
        index: usize,
        /// Regex compiler diagnostic
        message: String,
    },

    /// Requested language key is absent from the loaded rule set
    #[error("language '{0}' is not present in the loaded rule set")]
    UnknownLanguage(String),
}

/// Errors raised while parsing tagged tokens or tag patterns
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A tagged token is missing the surface-form/tag separator
    #[error("malformed tagged token '{token}': missing '|' separator")]
    MalformedToken {
        /// The offending token text
        token: String,
    },

    /// A tag pattern contains no tags
    #[error("tag pattern is empty")]
    EmptyPattern,
}

/// Errors raised by the segment-tag-extract pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Rule loading or lookup failed
    #[error(transparent)]
    Rules(#[from] RuleError),

    /// Token or pattern parsing failed
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Error reported by a tagger collaborator for a single segment
#[derive(Debug, Error)]
#[error("tagger failed: {0}")]
pub struct TagError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_display() {
        let err = RuleError::UnknownLanguage("xx".to_string());
        assert_eq!(
            err.to_string(),
            "language 'xx' is not present in the loaded rule set"
        );
    }

    #[test]
    fn test_malformed_token_display() {
        let err = ExtractError::MalformedToken {
            token: "broken".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed tagged token 'broken': missing '|' separator"
        );
    }

    #[test]
    fn test_invalid_regex_display() {
        let err = RuleError::InvalidRegex {
            language: "en".to_string(),
            index: 2,
            message: "unclosed group".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("rule 2"));
        assert!(msg.contains("'en'"));
        assert!(msg.contains("unclosed group"));
    }

    #[test]
    fn test_pipeline_error_from_rule_error() {
        let err: PipelineError = RuleError::UnknownLanguage("fr".to_string()).into();
        assert!(matches!(err, PipelineError::Rules(_)));
    }
}
