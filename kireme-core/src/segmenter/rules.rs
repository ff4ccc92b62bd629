//! Segmentation rule sets: TOML schema, regex compilation, embedded defaults

use crate::error::RuleError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Raw rule file as deserialized from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleFileConfig {
    /// One entry per language, in file order
    #[serde(default, rename = "language")]
    pub languages: Vec<LanguageRulesConfig>,
}

/// Raw per-language rule list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageRulesConfig {
    /// Language key used for lookup (e.g. "en")
    pub code: String,
    /// Human-readable language name
    pub name: String,
    /// Rules in priority order (first match wins)
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleConfig>,
}

/// Raw break/no-break rule before compilation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// true inserts a break at a matching position, false suppresses one
    #[serde(rename = "break")]
    pub is_break: bool,
    /// Regex matched against the text ending at the candidate position
    #[serde(default)]
    pub before: String,
    /// Regex matched against the text starting at the candidate position
    #[serde(default)]
    pub after: String,
}

/// A compiled break/no-break rule
///
/// `before` is anchored at the end of the prefix and `after` at the start
/// of the suffix, so a rule fires only when both sides touch the candidate
/// position exactly. An empty source pattern matches unconditionally.
#[derive(Debug, Clone)]
pub struct BreakRule {
    is_break: bool,
    before: Regex,
    after: Regex,
}

impl BreakRule {
    /// Compile a raw rule, anchoring both sides at the candidate position
    fn compile(config: &RuleConfig, language: &str, index: usize) -> Result<Self, RuleError> {
        let before = Regex::new(&format!("(?:{})$", config.before)).map_err(|e| {
            RuleError::InvalidRegex {
                language: language.to_string(),
                index,
                message: e.to_string(),
            }
        })?;
        let after = Regex::new(&format!("^(?:{})", config.after)).map_err(|e| {
            RuleError::InvalidRegex {
                language: language.to_string(),
                index,
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            is_break: config.is_break,
            before,
            after,
        })
    }

    /// Whether this rule inserts a break where it matches
    pub fn is_break(&self) -> bool {
        self.is_break
    }

    /// Test the rule at byte position `pos` of `line` (must be a char boundary)
    pub fn matches_at(&self, line: &str, pos: usize) -> bool {
        self.before.is_match(&line[..pos]) && self.after.is_match(&line[pos..])
    }
}

/// Compiled, immutable rule set for one language
///
/// Loaded once, then shared read-only by any number of segmentation calls.
#[derive(Debug, Clone)]
pub struct RuleSet {
    code: String,
    name: String,
    rules: Vec<BreakRule>,
}

impl RuleSet {
    /// Language key this rule set was registered under
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[BreakRule] {
        &self.rules
    }

    /// A rule set that never splits (useful as a default and in tests)
    pub fn empty(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            rules: Vec::new(),
        }
    }
}

/// Load and compile a rule file, keyed by language code
pub fn load_rules(path: &Path) -> Result<HashMap<String, RuleSet>, RuleError> {
    let content = std::fs::read_to_string(path).map_err(|e| RuleError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_rules_from(&content, &path.display().to_string())
}

/// Parse and compile a rule file from a TOML string
pub fn parse_rules(toml_text: &str) -> Result<HashMap<String, RuleSet>, RuleError> {
    parse_rules_from(toml_text, "<inline>")
}

fn parse_rules_from(toml_text: &str, origin: &str) -> Result<HashMap<String, RuleSet>, RuleError> {
    let config: RuleFileConfig = toml::from_str(toml_text).map_err(|e| RuleError::Parse {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;

    let mut rule_sets = HashMap::new();
    for language in &config.languages {
        if language.code.is_empty() {
            return Err(RuleError::Parse {
                origin: origin.to_string(),
                message: "language code must not be empty".to_string(),
            });
        }
        if rule_sets.contains_key(&language.code) {
            return Err(RuleError::Parse {
                origin: origin.to_string(),
                message: format!("duplicate language '{}'", language.code),
            });
        }

        let mut rules = Vec::with_capacity(language.rules.len());
        for (index, rule) in language.rules.iter().enumerate() {
            rules.push(BreakRule::compile(rule, &language.code, index)?);
        }

        rule_sets.insert(
            language.code.clone(),
            RuleSet {
                code: language.code.clone(),
                name: language.name.clone(),
                rules,
            },
        );
    }

    Ok(rule_sets)
}

static BUILTIN_RULES: OnceLock<HashMap<String, RuleSet>> = OnceLock::new();

/// Rule sets embedded in the binary
///
/// The embedded file is validated by tests, so failure to parse it is a
/// build defect rather than a runtime condition.
pub fn builtin_rules() -> &'static HashMap<String, RuleSet> {
    BUILTIN_RULES.get_or_init(|| {
        parse_rules_from(
            include_str!("../../configs/rules/english.toml"),
            "<embedded>",
        )
        .expect("embedded rule file must parse")
    })
}

/// Look up an embedded rule set by language code
pub fn builtin_rule_set(code: &str) -> Result<&'static RuleSet, RuleError> {
    builtin_rules()
        .get(code)
        .ok_or_else(|| RuleError::UnknownLanguage(code.to_string()))
}

/// Language codes available without an external rule file
pub fn list_builtin_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = builtin_rules().keys().map(|s| s.as_str()).collect();
    codes.sort_unstable();
    codes
}
