use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct RulesConfig {
    rules: Vec<RuleSpec>,
    #[serde(default)]
    exceptions: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct RuleSpec {
    pattern: String,
    replacement: String,
    description: String,
    /// Characters that must follow the pattern for it to apply.
    /// Only valid on single-character patterns.
    #[serde(default)]
    before: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum RulesConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[rules]] list is empty")]
    Empty,
    #[error("rule {index}: empty pattern")]
    EmptyPattern { index: usize },
    #[error("rule {index}: 'before' context requires a single-character pattern, got {pattern:?}")]
    ContextOnMultiChar { index: usize, pattern: String },
    #[error("rule {index}: 'before' entry {entry:?} is not a single character")]
    BadContextEntry { index: usize, entry: String },
    #[error("empty respelling for exception key: {0}")]
    EmptyException(String),
    #[error("exception key is not lowercase: {0}")]
    NonLowercaseException(String),
    #[error("rule table already initialized")]
    AlreadyInitialized,
}

/// A single substitution rule. Rules apply in declaration order; later rules
/// see text already rewritten by earlier ones.
#[derive(Debug, Clone)]
pub struct PronunciationRule {
    pub pattern: String,
    pub replacement: String,
    pub description: String,
    before: Option<Vec<char>>,
}

impl PronunciationRule {
    /// Apply this rule to `text`, replacing every non-overlapping match
    /// left to right.
    pub fn apply(&self, text: &str) -> String {
        match &self.before {
            None => text.replace(&self.pattern, &self.replacement),
            Some(context) => {
                // Validation guarantees a single-char pattern here.
                let target = self.pattern.chars().next().expect("non-empty pattern");
                let mut out = String::with_capacity(text.len());
                let mut chars = text.chars().peekable();
                while let Some(c) = chars.next() {
                    let followed = chars.peek().is_some_and(|next| context.contains(next));
                    if c == target && followed {
                        out.push_str(&self.replacement);
                    } else {
                        out.push(c);
                    }
                }
                out
            }
        }
    }
}

/// Parse TOML text into the ordered rule list and the stress-exception map.
pub fn parse_rules_toml(
    toml_str: &str,
) -> Result<(Vec<PronunciationRule>, BTreeMap<String, String>), RulesConfigError> {
    let config: RulesConfig =
        toml::from_str(toml_str).map_err(|e| RulesConfigError::Parse(e.to_string()))?;

    if config.rules.is_empty() {
        return Err(RulesConfigError::Empty);
    }

    let mut rules = Vec::with_capacity(config.rules.len());
    for (index, spec) in config.rules.into_iter().enumerate() {
        if spec.pattern.is_empty() {
            return Err(RulesConfigError::EmptyPattern { index });
        }
        let before = match spec.before {
            None => None,
            Some(entries) => {
                if spec.pattern.chars().count() != 1 {
                    return Err(RulesConfigError::ContextOnMultiChar {
                        index,
                        pattern: spec.pattern,
                    });
                }
                let mut context = Vec::with_capacity(entries.len());
                for entry in entries {
                    let mut chars = entry.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => context.push(c),
                        _ => return Err(RulesConfigError::BadContextEntry { index, entry }),
                    }
                }
                Some(context)
            }
        };
        rules.push(PronunciationRule {
            pattern: spec.pattern,
            replacement: spec.replacement,
            description: spec.description,
            before,
        });
    }

    for (key, value) in &config.exceptions {
        if value.is_empty() {
            return Err(RulesConfigError::EmptyException(key.clone()));
        }
        if *key != key.to_lowercase() {
            return Err(RulesConfigError::NonLowercaseException(key.clone()));
        }
    }

    Ok((rules, config.exceptions))
}
