//! Curated pronunciation lexicon.
//!
//! Hand-authored entries for well-known words, with pointers to
//! native-speaker audio recordings. The generic engine fills in anything an
//! entry leaves out.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_LEXICON_TOML: &str = include_str!("default_lexicon.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Deserialize)]
struct LexiconConfig {
    entries: BTreeMap<String, LexiconEntry>,
}

/// A curated entry. Only `phonetic` is mandatory.
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconEntry {
    pub phonetic: String,
    #[serde(default)]
    pub ipa: Option<String>,
    #[serde(default)]
    pub syllables: Option<Vec<String>>,
    /// Audio recording filename, resolved against an audio directory by the
    /// caller.
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("entry key is not lowercase: {0}")]
    NonLowercaseKey(String),
    #[error("empty phonetic respelling for entry: {0}")]
    EmptyPhonetic(String),
    #[error("audio filename for entry {0} contains a path separator")]
    AudioWithPath(String),
    #[error("lexicon already initialized")]
    AlreadyInitialized,
}

pub struct Lexicon {
    entries: BTreeMap<String, LexiconEntry>,
}

impl Lexicon {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), LexiconError> {
        parse_lexicon_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| LexiconError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Lexicon {
        static INSTANCE: OnceLock<Lexicon> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_LEXICON_TOML);
            let entries = parse_lexicon_toml(toml_str).expect("lexicon TOML must be valid");
            Lexicon { entries }
        })
    }

    /// Look up a word; the key side is always lowercase.
    pub fn entry(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries that reference an audio recording, as (word, filename) pairs.
    pub fn audio_entries(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(word, e)| e.audio.as_deref().map(|a| (word.as_str(), a)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse and validate lexicon TOML.
pub fn parse_lexicon_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, LexiconEntry>, LexiconError> {
    let config: LexiconConfig =
        toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;

    for (key, entry) in &config.entries {
        if *key != key.to_lowercase() {
            return Err(LexiconError::NonLowercaseKey(key.clone()));
        }
        if entry.phonetic.is_empty() {
            return Err(LexiconError::EmptyPhonetic(key.clone()));
        }
        if let Some(audio) = &entry.audio {
            if audio.contains('/') || audio.contains('\\') {
                return Err(LexiconError::AudioWithPath(key.clone()));
            }
        }
    }

    Ok(config.entries)
}
