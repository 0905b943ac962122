//! Aggregate pronunciation lookup.
//!
//! Combines the curated lexicon with the generic engine into the single
//! value a caller needs to present a word: respelling, IPA, syllables,
//! audio reference, and tips.

use serde::Serialize;

use crate::ipa::ipa;
use crate::lexicon::Lexicon;
use crate::phonetic::phonetic;
use crate::syllable::split_syllables;
use crate::tips::tips;

/// Full pronunciation data for one word.
#[derive(Debug, Clone, Serialize)]
pub struct Pronunciation {
    pub word: String,
    pub phonetic: String,
    pub ipa: String,
    pub syllables: Vec<String>,
    /// Audio recording filename when a native-speaker recording exists.
    pub audio: Option<String>,
    pub tips: Vec<String>,
}

/// Pronunciation for a word: curated lexicon entry when one exists,
/// generated otherwise. Curated entries may omit fields; generated values
/// fill the gaps. Total over any input string.
pub fn pronounce(word: &str) -> Pronunciation {
    let lower = word.to_lowercase();

    if let Some(entry) = Lexicon::global().entry(&lower) {
        tracing::debug!(word = %lower, "pronunciation from lexicon");
        return Pronunciation {
            word: word.to_string(),
            phonetic: entry.phonetic.clone(),
            ipa: entry.ipa.clone().unwrap_or_else(|| ipa(&lower)),
            syllables: entry
                .syllables
                .clone()
                .unwrap_or_else(|| split_syllables(&lower)),
            audio: entry.audio.clone(),
            tips: if entry.tips.is_empty() {
                tips(&lower)
            } else {
                entry.tips.clone()
            },
        };
    }

    tracing::debug!(word = %lower, "pronunciation generated");
    Pronunciation {
        word: word.to_string(),
        phonetic: phonetic(&lower),
        ipa: ipa(&lower),
        syllables: split_syllables(&lower),
        audio: None,
        tips: tips(&lower),
    }
}
