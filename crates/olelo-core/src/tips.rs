//! Advisory pronunciation tips.
//!
//! Each check runs independently against the full lowercased word; every
//! matching advisory is emitted, in check order. There is no exclusivity
//! between checks and no failure case.

use crate::phonology::{is_macron_vowel, is_okina, is_plain_vowel};

const TIP_W: &str = "Remember: W sounds like \"v\" before i and e";
const TIP_OKINA: &str = "The ʻokina (ʻ) is a glottal stop - make a brief pause";
const TIP_MACRON: &str = "Hold vowels with macrons (lines above) longer";
const TIP_STRESS: &str = "Stress usually falls on the second-to-last syllable";
const TIP_VOWELS: &str = "Pronounce each vowel separately";

/// Pronunciation tips for a word.
pub fn tips(word: &str) -> Vec<String> {
    let lower = word.to_lowercase();
    let mut tips = Vec::new();

    if lower.contains('w') {
        tips.push(TIP_W.to_string());
    }
    if lower.chars().any(is_okina) {
        tips.push(TIP_OKINA.to_string());
    }
    if lower.chars().any(is_macron_vowel) {
        tips.push(TIP_MACRON.to_string());
    }
    if lower.chars().count() > 4 {
        tips.push(TIP_STRESS.to_string());
    }
    if has_adjacent_plain_vowels(&lower) {
        tips.push(TIP_VOWELS.to_string());
    }

    tips
}

/// Two or more consecutive plain vowels (a/e/i/o/u) anywhere in the word.
fn has_adjacent_plain_vowels(word: &str) -> bool {
    let mut prev_was_vowel = false;
    for c in word.chars() {
        let vowel = is_plain_vowel(c);
        if vowel && prev_was_vowel {
            return true;
        }
        prev_was_vowel = vowel;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_w_tip() {
        let tips = tips("wikiwiki");
        assert!(tips.iter().any(|t| t.contains("W sounds like")));
    }

    #[test]
    fn test_macron_tip_without_w_tip() {
        let tips = tips("haumāna");
        assert!(tips.iter().any(|t| t.contains("macrons")));
        assert!(!tips.iter().any(|t| t.contains("W sounds like")));
    }

    #[test]
    fn test_okina_tip() {
        let tips = tips("hawaiʻi");
        assert!(tips.iter().any(|t| t.contains("ʻokina")));
    }

    #[test]
    fn test_length_tip_only() {
        // No adjacent vowels, no w, no ʻokina, no macron; just length > 4
        let tips = tips("makemake");
        assert_eq!(tips, vec![TIP_STRESS.to_string()]);
    }

    #[test]
    fn test_short_word_no_length_tip() {
        assert!(tips("pua").iter().all(|t| t != TIP_STRESS));
        // 5 chars crosses the threshold
        assert!(tips("keiki").iter().any(|t| t == TIP_STRESS));
    }

    #[test]
    fn test_adjacent_vowel_tip() {
        assert!(tips("luau").iter().any(|t| t == TIP_VOWELS));
        assert!(tips("halo").iter().all(|t| t != TIP_VOWELS));
    }

    #[test]
    fn test_macron_pair_is_not_plain_vowel_run() {
        // āē are macron vowels, not plain, so the adjacent-vowel check ignores them
        assert!(tips("āē").iter().all(|t| t != TIP_VOWELS));
    }

    #[test]
    fn test_check_order_is_fixed() {
        let tips = tips("wāileʻa");
        let w = tips.iter().position(|t| t == TIP_W);
        let okina = tips.iter().position(|t| t == TIP_OKINA);
        let macron = tips.iter().position(|t| t == TIP_MACRON);
        assert!(w < okina && okina < macron);
    }

    #[test]
    fn test_empty_input_no_tips() {
        assert!(tips("").is_empty());
    }
}
