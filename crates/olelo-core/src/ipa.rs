//! IPA transcription.
//!
//! Single left-to-right pass with one character of lookahead. Every letter
//! maps through a fixed table; `w` is the one context-sensitive case and
//! resolves to `v` before i/e, otherwise to the ambiguous "w~v".

use crate::phonology::OKINA;

/// IPA symbol for a single Hawaiian letter, context-free.
fn ipa_symbol(c: char) -> Option<&'static str> {
    match c {
        'a' => Some("ɐ"),
        'ā' => Some("aː"),
        'e' => Some("ɛ"),
        'ē' => Some("eː"),
        'i' => Some("i"),
        'ī' => Some("iː"),
        'o' => Some("o"),
        'ō' => Some("oː"),
        'u' => Some("u"),
        'ū' => Some("uː"),
        'h' => Some("h"),
        'k' => Some("k"),
        'l' => Some("l"),
        'm' => Some("m"),
        'n' => Some("n"),
        'p' => Some("p"),
        'w' => Some("w~v"),
        OKINA => Some("ʔ"),
        _ => None,
    }
}

/// IPA-like transcription of a word, wrapped in square brackets.
///
/// Characters missing from the table pass through unchanged; any string is
/// accepted.
pub fn ipa(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut out = String::with_capacity(lower.len() + 2);
    out.push('[');

    let mut chars = lower.chars().peekable();
    while let Some(c) = chars.next() {
        let before_front_vowel = matches!(chars.peek(), Some(&'i') | Some(&'e'));
        if c == 'w' && before_front_vowel {
            out.push('v');
        } else {
            match ipa_symbol(c) {
                Some(symbol) => out.push_str(symbol),
                None => out.push(c),
            }
        }
    }

    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_w_before_i_is_v() {
        assert_eq!(ipa("wiki"), "[viki]");
    }

    #[test]
    fn test_w_before_e_is_v() {
        assert_eq!(ipa("wela"), "[vɛlɐ]");
    }

    #[test]
    fn test_w_before_back_vowel_is_ambiguous() {
        assert_eq!(ipa("wahine"), "[w~vɐhinɛ]");
    }

    #[test]
    fn test_trailing_w_is_ambiguous() {
        assert_eq!(ipa("w"), "[w~v]");
    }

    #[test]
    fn test_okina_is_glottal_stop() {
        assert_eq!(ipa("hawaiʻi"), "[hɐw~vɐiʔi]");
    }

    #[test]
    fn test_macron_vowels_lengthen() {
        assert_eq!(ipa("kāne"), "[kaːnɛ]");
    }

    #[test]
    fn test_unknown_chars_pass_through() {
        assert_eq!(ipa("ab3"), "[ɐb3]");
    }

    #[test]
    fn test_uppercase_input_lowercased() {
        assert_eq!(ipa("Aloha"), "[ɐlohɐ]");
    }

    #[test]
    fn test_bracket_invariant_on_empty() {
        assert_eq!(ipa(""), "[]");
    }

    proptest::proptest! {
        /// Output is bracket-wrapped for any input, and no input panics.
        #[test]
        fn prop_bracket_invariant(word in ".*") {
            let out = ipa(&word);
            proptest::prop_assert!(out.starts_with('['));
            proptest::prop_assert!(out.ends_with(']'));
        }
    }
}
