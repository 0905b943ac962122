//! Syllable splitting for Hawaiian words.
//!
//! Hawaiian syllables follow a (C)V shape: a syllable is everything from the
//! end of the previous vowel up to and including the next vowel. Adjacent
//! vowels stay in one syllable. That merge is load-bearing for the phonetic
//! respelling downstream and callers depend on it, even where a linguist
//! would split the pair.

use crate::phonology::is_vowel;

/// Split a lowercase word into syllables.
///
/// Characters accumulate into the current syllable; a vowel closes it unless
/// the next character is also a vowel. A trailing consonant run with no
/// following vowel becomes a final partial syllable.
///
/// The split is a lossless partition: concatenating the returned syllables
/// reproduces the input exactly. Unknown characters accumulate like any
/// consonant; there is no failure case.
pub fn split_syllables(word: &str) -> Vec<String> {
    let mut syllables = Vec::new();
    let mut current = String::new();
    let mut chars = word.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if is_vowel(c) {
            match chars.peek() {
                Some(&next) if is_vowel(next) => {} // keep adjacent vowels together
                _ => syllables.push(std::mem::take(&mut current)),
            }
        }
    }

    if !current.is_empty() {
        syllables.push(current);
    }

    syllables
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_cv_pattern() {
        assert_eq!(split_syllables("aloha"), vec!["a", "lo", "ha"]);
        assert_eq!(split_syllables("mahalo"), vec!["ma", "ha", "lo"]);
        assert_eq!(split_syllables("ohana"), vec!["o", "ha", "na"]);
    }

    #[test]
    fn test_adjacent_vowels_merge() {
        assert_eq!(split_syllables("keiki"), vec!["kei", "ki"]);
        assert_eq!(split_syllables("mauka"), vec!["mau", "ka"]);
        assert_eq!(split_syllables("luau"), vec!["luau"]);
    }

    #[test]
    fn test_okina_starts_syllable() {
        assert_eq!(split_syllables("hawaiʻi"), vec!["ha", "wai", "ʻi"]);
        assert_eq!(split_syllables("ʻohana"), vec!["ʻo", "ha", "na"]);
    }

    #[test]
    fn test_macron_vowel_closes_syllable() {
        assert_eq!(split_syllables("kāne"), vec!["kā", "ne"]);
        assert_eq!(split_syllables("pōpoki"), vec!["pō", "po", "ki"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_syllables("").is_empty());
    }

    #[test]
    fn test_single_vowel() {
        assert_eq!(split_syllables("a"), vec!["a"]);
    }

    #[test]
    fn test_trailing_consonants() {
        assert_eq!(split_syllables("alohm"), vec!["a", "lo", "hm"]);
        assert_eq!(split_syllables("kk"), vec!["kk"]);
    }

    #[test]
    fn test_unknown_characters_accumulate() {
        assert_eq!(split_syllables("a-lo"), vec!["a", "-lo"]);
        assert_eq!(split_syllables("x7a"), vec!["x7a"]);
    }

    proptest! {
        /// Concatenating the syllables reproduces the input, for any string.
        #[test]
        fn prop_lossless_partition(word in ".*") {
            let joined: String = split_syllables(&word).concat();
            prop_assert_eq!(joined, word);
        }

        /// Every syllable of a lowercase Hawaiian-alphabet word contains at
        /// most one vowel run, and only the last syllable may contain none.
        #[test]
        fn prop_vowel_runs(word in "[aeiouāēīōūhklmnpwʻ]{0,12}") {
            let syllables = split_syllables(&word);
            for (i, syl) in syllables.iter().enumerate() {
                let runs = count_vowel_runs(syl);
                if i + 1 < syllables.len() {
                    prop_assert_eq!(runs, 1, "inner syllable {:?} in {:?}", syl, word);
                } else {
                    prop_assert!(runs <= 1, "last syllable {:?} in {:?}", syl, word);
                }
            }
        }
    }

    fn count_vowel_runs(s: &str) -> usize {
        let mut runs = 0;
        let mut in_run = false;
        for c in s.chars() {
            if is_vowel(c) {
                if !in_run {
                    runs += 1;
                    in_run = true;
                }
            } else {
                in_run = false;
            }
        }
        runs
    }
}
