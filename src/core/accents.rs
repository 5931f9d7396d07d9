//! Diacritic normalization
//!
//! Portuguese words are compared accent-insensitively: `fácil` and `facil` are the
//! same word for membership and scoring. Folding decomposes to NFD and drops the
//! combining diacritical marks block (U+0300..=U+036F), so `ç` folds to `c`.

use unic_normal::StrNormalForm;

/// Combining diacritical marks removed by [`strip_accents`]
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Accented lowercase letters accepted in a word, besides `a..=z`
const ACCENTED_LETTERS: &str = "áàâãäéèêëíìîïóòôõöúùûüçñ";

/// Remove diacritics from `text`
///
/// # Examples
/// ```
/// use termo::core::strip_accents;
///
/// assert_eq!(strip_accents("fácil"), "facil");
/// assert_eq!(strip_accents("lanço"), "lanco");
/// assert_eq!(strip_accents("termo"), "termo");
/// ```
#[must_use]
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !COMBINING_MARKS.contains(c)).collect()
}

/// Fold a single letter to its unaccented base letter
#[must_use]
pub fn strip_accent_char(letter: char) -> char {
    if letter.is_ascii() {
        return letter;
    }

    let mut buf = [0u8; 4];
    let encoded: &str = letter.encode_utf8(&mut buf);
    encoded
        .nfd()
        .find(|c| !COMBINING_MARKS.contains(c))
        .unwrap_or(letter)
}

/// Compose `text` to NFC so `a` + U+0301 and `á` compare equal
#[must_use]
pub fn compose(text: &str) -> String {
    text.nfc().collect()
}

/// Whether `letter` may appear in a playable word
///
/// Lowercase ASCII letters plus the accented vowels, `ç` and `ñ`.
#[must_use]
pub fn is_word_letter(letter: char) -> bool {
    letter.is_ascii_lowercase() || ACCENTED_LETTERS.contains(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_accents_removes_portuguese_diacritics() {
        assert_eq!(strip_accents("água"), "agua");
        assert_eq!(strip_accents("força"), "forca");
        assert_eq!(strip_accents("pão"), "pao");
        assert_eq!(strip_accents("avô"), "avo");
        assert_eq!(strip_accents("pinguim"), "pinguim");
    }

    #[test]
    fn strip_accents_handles_decomposed_input() {
        assert_eq!(strip_accents("fa\u{0301}cil"), "facil");
    }

    #[test]
    fn strip_accent_char_folds_single_letters() {
        assert_eq!(strip_accent_char('ç'), 'c');
        assert_eq!(strip_accent_char('ã'), 'a');
        assert_eq!(strip_accent_char('é'), 'e');
        assert_eq!(strip_accent_char('x'), 'x');
    }

    #[test]
    fn compose_joins_combining_marks() {
        assert_eq!(compose("a\u{0301}gua"), "água");
        assert_eq!(compose("água").chars().count(), 4);
    }

    #[test]
    fn word_letters() {
        for c in "abcxyzçãéõü".chars() {
            assert!(is_word_letter(c), "{c} should be a word letter");
        }
        for c in "A1-' ÷\u{0301}".chars() {
            assert!(!is_word_letter(c), "{c:?} should not be a word letter");
        }
    }
}
