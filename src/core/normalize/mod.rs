//! Word normalization
//!
//! Brings free-form user input and dictionary entries to one canonical,
//! comparable form: strip everything that is not a word character, lowercase,
//! transliterate Cyrillic into Latin.

mod translit;


use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that carry no signal for matching: anything outside
/// alphanumerics, underscore and the Cyrillic alphabet with its stressed
/// letters ё/Ё.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\wа-яА-ЯёЁ]").expect("non-word pattern is valid"));

/// Normalize a single word.
///
/// Strips punctuation, whitespace and symbols, lowercases with Unicode-aware
/// case folding, and transliterates Cyrillic letters to their fixed Latin
/// spellings. Digits and Latin letters pass through unchanged, so
/// `" Агент007 "` becomes `"agent007"`. Idempotent: normalizing an already
/// normalized word is a no-op.
pub fn normalize_word(word: &str) -> String {
    let filtered = NON_WORD.replace_all(word, "");
    let lowered = filtered.to_lowercase();
    let stripped = lowered.trim();

    let mut normalized = String::with_capacity(stripped.len());
    for ch in stripped.chars() {
        match translit::latin_equivalent(ch) {
            Some(replacement) => normalized.push_str(replacement),
            None => normalized.push(ch),
        }
    }
    normalized
}

/// Normalize text token by token.
///
/// Splits on single spaces, normalizes each token independently and rejoins
/// with single spaces. Contiguous text is never normalized as a whole.
pub fn normalize_text(text: &str) -> String {
    text.split(' ')
        .map(normalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}
