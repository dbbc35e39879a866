//! De-obfuscation transformations
//!
//! Each transformation is one independent hypothesis about how an obscene
//! word may have been disguised: digits standing in for letters, stretched
//! characters, Latin look-alikes typed instead of Cyrillic. Hypotheses are
//! applied to the raw word one at a time, never composed, and each result is
//! matched against the dictionary separately.

mod tables;


/// A single de-obfuscation hypothesis.
pub type Transformation = fn(&str) -> String;

/// Baseline hypothesis: the word is not disguised at all.
pub fn identity(word: &str) -> String {
    word.to_owned()
}

/// Replaces digits with the letters they commonly disguise, e.g. `"П1во"`
/// becomes `"Пиво"`. Digits without a convincing look-alike pass through.
pub fn replace_digits_with_letters(word: &str) -> String {
    word.chars()
        .map(|ch| tables::digit_lookalike(ch).unwrap_or(ch))
        .collect()
}

/// Collapses every run of identical consecutive characters to a single
/// instance, e.g. `"ППиииввввооо"` becomes `"Пиво"`. The comparison is
/// case-sensitive, so `"aA"` stays untouched.
pub fn collapse_repeating_characters(word: &str) -> String {
    let mut collapsed = String::with_capacity(word.len());
    let mut previous = None;
    for ch in word.chars() {
        if previous != Some(ch) {
            collapsed.push(ch);
        }
        previous = Some(ch);
    }
    collapsed
}

/// Replaces Latin characters with the Cyrillic letters they visually
/// resemble, e.g. `"ypoк"` becomes `"урок"`.
pub fn replace_latin_lookalikes(word: &str) -> String {
    word.chars()
        .map(|ch| tables::cyrillic_lookalike(ch).unwrap_or(ch))
        .collect()
}

/// The default hypothesis pipeline, in evaluation order. More hypotheses can
/// be appended through
/// [`ObscenityFilterService::with_transformations`](crate::services::filter::ObscenityFilterService::with_transformations).
pub fn default_transformations() -> Vec<Transformation> {
    vec![
        identity,
        replace_digits_with_letters,
        collapse_repeating_characters,
        replace_latin_lookalikes,
    ]
}
