//! Static Cyrillic to Latin transliteration table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Lowercase Cyrillic letters and their Latin spellings. The soft and hard
/// signs disappear entirely; multi-letter sounds expand to up to four Latin
/// letters.
const CYRILLIC_TO_LATIN: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "j"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "kh"),
    ('ц', "c"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "shch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
    ('ё', "e"),
];

static TABLE: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| CYRILLIC_TO_LATIN.iter().copied().collect());

/// Latin spelling for a Cyrillic letter, `None` for anything else.
pub(super) fn latin_equivalent(ch: char) -> Option<&'static str> {
    TABLE.get(&ch).copied()
}
