//! Static look-alike substitution tables.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Digits and the letters they usually stand in for. The targets are
/// Cyrillic except where the Latin shape is the closer match ('5'). '2' and
/// '9' have no convincing look-alike and are left alone.
const DIGIT_LOOKALIKES: &[(char, char)] = &[
    ('0', 'о'),
    ('1', 'и'),
    ('3', 'з'),
    ('4', 'ч'),
    ('5', 's'),
    ('6', 'б'),
    ('7', 'г'),
    ('8', 'В'),
];

/// Latin characters that render close enough to Cyrillic letters to pass for
/// them. Characters whose look-alike only exists in uppercase get an
/// uppercase entry.
const LATIN_LOOKALIKES: &[(char, char)] = &[
    ('y', 'у'),
    ('e', 'е'),
    ('o', 'о'),
    ('p', 'р'),
    ('a', 'а'),
    ('k', 'к'),
    ('x', 'х'),
    ('c', 'с'),
    ('n', 'п'),
    ('A', 'А'),
    ('B', 'В'),
    ('C', 'С'),
    ('E', 'Е'),
    ('H', 'Н'),
    ('K', 'К'),
    ('M', 'М'),
    ('O', 'О'),
    ('P', 'Р'),
    ('T', 'Т'),
    ('X', 'Х'),
];

static DIGITS: Lazy<HashMap<char, char>> =
    Lazy::new(|| DIGIT_LOOKALIKES.iter().copied().collect());

static LATIN: Lazy<HashMap<char, char>> =
    Lazy::new(|| LATIN_LOOKALIKES.iter().copied().collect());

/// Letter a digit is likely to disguise, `None` for anything else.
pub(super) fn digit_lookalike(ch: char) -> Option<char> {
    DIGITS.get(&ch).copied()
}

/// Cyrillic look-alike of a Latin character, `None` for anything else.
pub(super) fn cyrillic_lookalike(ch: char) -> Option<char> {
    LATIN.get(&ch).copied()
}
