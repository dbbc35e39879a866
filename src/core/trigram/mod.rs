//! Trigram similarity
//!
//! Strings are padded with two leading and one trailing space, cut into
//! overlapping three-character windows, and compared as sets: similarity is
//! the share of trigrams the two strings have in common
//! (|intersection| / |union|), the semantics trigram search indexes
//! document. Callers are expected to normalize first; this module compares
//! exactly what it is given.


use std::collections::HashSet;

use crate::core::models::ObsceneWordEntry;

type Trigram = [char; 3];

/// Extracts the trigram set of `word`. The padding guarantees that even a
/// single-character word produces trigrams; an empty word produces none.
fn trigrams(word: &str) -> HashSet<Trigram> {
    let mut set = HashSet::new();
    if word.is_empty() {
        return set;
    }

    let mut padded: Vec<char> = Vec::with_capacity(word.chars().count() + 3);
    padded.push(' ');
    padded.push(' ');
    padded.extend(word.chars());
    padded.push(' ');

    for window in padded.windows(3) {
        set.insert([window[0], window[1], window[2]]);
    }
    set
}

fn set_similarity(left: &HashSet<Trigram>, right: &HashSet<Trigram>) -> f32 {
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    let shared = left.intersection(right).count();
    let total = left.len() + right.len() - shared;
    shared as f32 / total as f32
}

/// Similarity of two strings in [0, 1].
///
/// Symmetric; `1.0` for two equal non-empty strings; `0.0` whenever either
/// side produces no trigrams (in particular for empty strings).
pub fn similarity(left: &str, right: &str) -> f32 {
    set_similarity(&trigrams(left), &trigrams(right))
}

/// Scores `query` against every entry's normalized value and returns the top
/// `limit` pairs by descending similarity. Ties keep dictionary order.
pub fn best_match(
    query: &str,
    entries: &[ObsceneWordEntry],
    limit: usize,
) -> Vec<(ObsceneWordEntry, f32)> {
    let query_trigrams = trigrams(query);

    let mut scored: Vec<(ObsceneWordEntry, f32)> = entries
        .iter()
        .map(|entry| {
            let score = set_similarity(&query_trigrams, &trigrams(&entry.normalized_value));
            (entry.clone(), score)
        })
        .collect();

    // sort_by is stable, which is what keeps dictionary order on equal scores
    scored.sort_by(|left, right| right.1.total_cmp(&left.1));
    scored.truncate(limit);
    scored
}
