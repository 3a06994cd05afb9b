// src/analysis/words.rs
// =============================================================================
// Word-frequency counting.
//
// A token is an ASCII letter followed by any run of word characters, bounded
// on both sides by a word boundary. "cat_2" is one token; "3cats" is no token
// at all, because the boundary in front of it sits before the digit.
//
// Counting goes through an IndexMap so the map remembers first-seen order; the
// sort below is stable, which keeps equal counts in that order and makes the
// ranking reproducible run after run.
// =============================================================================

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::config::ExclusionSet;

/// Number of words a report lists unless configured otherwise.
pub const DEFAULT_TOP_WORDS: usize = 10;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b[a-zA-Z]\w*\b").expect("word pattern is valid"))
}

/// Returns up to `limit` `(word, count)` pairs, most frequent first.
///
/// Words are lowercased before counting and before the exclusion check.
pub fn most_common_words(
    text: &str,
    exclusions: &ExclusionSet,
    limit: usize,
) -> Vec<(String, usize)> {
    let lowered = text.to_lowercase();

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for token in word_pattern().find_iter(&lowered) {
        let word = token.as_str();
        if exclusions.contains(word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is OnceLock?
//    - A cell that is written once and read many times, safely across threads
//    - Compiling a regex is slow; get_or_init compiles it on first use only
//
// 2. Why IndexMap instead of HashMap?
//    - HashMap iteration order is random, so ties would come out shuffled
//    - IndexMap iterates in insertion order
//
// 3. Why sort_by and not sort_unstable_by?
//    - sort_by is stable: equal elements keep their relative order
//    - That is exactly what keeps tied words in first-seen order
// -----------------------------------------------------------------------------
