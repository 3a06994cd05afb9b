// src/analysis/readability.rs
// =============================================================================
// Readability metrics.
//
// Two numbers end up in a report:
// - Flesch reading ease: 206.835 - 1.015 * (words / sentences)
//                                - 84.6 * (syllables / words)
// - A consensus grade band ("9th and 10th grade"): several grade formulas
//   vote, each contributing the grades just below and above its score, and the
//   most common grade wins.
//
// Syllables are estimated from vowel groups; it is a heuristic and is off by
// one on some words, which the grade band absorbs.
// =============================================================================

use std::fmt;

use super::format_score;
use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Readability {
    /// Consensus grade band, e.g. "7th and 8th grade".
    pub grade_level: String,
    /// Flesch reading ease, rounded to two decimals.
    pub flesch: f64,
}

impl fmt::Display for Readability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grade Level: {} (Flesch Score: {})",
            self.grade_level,
            format_score(self.flesch)
        )
    }
}

pub trait ReadabilityScorer {
    fn score(&self, text: &str) -> Readability;
}

/// Flesch reading ease plus a Flesch-Kincaid / Coleman-Liau / ARI grade vote.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardReadability;

impl ReadabilityScorer for StandardReadability {
    fn score(&self, text: &str) -> Readability {
        let stats = TextStats::from_text(text);
        if stats.words == 0 {
            return Readability {
                grade_level: "Unscored (no words)".to_string(),
                flesch: 0.0,
            };
        }

        let flesch = round2(stats.flesch_reading_ease());
        let grade = consensus_grade(&stats, flesch);
        Readability {
            grade_level: grade_band(grade),
            flesch,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct TextStats {
    words: usize,
    sentences: usize,
    syllables: usize,
    letters: usize,
}

impl TextStats {
    fn from_text(text: &str) -> Self {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| w.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
            .filter(|w| !w.is_empty())
            .collect();

        TextStats {
            words: words.len(),
            sentences: sentence_count(text),
            syllables: words.iter().map(|w| syllable_count(w)).sum(),
            letters: words.iter().map(|w| w.chars().count()).sum(),
        }
    }

    fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }

    fn syllables_per_word(&self) -> f64 {
        self.syllables as f64 / self.words as f64
    }

    fn flesch_reading_ease(&self) -> f64 {
        206.835 - 1.015 * self.words_per_sentence() - 84.6 * self.syllables_per_word()
    }

    fn flesch_kincaid_grade(&self) -> f64 {
        0.39 * self.words_per_sentence() + 11.8 * self.syllables_per_word() - 15.59
    }

    fn coleman_liau_index(&self) -> f64 {
        let letters_per_100 = self.letters as f64 / self.words as f64 * 100.0;
        let sentences_per_100 = self.sentences as f64 / self.words as f64 * 100.0;
        0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8
    }

    fn automated_readability_index(&self) -> f64 {
        4.71 * (self.letters as f64 / self.words as f64) + 0.5 * self.words_per_sentence()
            - 21.43
    }
}

fn sentence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b[^.!?]+[.!?]*").expect("sentence pattern is valid"))
}

// Sentences of two words or fewer ("Fig. 2.") do not count; never below one
fn sentence_count(text: &str) -> usize {
    let counted = sentence_pattern()
        .find_iter(text)
        .filter(|sentence| sentence.as_str().split_whitespace().count() > 2)
        .count();
    counted.max(1)
}

fn syllable_count(word: &str) -> usize {
    let word = word.to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut groups = 0;
    let mut previous_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }

    // silent trailing "e" ("make"), but not "le" endings ("table")
    if groups > 1 && word.ends_with('e') && !word.ends_with("le") {
        groups -= 1;
    }

    groups.max(1)
}

fn flesch_band_grade(flesch: f64) -> i64 {
    match flesch {
        f if f >= 90.0 => 5,
        f if f >= 80.0 => 6,
        f if f >= 70.0 => 7,
        f if f >= 60.0 => 8,
        f if f >= 50.0 => 10,
        f if f >= 40.0 => 11,
        f if f >= 30.0 => 12,
        _ => 13,
    }
}

fn consensus_grade(stats: &TextStats, flesch: f64) -> i64 {
    let mut votes: Vec<i64> = vec![flesch_band_grade(flesch)];
    for score in [
        stats.flesch_kincaid_grade(),
        stats.coleman_liau_index(),
        stats.automated_readability_index(),
    ] {
        votes.push(score.floor() as i64);
        votes.push(score.ceil() as i64);
    }

    let mut best = votes[0];
    let mut best_count = 0;
    let mut candidates = votes.clone();
    candidates.sort_unstable();
    candidates.dedup();
    for candidate in candidates {
        let count = votes.iter().filter(|v| **v == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }

    best
}

// "7th and 8th grade" for 8; the lowest band is "1st and 2nd grade"
fn grade_band(grade: i64) -> String {
    let grade = grade.max(2);
    format!(
        "{}{} and {}{} grade",
        grade - 1,
        ordinal_suffix(grade - 1),
        grade,
        ordinal_suffix(grade)
    )
}

fn ordinal_suffix(n: i64) -> &'static str {
    match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllables() {
        assert_eq!(syllable_count("cat"), 1);
        assert_eq!(syllable_count("make"), 1);
        assert_eq!(syllable_count("table"), 2);
        assert_eq!(syllable_count("readability"), 5);
        assert_eq!(syllable_count("rhythm"), 1);
    }

    #[test]
    fn test_short_fragments_are_not_sentences() {
        assert_eq!(sentence_count("Fig. 2. The cat sat on the mat."), 1);
        assert_eq!(sentence_count(""), 1);
    }

    #[test]
    fn test_simple_text_reads_easily() {
        let text = "The cat sat on the mat. The dog ran to the cat. They are friends now.";
        let readability = StandardReadability.score(text);
        assert!(readability.flesch > 90.0, "flesch was {}", readability.flesch);
        assert!(readability.grade_level.ends_with("grade"));
    }

    #[test]
    fn test_dense_text_scores_lower() {
        let simple = StandardReadability.score("The cat sat on the mat. The dog ran far away.");
        let dense = StandardReadability.score(
            "Institutional considerations notwithstanding, comprehensive organizational \
             restructuring necessitates extraordinarily sophisticated administrative coordination.",
        );
        assert!(dense.flesch < simple.flesch);
    }

    #[test]
    fn test_empty_text() {
        let readability = StandardReadability.score("   ");
        assert_eq!(readability.flesch, 0.0);
        assert_eq!(readability.grade_level, "Unscored (no words)");
    }

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(0), "th");
    }

    #[test]
    fn test_grade_band_starts_at_first_grade() {
        assert_eq!(grade_band(0), "1st and 2nd grade");
        assert_eq!(grade_band(1), "1st and 2nd grade");
        assert_eq!(grade_band(2), "1st and 2nd grade");
        assert_eq!(grade_band(12), "11th and 12th grade");
    }

    #[test]
    fn test_very_simple_text_has_no_zeroth_grade() {
        let readability = StandardReadability.score("Go. Go. Go. Go.");
        assert!(!readability.grade_level.starts_with("0th"));
    }

    #[test]
    fn test_display_whole_scores_keep_a_decimal() {
        let readability = Readability {
            grade_level: "Unscored (no words)".to_string(),
            flesch: 0.0,
        };
        assert_eq!(
            readability.to_string(),
            "Grade Level: Unscored (no words) (Flesch Score: 0.0)"
        );
    }

    #[test]
    fn test_display() {
        let readability = Readability {
            grade_level: "7th and 8th grade".to_string(),
            flesch: 65.73,
        };
        assert_eq!(
            readability.to_string(),
            "Grade Level: 7th and 8th grade (Flesch Score: 65.73)"
        );
    }
}
