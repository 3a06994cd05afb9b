// src/analysis/sentiment.rs
// =============================================================================
// Sentiment scoring.
//
// The report only needs a label and a compound score in [-1, 1]. The default
// scorer is lexicon based: every known word carries a valence between -4 and
// +4, a negation in the three words before it flips and damps it, a booster
// right before it ("very good") pushes it further from zero. The summed
// valence is squashed into [-1, 1] with s / sqrt(s^2 + 15).
//
// Labels use fixed thresholds on the compound score:
//   >= 0.05  Positive
//   <= -0.05 Negative
//   else     Neutral
// =============================================================================

use std::fmt;

use super::format_score;

/// Compound score at or above which text is labelled positive.
const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which text is labelled negative.
const NEGATIVE_THRESHOLD: f64 = -0.05;

const NORMALIZATION_ALPHA: f64 = 15.0;
const NEGATION_SCALAR: f64 = -0.74;
const BOOSTER_INCREMENT: f64 = 0.293;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub compound: f64,
}

impl Sentiment {
    pub fn from_compound(compound: f64) -> Self {
        Sentiment {
            label: SentimentLabel::from_compound(compound),
            compound,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (compound score: {})", self.label, format_score(self.compound))
    }
}

pub trait SentimentAnalyzer {
    fn analyze(&self, text: &str) -> Sentiment;
}

/// Lexicon scorer used by default.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconSentiment;

impl SentimentAnalyzer for LexiconSentiment {
    fn analyze(&self, text: &str) -> Sentiment {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|raw| {
                raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                    .to_lowercase()
            })
            .filter(|t| !t.is_empty())
            .collect();

        let mut total = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(mut valence) = valence(token) else {
                continue;
            };

            if i > 0 {
                if let Some(boost) = booster(&tokens[i - 1]) {
                    valence += boost * valence.signum();
                }
            }

            let window = &tokens[i.saturating_sub(3)..i];
            if window.iter().any(|w| is_negation(w)) {
                valence *= NEGATION_SCALAR;
            }

            total += valence;
        }

        Sentiment::from_compound(round4(normalize(total)))
    }
}

fn normalize(score: f64) -> f64 {
    let normalized = score / (score * score + NORMALIZATION_ALPHA).sqrt();
    normalized.clamp(-1.0, 1.0)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn is_negation(word: &str) -> bool {
    matches!(
        word,
        "not" | "no" | "never" | "none" | "nobody" | "nothing" | "neither" | "nor"
            | "cannot" | "without" | "isn't" | "aren't" | "wasn't" | "weren't"
            | "don't" | "doesn't" | "didn't" | "won't" | "can't" | "couldn't"
            | "shouldn't" | "wouldn't" | "hardly" | "rarely"
    ) || word.ends_with("n't")
}

fn booster(word: &str) -> Option<f64> {
    match word {
        "very" | "extremely" | "really" | "incredibly" | "highly" | "so"
        | "totally" | "absolutely" | "remarkably" | "especially" => Some(BOOSTER_INCREMENT),
        "slightly" | "somewhat" | "barely" | "marginally" | "partly" => Some(-BOOSTER_INCREMENT),
        _ => None,
    }
}

fn valence(word: &str) -> Option<f64> {
    let score = match word {
        // positive
        "love" | "loved" | "loves" => 3.2,
        "excellent" | "outstanding" | "superb" => 3.1,
        "amazing" | "wonderful" | "fantastic" | "awesome" => 3.0,
        "great" | "brilliant" | "delightful" => 3.0,
        "happy" | "glad" | "joy" | "enjoy" | "enjoyed" => 2.5,
        "beautiful" | "perfect" | "best" => 2.9,
        "good" | "nice" | "pleasant" | "success" | "successful" => 1.9,
        "like" | "liked" | "helpful" | "useful" | "easy" => 1.6,
        "win" | "won" | "benefit" | "benefits" | "improve" | "improved" => 2.0,
        "safe" | "secure" | "reliable" | "clean" | "clear" => 1.5,
        "fun" | "exciting" | "interesting" | "impressive" => 2.2,
        "thanks" | "thank" | "welcome" | "recommend" | "support" => 1.7,
        "better" | "strong" | "fast" | "free" | "fresh" => 1.4,
        // negative
        "hate" | "hated" | "hates" | "terrible" | "horrible" | "awful" => -3.0,
        "worst" | "disaster" | "disgusting" | "atrocious" => -3.2,
        "bad" | "poor" | "sad" | "angry" | "ugly" => -2.3,
        "fail" | "failed" | "failure" | "broken" | "crash" | "crashed" => -2.2,
        "problem" | "problems" | "issue" | "issues" | "bug" | "bugs" => -1.5,
        "difficult" | "hard" | "slow" | "confusing" | "annoying" => -1.5,
        "wrong" | "error" | "errors" | "risk" | "danger" | "dangerous" => -1.8,
        "worse" | "weak" | "loss" | "lost" | "lose" => -2.0,
        "fear" | "afraid" | "worried" | "worry" | "pain" | "hurt" => -2.2,
        "kill" | "killed" | "death" | "dead" | "war" | "attack" => -2.9,
        "dislike" | "disappointed" | "disappointing" | "unfortunately" => -2.0,
        _ => return None,
    };
    Some(score)
}
