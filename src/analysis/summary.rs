// src/analysis/summary.rs
// =============================================================================
// Summarization.
//
// Input is prepared by the caller with `prepare_input`: newlines become spaces
// and anything past the first 500 words is cut off, so a summarizer never sees
// an unbounded page.
//
// The default summarizer is extractive. Each sentence is scored by the average
// frequency of its content words across the whole input; the best sentences
// are kept, in their original order, until the word budget is spent.
// =============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// Words of page text handed to a summarizer at most.
pub const MAX_INPUT_WORDS: usize = 500;

pub trait Summarizer {
    fn summarize(&self, text: &str) -> String;
}

/// Collapses newlines and truncates `text` to its first `MAX_INPUT_WORDS` words.
pub fn prepare_input(text: &str) -> String {
    let flattened = text.trim().replace('\n', " ");
    let words: Vec<&str> = flattened.split_whitespace().collect();
    if words.len() > MAX_INPUT_WORDS {
        words[..MAX_INPUT_WORDS].join(" ")
    } else {
        flattened
    }
}

/// Picks the highest-scoring sentences up to a word budget.
#[derive(Debug, Clone, Copy)]
pub struct ExtractiveSummarizer {
    max_words: usize,
}

impl ExtractiveSummarizer {
    pub fn new(max_words: usize) -> Self {
        ExtractiveSummarizer { max_words }
    }
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        ExtractiveSummarizer::new(130)
    }
}

impl Summarizer for ExtractiveSummarizer {
    fn summarize(&self, text: &str) -> String {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return String::new();
        }

        let mut frequencies: HashMap<String, usize> = HashMap::new();
        for word in sentences.iter().flat_map(|s| content_words(s)) {
            *frequencies.entry(word).or_insert(0) += 1;
        }

        let mut ranked: Vec<(usize, f64)> = sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| {
                let words = content_words(sentence);
                let score = if words.is_empty() {
                    0.0
                } else {
                    let total: usize = words.iter().map(|w| frequencies[w]).sum();
                    total as f64 / words.len() as f64
                };
                (i, score)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut chosen: Vec<usize> = Vec::new();
        let mut budget = self.max_words;
        for (index, _) in ranked {
            let length = sentences[index].split_whitespace().count();
            if length <= budget {
                chosen.push(index);
                budget -= length;
            } else if chosen.is_empty() {
                // a single overlong sentence is cut rather than dropped
                let cut: Vec<&str> = sentences[index]
                    .split_whitespace()
                    .take(self.max_words)
                    .collect();
                return cut.join(" ");
            }
        }

        chosen.sort_unstable();
        chosen
            .into_iter()
            .map(|i| sentences[i])
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn sentence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^.!?]+[.!?]*").expect("sentence pattern is valid"))
}

fn split_sentences(text: &str) -> Vec<&str> {
    sentence_pattern()
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .collect()
}

// Lowercased words longer than three letters; short words are mostly glue
fn content_words(sentence: &str) -> Vec<String> {
    sentence
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() > 3)
        .map(str::to_lowercase)
        .collect()
}
