// src/report/page.rs
// =============================================================================
// The analysis results for one page, and how they read in a report file.
//
// Example body:
//
//   Top 10 Common Words:
//   1. Crawler         12 occurrences
//   2. Pages           7 occurrences
//
//   Summary:
//   ...
//
//   Sentiment:
//   Positive (compound score: 0.6249)
//
//   Readability:
//   Grade Level: 7th and 8th grade (Flesch Score: 65.73)
// =============================================================================

use std::fmt::Write;

use crate::analysis::{Readability, Sentiment};

#[derive(Debug, Clone, PartialEq)]
pub struct PageReport {
    pub url: String,
    /// How many words were asked for; `common_words` may hold fewer.
    pub word_limit: usize,
    /// Most frequent words first.
    pub common_words: Vec<(String, usize)>,
    pub summary: String,
    pub sentiment: Sentiment,
    pub readability: Readability,
}

impl PageReport {
    /// The analysis sections without any URL line.
    pub fn render_body(&self) -> String {
        let mut out = format!("Top {} Common Words:\n", self.word_limit);
        for (i, (word, count)) in self.common_words.iter().enumerate() {
            let _ = writeln!(out, "{}. {:<15} {} occurrences", i + 1, capitalize(word), count);
        }
        let _ = write!(out, "\nSummary:\n{}\n", self.summary);
        let _ = write!(out, "\nSentiment:\n{}\n", self.sentiment);
        let _ = write!(out, "\nReadability:\n{}\n", self.readability);
        out
    }

    /// The block used inside a domain report: a URL line, then the body.
    pub fn render_for_domain(&self) -> String {
        format!("URL: {}\n\n{}", self.url, self.render_body())
    }
}

// First letter upper, rest lower
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample(url: &str) -> PageReport {
        PageReport {
            url: url.to_string(),
            word_limit: 10,
            common_words: vec![("crawler".to_string(), 12), ("pages".to_string(), 7)],
            summary: "Crawlers read pages.".to_string(),
            sentiment: Sentiment::from_compound(0.6249),
            readability: Readability {
                grade_level: "7th and 8th grade".to_string(),
                flesch: 65.73,
            },
        }
    }

    #[test]
    fn test_render_body() {
        let expected = "Top 10 Common Words:\n\
                        1. Crawler         12 occurrences\n\
                        2. Pages           7 occurrences\n\
                        \nSummary:\nCrawlers read pages.\n\
                        \nSentiment:\nPositive (compound score: 0.6249)\n\
                        \nReadability:\nGrade Level: 7th and 8th grade (Flesch Score: 65.73)\n";
        assert_eq!(sample("https://a.test/").render_body(), expected);
    }

    #[test]
    fn test_heading_follows_word_limit() {
        let report = PageReport {
            word_limit: 5,
            ..sample("https://a.test/")
        };
        assert!(report.render_body().starts_with("Top 5 Common Words:\n1. Crawler"));
    }

    #[test]
    fn test_render_for_domain_starts_with_url() {
        let block = sample("https://a.test/docs").render_for_domain();
        assert!(block.starts_with("URL: https://a.test/docs\n\nTop 10 Common Words:\n"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("rust"), "Rust");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }
}
