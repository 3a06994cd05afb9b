// src/analysis/mod.rs
// =============================================================================
// Text analytics for one page of extracted text.
//
// Submodules:
// - words: ranked word frequencies with an exclusion set
// - summary: Summarizer trait and the default extractive summarizer
// - sentiment: SentimentAnalyzer trait and the default lexicon scorer
// - readability: ReadabilityScorer trait and the default Flesch-based scorer
//
// `Analyzer` bundles one of each and turns text into a `PageReport`. The
// services are trait objects so a different summarizer or scorer can be
// plugged in without touching the crawler.
// =============================================================================

mod readability;
mod sentiment;
mod summary;
mod words;

pub use readability::{Readability, ReadabilityScorer, StandardReadability};
pub use sentiment::{LexiconSentiment, Sentiment, SentimentAnalyzer};
pub use summary::{prepare_input, ExtractiveSummarizer, Summarizer};
pub use words::{most_common_words, DEFAULT_TOP_WORDS};

use crate::config::ExclusionSet;
use crate::report::PageReport;

pub struct Analyzer {
    summarizer: Box<dyn Summarizer + Send + Sync>,
    sentiment: Box<dyn SentimentAnalyzer + Send + Sync>,
    readability: Box<dyn ReadabilityScorer + Send + Sync>,
    top_words: usize,
}

impl Analyzer {
    pub fn new(
        summarizer: Box<dyn Summarizer + Send + Sync>,
        sentiment: Box<dyn SentimentAnalyzer + Send + Sync>,
        readability: Box<dyn ReadabilityScorer + Send + Sync>,
        top_words: usize,
    ) -> Self {
        Analyzer {
            summarizer,
            sentiment,
            readability,
            top_words,
        }
    }

    /// The built-in summarizer and scorers, listing `top_words` words per page.
    pub fn with_defaults(top_words: usize) -> Self {
        Analyzer::new(
            Box::new(ExtractiveSummarizer::default()),
            Box::new(LexiconSentiment),
            Box::new(StandardReadability),
            top_words,
        )
    }

    /// Runs every analysis over `text` and bundles the results for `url`.
    pub fn analyze(&self, url: &str, text: &str, exclusions: &ExclusionSet) -> PageReport {
        let common_words = most_common_words(text, exclusions, self.top_words);
        let summary = self.summarizer.summarize(&prepare_input(text));
        let sentiment = self.sentiment.analyze(text);
        let readability = self.readability.score(text);

        tracing::debug!(
            url,
            words = common_words.len(),
            sentiment = %sentiment.label,
            "page analyzed"
        );

        PageReport {
            url: url.to_string(),
            word_limit: self.top_words,
            common_words,
            summary,
            sentiment,
            readability,
        }
    }
}

// Whole numbers keep one decimal ("100.0"), everything else prints as is
pub(crate) fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::with_defaults(DEFAULT_TOP_WORDS)
    }
}
