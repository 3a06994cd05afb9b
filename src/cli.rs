// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
//   site-digest section <url> <title>     one named section of a page
//   site-digest full <url>                the whole page
//   site-digest domain <url>              a small same-domain crawl
//   site-digest words <action>            edit the exclusion words
//   site-digest                           no subcommand: interactive prompts
//
// Settings shared by every mode are global flags, each with a SITE_DIGEST_*
// environment variable as fallback.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::analysis::DEFAULT_TOP_WORDS;
use crate::config::{Settings, DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(
    name = "site-digest",
    version,
    about = "Extract text from a page, a page section or a small crawl and write a text-analytics report",
    long_about = "site-digest fetches a page (or one section of it, or up to N pages of the same site), \
                  extracts the text and writes a report with the most common words, a summary, \
                  sentiment and readability. Run without a subcommand for interactive prompts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    /// Directory holding exclude_words.json and presets/
    #[arg(long, global = true, env = "SITE_DIGEST_CONFIG_DIR", default_value = "config")]
    pub config_dir: PathBuf,

    /// Directory reports are written to
    #[arg(long, global = true, env = "SITE_DIGEST_OUTPUT_DIR", default_value = "reports")]
    pub output_dir: PathBuf,

    /// Per-request timeout in seconds
    #[arg(
        long,
        global = true,
        env = "SITE_DIGEST_TIMEOUT",
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub timeout: u64,

    /// Number of most common words listed per page
    #[arg(long, global = true, env = "SITE_DIGEST_TOP_WORDS", default_value_t = DEFAULT_TOP_WORDS)]
    pub top_words: usize,
}

impl SettingsArgs {
    pub fn to_settings(&self) -> Settings {
        Settings {
            config_dir: self.config_dir.clone(),
            output_dir: self.output_dir.clone(),
            timeout: Duration::from_secs(self.timeout),
            top_words: self.top_words,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one section of a page, from its heading to the next heading
    ///
    /// Example: site-digest section https://example.com/guide "Getting Started"
    Section {
        /// Page URL; https:// is added when no scheme is given
        url: String,

        /// Heading text; case and punctuation are ignored
        title: String,

        /// Use this exclusion preset instead of the default word list
        #[arg(long)]
        preset: Option<String>,
    },

    /// Analyze all visible text of a page
    Full {
        /// Page URL; https:// is added when no scheme is given
        url: String,

        /// Use this exclusion preset instead of the default word list
        #[arg(long)]
        preset: Option<String>,
    },

    /// Crawl pages of one site breadth-first and analyze each of them
    ///
    /// Only links on the same host whose URL starts with the given URL are followed.
    Domain {
        /// Start URL; https:// is added when no scheme is given
        url: String,

        /// Stop after this many pages have been visited
        #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
        max_pages: usize,

        /// Use this exclusion preset instead of the default word list
        #[arg(long)]
        preset: Option<String>,
    },

    /// Show or edit the words left out of word counts
    Words {
        #[command(subcommand)]
        action: WordsCommand,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum WordsCommand {
    /// Print the default exclusion list
    List,
    /// Add a word to the default list
    Add { word: String },
    /// Remove a word from the default list
    Remove { word: String },
    /// Save the default list under a preset name
    SavePreset { name: String },
    /// Replace the default list with a saved preset
    LoadPreset { name: String },
}

/// Accepts "example.com" as well as full URLs; anything not starting with "http" gets https://.
pub fn normalize_target(site: &str) -> String {
    let site = site.trim();
    if site.starts_with("http") {
        site.to_string()
    } else {
        format!("https://{site}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_target() {
        assert_eq!(normalize_target("example.com"), "https://example.com");
        assert_eq!(normalize_target(" http://a.test/ "), "http://a.test/");
        assert_eq!(normalize_target("https://a.test"), "https://a.test");
    }

    #[test]
    fn test_no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["site-digest"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_domain_defaults() {
        let cli = Cli::try_parse_from(["site-digest", "domain", "a.test"]).unwrap();
        match cli.command {
            Some(Commands::Domain { url, max_pages, preset }) => {
                assert_eq!(url, "a.test");
                assert_eq!(max_pages, DEFAULT_MAX_PAGES);
                assert_eq!(preset, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_settings_after_subcommand() {
        let cli = Cli::try_parse_from([
            "site-digest",
            "full",
            "a.test",
            "--timeout",
            "3",
            "--top-words",
            "5",
            "--output-dir",
            "/tmp/out",
        ])
        .unwrap();
        let settings = cli.settings.to_settings();
        assert_eq!(settings.timeout, Duration::from_secs(3));
        assert_eq!(settings.top_words, 5);
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_words_subcommands() {
        let cli = Cli::try_parse_from(["site-digest", "words", "save-preset", "news"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Words { action: WordsCommand::SavePreset { ref name } }) if name == "news"
        ));
    }

    #[test]
    fn test_section_requires_title() {
        assert!(Cli::try_parse_from(["site-digest", "section", "a.test"]).is_err());
    }
}
