// src/config/mod.rs
// =============================================================================
// Run configuration.
//
// Nothing here is global. `Settings` is built once from the command line (and
// SITE_DIGEST_* environment variables) and passed by reference into whichever
// mode runs; the exclusion words come from an `ExclusionStore` that is handed
// in the same way.
// =============================================================================

mod exclusions;

pub use exclusions::{ExclusionSet, ExclusionStore, JsonExclusionStore};

use std::path::PathBuf;
use std::time::Duration;

/// Per-fetch timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;
/// Page cap for a domain crawl when none is configured.
pub const DEFAULT_MAX_PAGES: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Holds exclude_words.json and presets/.
    pub config_dir: PathBuf,
    /// Where report files are written.
    pub output_dir: PathBuf,
    pub timeout: Duration,
    /// Number of words listed per page report.
    pub top_words: usize,
}
