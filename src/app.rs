// src/app.rs
// =============================================================================
// Runs one mode end to end: pick the exclusion words, fetch, extract, analyze,
// export.
//
// Failure policy:
// - A page that cannot be fetched, or a section that is missing or empty, is
//   logged and the run ends without writing a report (Ok(None))
// - Storage and report-writing problems are real errors and bubble up
// =============================================================================

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::analysis::Analyzer;
use crate::config::{ExclusionSet, ExclusionStore};
use crate::crawl::crawl_domain;
use crate::extract::{extract_full_page_text, extract_section_text, ExtractError};
use crate::fetch::Fetcher;
use crate::report::{PageKind, ReportExporter};

/// What a single-page run extracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMode {
    Section(String),
    FullPage,
}

/// A change to the stored exclusion words, as offered by the CLI and the prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordAction {
    Keep,
    Add(String),
    Remove(String),
    SavePreset(String),
    LoadPreset(String),
}

/// Applies `action` to the stored default set and returns the set to use afterwards.
///
/// Loading a preset replaces (and persists) the default set. A preset that
/// does not exist leaves everything unchanged.
pub fn apply_word_action(store: &impl ExclusionStore, action: &WordAction) -> Result<ExclusionSet> {
    let mut words = store.load_default().context("failed to load exclusion words")?;

    match action {
        WordAction::Keep => {}
        WordAction::Add(word) => {
            if words.insert(word) {
                store.save_default(&words)?;
                println!("➕ Added \"{}\" to excluded words", word.trim().to_lowercase());
            }
        }
        WordAction::Remove(word) => {
            if words.remove(word) {
                store.save_default(&words)?;
                println!("➖ Removed \"{}\" from excluded words", word.trim().to_lowercase());
            }
        }
        WordAction::SavePreset(name) => {
            store.save_preset(name, &words)?;
            println!("💾 Saved {} word(s) as preset \"{}\"", words.len(), name);
        }
        WordAction::LoadPreset(name) => match store.load_preset(name)? {
            Some(preset) => {
                words = preset;
                store.save_default(&words)?;
                println!("📂 Loaded preset \"{}\" ({} word(s))", name, words.len());
            }
            None => tracing::warn!(preset = %name, "preset not found, keeping current words"),
        },
    }

    Ok(words)
}

/// The exclusion set for one analysis run: a named preset, or the default set.
pub fn exclusions_for_run(store: &impl ExclusionStore, preset: Option<&str>) -> Result<ExclusionSet> {
    match preset {
        Some(name) => store
            .load_preset(name)?
            .ok_or_else(|| anyhow!("preset \"{}\" does not exist", name)),
        None => store.load_default().context("failed to load exclusion words"),
    }
}

/// Fetches one page, extracts the requested text and exports its report.
///
/// Returns the report path, or `None` when nothing was written.
pub async fn run_single_page<F: Fetcher, E: ReportExporter>(
    fetcher: &F,
    analyzer: &Analyzer,
    exporter: &E,
    exclusions: &ExclusionSet,
    url: &str,
    mode: &PageMode,
) -> Result<Option<PathBuf>> {
    let html = match fetcher.fetch(url).await {
        Ok(html) => html,
        Err(e) => {
            tracing::error!(error = %e, "unable to retrieve webpage content");
            return Ok(None);
        }
    };

    let (kind, content) = match mode {
        PageMode::FullPage => (PageKind::FullPage, extract_full_page_text(&html)),
        PageMode::Section(title) => match extract_section_text(&html, title) {
            Ok(text) => (PageKind::Section, text),
            Err(ExtractError::SectionNotFound { title }) => {
                tracing::warn!(section = %title, "section not found");
                return Ok(None);
            }
        },
    };

    if content.trim().is_empty() {
        tracing::error!(url, "no text to analyze, nothing written");
        return Ok(None);
    }

    let report = analyzer.analyze(url, &content, exclusions);
    let path = exporter.export_page(kind, &report)?;
    Ok(Some(path))
}

/// Crawls from `url` and exports the domain report, even when no page could be fetched.
pub async fn run_domain<F: Fetcher, E: ReportExporter>(
    fetcher: &F,
    analyzer: &Analyzer,
    exporter: &E,
    exclusions: &ExclusionSet,
    url: &str,
    max_pages: usize,
) -> Result<PathBuf> {
    let report = crawl_domain(fetcher, analyzer, exclusions, url, max_pages).await?;
    if report.is_empty() {
        tracing::warn!(url, "no page could be fetched, the report will be empty");
    }
    println!("📄 Analyzed {} page(s) on {}", report.len(), report.label);
    let path = exporter.export_domain(&report)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JsonExclusionStore;
    use crate::fetch::testing::StaticSite;
    use crate::report::FileExporter;

    const PAGE: &str = r#"
        <html><body>
            <h1>Intro</h1>
            <p>Rust crawlers are great. Rust crawlers are fast.</p>
            <h2>Empty</h2>
            <h2>Details</h2>
            <p>Details here.</p>
        </body></html>
    "#;

    fn files_in(dir: &std::path::Path) -> usize {
        std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
    }

    #[tokio::test]
    async fn test_fetch_failure_writes_nothing() {
        let out = tempfile::tempdir().unwrap();
        let site = StaticSite::new();

        let result = run_single_page(
            &site,
            &Analyzer::default(),
            &FileExporter::new(out.path()),
            &ExclusionSet::default(),
            "https://a.test/",
            &PageMode::FullPage,
        )
        .await
        .unwrap();

        assert_eq!(result, None);
        assert_eq!(files_in(out.path()), 0);
    }

    #[tokio::test]
    async fn test_section_report_is_written() {
        let out = tempfile::tempdir().unwrap();
        let site = StaticSite::new().page("https://a.test/", PAGE);

        let path = run_single_page(
            &site,
            &Analyzer::default(),
            &FileExporter::new(out.path()),
            &ExclusionSet::default(),
            "https://a.test/",
            &PageMode::Section("intro".to_string()),
        )
        .await
        .unwrap()
        .unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("https://a.test/\n\nTop 10 Common Words:\n1. Rust"));
        assert!(!contents.contains("Details"));
    }

    #[tokio::test]
    async fn test_missing_or_empty_section_writes_nothing() {
        let out = tempfile::tempdir().unwrap();
        let site = StaticSite::new().page("https://a.test/", PAGE);

        for title in ["missing", "Empty"] {
            let result = run_single_page(
                &site,
                &Analyzer::default(),
                &FileExporter::new(out.path()),
                &ExclusionSet::default(),
                "https://a.test/",
                &PageMode::Section(title.to_string()),
            )
            .await
            .unwrap();
            assert_eq!(result, None);
        }
        assert_eq!(files_in(out.path()), 0);
    }

    #[tokio::test]
    async fn test_domain_run_exports_report() {
        let out = tempfile::tempdir().unwrap();
        let site = StaticSite::new()
            .page("http://a.test/", r#"<p>home</p><a href="/next">next</a>"#)
            .page("http://a.test/next", "<p>next page</p>");

        let path = run_domain(
            &site,
            &Analyzer::default(),
            &FileExporter::new(out.path()),
            &ExclusionSet::default(),
            "http://a.test/",
            5,
        )
        .await
        .unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("Domain Summary Report for a.test\n"));
        assert!(contents.contains("URL: http://a.test/\n"));
        assert!(contents.contains("URL: http://a.test/next\n"));
    }

    #[test]
    fn test_word_actions() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonExclusionStore::new(dir.path());
        store.init().unwrap();

        let words = apply_word_action(&store, &WordAction::Add("The".to_string())).unwrap();
        assert!(words.contains("the"));
        assert!(store.load_default().unwrap().contains("the"));

        apply_word_action(&store, &WordAction::SavePreset("basic".to_string())).unwrap();
        let words = apply_word_action(&store, &WordAction::Remove("the".to_string())).unwrap();
        assert!(words.is_empty());

        let words = apply_word_action(&store, &WordAction::LoadPreset("basic".to_string())).unwrap();
        assert!(words.contains("the"));
        assert!(store.load_default().unwrap().contains("the"));
    }

    #[test]
    fn test_loading_unknown_preset_keeps_words() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonExclusionStore::new(dir.path());
        apply_word_action(&store, &WordAction::Add("keep".to_string())).unwrap();

        let words = apply_word_action(&store, &WordAction::LoadPreset("nope".to_string())).unwrap();
        assert!(words.contains("keep"));
    }

    #[test]
    fn test_exclusions_for_run() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonExclusionStore::new(dir.path());
        store.save_preset("news", &["said"].into_iter().collect()).unwrap();

        assert!(exclusions_for_run(&store, Some("news")).unwrap().contains("said"));
        assert!(exclusions_for_run(&store, None).unwrap().is_empty());
        assert!(exclusions_for_run(&store, Some("missing")).is_err());
    }
}
