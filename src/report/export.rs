// src/report/export.rs
// =============================================================================
// Writes finished reports to disk.
//
// File names carry a local timestamp so repeated runs never overwrite each
// other:
//   Domain_Report_20240131_094512.txt
//   Section_Report_20240131_094512.txt
//   FullPage_Report_20240131_094512.txt
//
// A domain report is a header line, a rule of '=' and then every page block
// followed by a rule of '-'.
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use super::{DomainReport, PageReport};

const RULE_WIDTH: usize = 60;

/// Which single-page mode produced a report; decides the file name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Section,
    FullPage,
}

impl PageKind {
    fn file_prefix(self) -> &'static str {
        match self {
            PageKind::Section => "Section",
            PageKind::FullPage => "FullPage",
        }
    }
}

#[derive(Debug, Error)]
#[error("failed to write report to {path}: {source}")]
pub struct ReportError {
    path: PathBuf,
    #[source]
    source: std::io::Error,
}

pub trait ReportExporter {
    /// Persists a crawl's report and returns where it went.
    fn export_domain(&self, report: &DomainReport) -> Result<PathBuf, ReportError>;
    /// Persists a single-page report and returns where it went.
    fn export_page(&self, kind: PageKind, report: &PageReport) -> Result<PathBuf, ReportError>;
}

/// Timestamped text files in one directory.
#[derive(Debug, Clone)]
pub struct FileExporter {
    dir: PathBuf,
}

impl FileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileExporter { dir: dir.into() }
    }

    fn write(&self, prefix: &str, contents: &str) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(&self.dir).map_err(|source| ReportError {
            path: self.dir.clone(),
            source,
        })?;

        let path = unique_path(&self.dir, prefix);
        fs::write(&path, contents).map_err(|source| ReportError {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), bytes = contents.len(), "report written");
        Ok(path)
    }
}

impl ReportExporter for FileExporter {
    fn export_domain(&self, report: &DomainReport) -> Result<PathBuf, ReportError> {
        self.write("Domain", &render_domain(report))
    }

    fn export_page(&self, kind: PageKind, report: &PageReport) -> Result<PathBuf, ReportError> {
        let contents = format!("{}\n\n{}", report.url, report.render_body());
        self.write(kind.file_prefix(), &contents)
    }
}

pub fn render_domain(report: &DomainReport) -> String {
    let mut out = format!(
        "Domain Summary Report for {}\n{}\n\n",
        report.label,
        "=".repeat(RULE_WIDTH)
    );
    for block in report.blocks() {
        out.push_str(&block);
        out.push('\n');
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push_str("\n\n");
    }
    out
}

// Two exports within the same second get a numeric suffix instead of clobbering
fn unique_path(dir: &Path, prefix: &str) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let mut path = dir.join(format!("{prefix}_Report_{stamp}.txt"));
    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("{prefix}_Report_{stamp}_{n}.txt"));
        n += 1;
    }
    path
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait for exporting?
//    - app.rs only needs "put this report somewhere and tell me where"
//    - Tests and other outputs can implement ReportExporter without touching
//      the modes that call it
//
// 2. What does map_err(|source| ReportError { .. }) do?
//    - std::io::Error does not say which file failed
//    - Wrapping it with the path gives a message a user can act on, while
//      #[source] keeps the original error in the chain
//
// 3. Why chrono::Local and not Utc?
//    - The timestamp is for people browsing the output folder, so it should
//      match their wall clock
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::page::tests::sample;

    #[test]
    fn test_render_domain_layout() {
        let mut report = DomainReport::new("a.test");
        report.push(sample("https://a.test/"));
        report.push(sample("https://a.test/b"));

        let text = render_domain(&report);
        let rule = "-".repeat(60);
        assert!(text.starts_with(&format!("Domain Summary Report for a.test\n{}\n\n", "=".repeat(60))));
        assert_eq!(text.matches(&rule).count(), 2);
        let first = text.find("URL: https://a.test/\n").unwrap();
        let second = text.find("URL: https://a.test/b\n").unwrap();
        assert!(first < second);
        assert!(text.ends_with(&format!("\n{rule}\n\n")));
    }

    #[test]
    fn test_empty_domain_report_has_header_only() {
        let text = render_domain(&DomainReport::new("a.test"));
        assert_eq!(text, format!("Domain Summary Report for a.test\n{}\n\n", "=".repeat(60)));
    }

    #[test]
    fn test_export_domain_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FileExporter::new(dir.path().join("out"));
        let mut report = DomainReport::new("a.test");
        report.push(sample("https://a.test/"));

        let path = exporter.export_domain(&report).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("Domain_Report_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), render_domain(&report));
    }

    #[test]
    fn test_export_page_starts_with_url() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FileExporter::new(dir.path());
        let page = sample("https://a.test/intro");

        let section = exporter.export_page(PageKind::Section, &page).unwrap();
        let full = exporter.export_page(PageKind::FullPage, &page).unwrap();

        assert!(section.file_name().unwrap().to_string_lossy().starts_with("Section_Report_"));
        assert!(full.file_name().unwrap().to_string_lossy().starts_with("FullPage_Report_"));
        let contents = fs::read_to_string(&section).unwrap();
        assert!(contents.starts_with("https://a.test/intro\n\nTop 10 Common Words:\n"));
    }

    #[test]
    fn test_same_second_exports_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FileExporter::new(dir.path());
        let page = sample("https://a.test/");

        let first = exporter.export_page(PageKind::FullPage, &page).unwrap();
        let second = exporter.export_page(PageKind::FullPage, &page).unwrap();
        assert_ne!(first, second);
        assert!(first.exists() && second.exists());
    }
}
