// src/report/mod.rs
// =============================================================================
// Report values and their export.
//
// Submodules:
// - page: PageReport, one page's analysis, and its text rendering
// - domain: DomainReport, the ordered page reports of one crawl
// - export: ReportExporter trait and the timestamped-file implementation
// =============================================================================

mod domain;
mod export;
mod page;

pub use domain::DomainReport;
pub use export::{FileExporter, PageKind, ReportExporter};
pub use page::PageReport;
