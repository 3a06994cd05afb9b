// src/report/domain.rs
// =============================================================================
// Collects the page reports of one crawl.
//
// Pages are kept in visit order, which is breadth-first order from the seed.
// Failed fetches never make it in, so a report can hold fewer pages than the
// crawl visited, and zero pages is a valid (header-only) report.
//
// The label is the site as the user typed it, e.g. "example.com" or
// "localhost:8080", and ends up in the report header.
// =============================================================================

use super::PageReport;

/// Page reports from one crawl, in the order the pages were visited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainReport {
    /// Authority of the seed URL as typed, e.g. "example.com" or "localhost:8080".
    pub label: String,
    pub pages: Vec<PageReport>,
}

impl DomainReport {
    pub fn new(label: impl Into<String>) -> Self {
        DomainReport {
            label: label.into(),
            pages: Vec::new(),
        }
    }

    pub fn push(&mut self, page: PageReport) {
        self.pages.push(page);
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// One text block per page, ready for export.
    pub fn blocks(&self) -> Vec<String> {
        self.pages.iter().map(PageReport::render_for_domain).collect()
    }
}
