// src/crawl/mod.rs
// =============================================================================
// Same-domain crawling.
//
// Features:
// - Breadth-first traversal starting from one URL
// - Stays on the seed's host and under the seed's URL prefix
// - Bounded by a page count, not by link depth
// - Every page fetched successfully is analyzed into the domain report
//
// Pages are fetched strictly one after another.
// =============================================================================

mod queue;

pub use queue::crawl_domain;
