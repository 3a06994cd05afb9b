// src/extract/mod.rs
// =============================================================================
// Content extraction from fetched HTML.
//
// Submodules:
// - normalize: comparison keys for heading titles
// - section: text of one named section of a page
// - text: visible text of a whole page (or one element)
// - links: absolute anchor targets for the crawler
// =============================================================================

mod links;
mod normalize;
mod section;
mod text;

pub use links::extract_links;
pub use section::{extract_section_text, ExtractError};
pub use text::extract_full_page_text;
