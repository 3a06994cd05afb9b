// src/extract/section.rs
// =============================================================================
// Locates a named section of a page.
//
// How it works:
// 1. Normalize the requested title
// 2. Walk every <h1>..<h6> in document order; the first one whose normalized
//    text matches is the anchor (later duplicates are never considered)
// 3. Walk the anchor's following sibling elements, collecting the text of
//    <p>, <div>, <span> and <li>, until the next heading of any level
// 4. Join the collected fragments with single spaces
//
// A heading immediately followed by another heading gives an empty string.
// That means "no content", which is not the same as "not found".
// =============================================================================

use scraper::{ElementRef, Html};
use thiserror::Error;

use super::normalize::normalize;
use super::text::element_text;

/// Sibling elements whose text belongs to a section.
const CONTENT_ELEMENTS: &[&str] = &["p", "div", "span", "li"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("section \"{title}\" not found")]
    SectionNotFound { title: String },
}

/// Returns the text between the heading titled `section_title` and the next heading.
pub fn extract_section_text(html: &str, section_title: &str) -> Result<String, ExtractError> {
    let document = Html::parse_document(html);
    let wanted = normalize(section_title);

    let anchor = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| is_heading(el.value().name()))
        .find(|heading| normalize(&heading.text().collect::<String>()) == wanted)
        .ok_or_else(|| ExtractError::SectionNotFound {
            title: section_title.to_string(),
        })?;

    let mut content = Vec::new();
    for sibling in anchor.next_siblings().filter_map(ElementRef::wrap) {
        let name = sibling.value().name();
        if is_heading(name) {
            break;
        }
        if CONTENT_ELEMENTS.contains(&name) {
            content.push(element_text(sibling));
        }
    }

    Ok(content.join(" "))
}

// h1 through h6
fn is_heading(name: &str) -> bool {
    matches!(name.as_bytes(), [b'h', b'1'..=b'6'])
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is ElementRef::wrap?
//    - A scraper tree holds every node: elements, text, comments
//    - wrap() returns Some only for elements, so filter_map(ElementRef::wrap)
//      keeps the elements and drops everything else
//
// 2. Why next_siblings() and not the heading's children?
//    - In most HTML a heading does not contain its section, it is followed by it
//    - <h2>Intro</h2><p>...</p><p>...</p><h2>Next</h2> is one flat list of
//      siblings, and the section is the run between the two headings
//
// 3. Why matches! on bytes in is_heading?
//    - Tag names from html5ever are already lowercase ASCII
//    - The slice pattern [b'h', b'1'..=b'6'] checks length and both bytes at once
// -----------------------------------------------------------------------------
