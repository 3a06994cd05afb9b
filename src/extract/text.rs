// src/extract/text.rs
// =============================================================================
// Flattens HTML into plain text.
//
// Each text node is trimmed, empty nodes are dropped and the rest are joined
// with single spaces. Text inside <script>, <style> and <template> is never
// visible on the page, so it is skipped. <noscript> text is kept: it is what
// a reader without scripts sees. Comments are not text nodes
// and never show up.
//
// scraper (html5ever) is permissive: malformed markup still produces a tree,
// and the worst case is an empty string.
// =============================================================================

use scraper::{ElementRef, Html, Node};

/// Elements whose text content is not rendered.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Extracts all visible text of a document, whitespace-joined and trimmed.
pub fn extract_full_page_text(html: &str) -> String {
    let document = Html::parse_document(html);
    element_text(document.root_element())
}

/// Visible text of one element's subtree, joined the same way as a full page.
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut fragments: Vec<&str> = Vec::new();

    for node in element.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            fragments.push(trimmed);
        }
    }

    fragments.join(" ")
}
