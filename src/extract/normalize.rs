// src/extract/normalize.rs
// =============================================================================
// Normalizes heading titles so "Getting Started!" and "getting-started" compare
// equal.
//
// Rule: lowercase, then drop every character that is not a letter, digit or
// underscore. Lowercasing first matters: some letters lowercase to a letter
// plus a combining mark ("İ" becomes "i\u{307}"), and the mark must go too. Letters and digits are Unicode-aware, so "Café" keeps
// its accent.
// =============================================================================

/// Returns the comparison key for a heading or a requested section title.
///
/// Total over any input, and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
