//! Whitespace normalization utilities.
//!
//! Recipe inputs arrive from free-text forms, so ingredient names regularly
//! carry tabs, doubled spaces and non-breaking spaces copied from web pages.
//! [`collapse_whitespace`] folds any Unicode whitespace run into one ASCII
//! space and drops leading and trailing whitespace.
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  olive \t  oil "), "olive oil");
//! ```

/// Collapses repeated whitespace, trims edges, and normalizes newlines to
/// single spaces.
///
/// Returns an empty string when the input is empty or whitespace-only.
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("red\u{00A0}onion"), "red onion");
/// assert_eq!(collapse_whitespace("   \n\t  "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
