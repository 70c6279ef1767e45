//! Text helpers for turning field keys into display strings and ids.
//!
//! ```
//! use facetlight_core::util::text::{humanize, parameterize};
//!
//! assert_eq!(humanize("subject_topic_facet"), "Subject topic facet");
//! assert_eq!(parameterize("Publication Year"), "publication-year");
//! ```

/// Convert a field name into a human-readable label.
///
/// Performs the following transformations:
/// 1. Drops a trailing `_id` suffix
/// 2. Replaces underscores with spaces and collapses whitespace
/// 3. Lowercases everything, then capitalizes the first character
pub fn humanize(name: &str) -> String {
    let name = name.strip_suffix("_id").unwrap_or(name);
    let words = name
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase();

    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a key into a string safe for use in element ids and URLs.
///
/// Keeps ASCII alphanumerics, `-`, and `_`; every other run of characters
/// becomes a single `-`. Leading and trailing separators are dropped.
pub fn parameterize(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut pending_sep = false;

    for c in key.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    out.trim_matches('-').to_string()
}

/// Escape a string for inclusion in HTML text or attribute values.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
