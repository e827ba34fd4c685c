//! Shared text helpers: word counting, numeric tokens, markup stripping.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?%?").expect("number pattern is valid"));

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("italic pattern"));
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6}\s+").expect("heading pattern"));
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[-*]\s+").expect("bullet pattern"));

/// Whitespace-delimited token count.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Numeric tokens (integers, decimals, percentages) as literal strings.
///
/// `"3.0"` and `"3"` are distinct tokens; no normalization is applied.
pub fn extract_numbers(text: &str) -> BTreeSet<String> {
    NUMBER_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Removes leftover markdown (bold, italic, headings, bullets) and trims.
pub fn strip_markup(text: &str) -> String {
    let text = BOLD.replace_all(text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = HEADING.replace_all(&text, "");
    let text = BULLET.replace_all(&text, "");
    text.trim().to_string()
}

/// Lowercases and trims an entity span for set comparison.
pub fn normalize_entity(span: &str) -> String {
    span.trim().to_lowercase()
}

/// Rounds to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
