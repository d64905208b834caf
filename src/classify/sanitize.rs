//! Category answer sanitization
//!
//! Model answers arrive as free text ("  food.\nsure, here's why..."). The
//! sanitizer reduces an answer to a single title-cased token before matching
//! it against the fixed category allow-list.

use once_cell::sync::Lazy;
use regex::Regex;

/// Categories an image may be assigned
pub const CATEGORIES: &[&str] = &[
    "Animals",
    "Architecture",
    "Art",
    "Food",
    "Landscape",
    "Nature",
    "People",
    "Technology",
    "Vehicles",
    "Other",
];

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[[:punct:]]").unwrap());

/// Reduce a raw model answer to a single candidate category token
///
/// Steps: trim surrounding whitespace, strip punctuation, keep the first
/// line, keep the first whitespace-delimited token, title-case it.
pub fn sanitize_category(raw: &str) -> String {
    let stripped = PUNCTUATION.replace_all(raw.trim(), "");
    let token = stripped
        .lines()
        .next()
        .unwrap_or("")
        .split_whitespace()
        .next()
        .unwrap_or("");
    title_case(token)
}

/// Sanitize an answer and match it against the allow-list
pub fn match_category(raw: &str) -> Option<&'static str> {
    let candidate = sanitize_category(raw);
    CATEGORIES.iter().copied().find(|name| *name == candidate)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
