//! Text normalization that runs once when a sample is constructed.
//!
//! The pipeline turns raw element markup into plain prose with uniform
//! sentence terminators so the counting heuristics stay simple: closing
//! block tags become full stops, pause punctuation becomes spaces, and
//! `!`/`?` collapse into `.`.

use once_cell::sync::Lazy;
use regex::Regex;

// Closing one of the scanned block tags ends a sentence.
static BLOCK_CLOSERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</(?:h[1-6]|p|li|dd)\s*>").expect("valid pattern"));
static MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid pattern"));
static PAUSE_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[,;:()\[\]"\-—–]"#).expect("valid pattern"));
static TERMINATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid pattern"));
static DUPLICATE_STOPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(?:\s*\.)+").expect("valid pattern"));
static STOP_PADDING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\.\s*").expect("valid pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid pattern"));

/// Normalize raw element content into scoreable prose.
///
/// Non-empty output always carries a trailing terminator, so the sentence
/// count of any text with at least one word is at least one.
pub fn clean_text(raw: &str) -> String {
    let text = BLOCK_CLOSERS.replace_all(raw, ". ");
    let text = MARKUP.replace_all(&text, " ");
    let text = html_escape::decode_html_entities(&text);
    let text = PAUSE_PUNCTUATION.replace_all(&text, " ");
    let text = TERMINATORS.replace_all(&text, ".");
    let text = DUPLICATE_STOPS.replace_all(&text, ".");
    let text = STOP_PADDING.replace_all(&text, ". ");
    let text = WHITESPACE.replace_all(&text, " ");
    let mut text = text.trim().to_string();

    if !text.is_empty() && !text.ends_with('.') {
        text.push('.');
    }
    text
}
