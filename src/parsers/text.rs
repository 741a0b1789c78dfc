use crate::results::WordFrequencies;
use regex::Regex;
use std::sync::OnceLock;

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static WORD_REGEX: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| Regex::new(r"<[^<]+?>").unwrap())
}

fn word_regex() -> &'static Regex {
    WORD_REGEX.get_or_init(|| Regex::new(r"\b\w+\b").unwrap())
}

/// Replaces every tag-delimited span with a single space.
///
/// This works on markup text, so attribute values inside a tag disappear with it but
/// anything between tags (including script bodies) is kept.
pub fn strip_tags(markup: &str) -> String {
    tag_regex().replace_all(markup, " ").into_owned()
}

/// Lowercased word tokens of `text` in order.
///
/// A token is a maximal run of word characters (letters, digits, underscore).
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.trim().to_lowercase();

    word_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Case-insensitive word frequency table of `text`
pub fn count_words(text: &str) -> WordFrequencies {
    tokenize(text).iter().map(String::as_str).collect()
}

/// Collapses runs of whitespace into single spaces
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
