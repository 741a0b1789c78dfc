pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

use crate::results::WordFrequencies;
use serde::{Deserialize, Serialize};

/// How the visible text of a page is recovered before tokenizing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextExtraction {
    /// Re-serialize the parsed document and blank out every `<...>` span.
    /// Script and style bodies survive as text.
    #[default]
    Markup,
    /// Join the parser's text nodes, skipping script-like elements
    TextNodes,
}

/// Main parser that dispatches to the text extraction strategy
pub struct Parser;

impl Parser {
    /// Recover the text of an HTML page using the given strategy
    pub fn page_text(html: &str, extraction: TextExtraction) -> String {
        match extraction {
            TextExtraction::Markup => text::strip_tags(&html::serialize(html)),
            TextExtraction::TextNodes => html::visible_text(html),
        }
    }

    /// Count the words of an HTML page
    pub fn word_frequencies(html: &str, extraction: TextExtraction) -> WordFrequencies {
        let table = text::count_words(&Self::page_text(html, extraction));
        ::log::debug!(
            "Counted {} words ({} distinct) using {:?} extraction",
            table.total(),
            table.len(),
            extraction
        );
        table
    }
}
