use crate::filter::ResourceFilter;
use scraper::{Html, Node, Selector};
use std::sync::OnceLock;

static SRC_SELECTOR: OnceLock<Selector> = OnceLock::new();
static LINK_SELECTOR: OnceLock<Selector> = OnceLock::new();

/// Elements whose text never renders
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

fn src_selector() -> &'static Selector {
    SRC_SELECTOR.get_or_init(|| Selector::parse("[src]").unwrap())
}

fn link_selector() -> &'static Selector {
    LINK_SELECTOR.get_or_init(|| Selector::parse("a[href]").unwrap())
}

/// Every `src` attribute value in document order, duplicates included
pub fn resource_sources(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);

    doc.select(src_selector())
        .filter_map(|e| e.value().attr("src"))
        .map(|s| s.to_string())
        .collect()
}

/// The `src` values of a page that are served from another network location than
/// `base_url`, verbatim and in document order
pub fn external_resources(html: &str, base_url: &str) -> Vec<String> {
    let filter = ResourceFilter::new(base_url);
    let sources = resource_sources(html);
    let total = sources.len();

    let external = sources
        .into_iter()
        .filter(|src| filter.is_external(src))
        .collect::<Vec<String>>();

    ::log::debug!(
        "HTML parser found {} resources, {} external to {}",
        total,
        external.len(),
        filter.base_location()
    );
    external
}

/// The first hyperlink target that contains `phrase`, ignoring case.
///
/// Later links are never looked at, even if they match better.
pub fn first_link_containing(html: &str, phrase: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let needle = phrase.to_lowercase();

    let found = doc
        .select(link_selector())
        .filter_map(|e| e.value().attr("href"))
        .find(|href| href.to_lowercase().contains(&needle))
        .map(|s| s.to_string());

    if let Some(href) = &found {
        ::log::debug!("Link matching {:?}: {}", phrase, href);
    }
    found
}

/// Parse a document and render it back to markup, letting the parser repair it.
///
/// Non-breaking spaces stay literal characters rather than `&nbsp;` entities, so they
/// separate words instead of becoming text of their own.
pub fn serialize(html: &str) -> String {
    Html::parse_document(html).html().replace("&nbsp;", "\u{a0}")
}

/// Text nodes of the document outside script-like elements, space separated
pub fn visible_text(html: &str) -> String {
    let doc = Html::parse_document(html);

    let text = doc
        .tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some((node, text)),
            _ => None,
        })
        .filter(|(node, _)| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
            })
        })
        .map(|(_, text)| &**text)
        .collect::<Vec<_>>()
        .join(" ");

    super::text::normalize_whitespace(&text)
}
