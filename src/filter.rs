use regex::Regex;
use std::sync::OnceLock;

static NETLOC_REGEX: OnceLock<Regex> = OnceLock::new();

fn netloc_regex() -> &'static Regex {
    NETLOC_REGEX.get_or_init(|| {
        // Optional scheme, then an authority introduced by "//" running up to the path
        Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*:)?//([^/?#]*)").unwrap()
    })
}

/// Returns the network location (`host[:port]`, plus any userinfo) of a URL exactly as
/// written.
///
/// Nothing is normalized: case, default ports and trailing dots are kept, so
/// `https://Example.com:443/` and `https://example.com/` have different locations.
/// URLs without an authority (`/local.png`, `img/a.png`, `data:...`) yield `""`.
pub fn network_location(url: &str) -> &str {
    netloc_regex()
        .captures(url.trim_start())
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}

/// Whether `candidate_url` is loaded from a different network location than `base_url`.
///
/// The candidate is compared raw, without resolving it against the base. A candidate
/// that carries no network location of its own is served by the base host and is never
/// external.
pub fn is_external(candidate_url: &str, base_url: &str) -> bool {
    ResourceFilter::new(base_url).is_external(candidate_url)
}

/// Classifies resource URLs against a fixed base page
#[derive(Debug, Clone)]
pub struct ResourceFilter {
    base_location: String,
}

impl ResourceFilter {
    /// Create a filter for resources referenced by `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_location: network_location(base_url).to_string(),
        }
    }

    /// Network location every internal resource shares
    pub fn base_location(&self) -> &str {
        &self.base_location
    }

    /// Determine if a resource URL points at another network location
    pub fn is_external(&self, candidate_url: &str) -> bool {
        let location = network_location(candidate_url);
        let external = !location.is_empty() && location != self.base_location;
        ::log::trace!(
            "Resource {} has location {:?} ({})",
            candidate_url,
            location,
            if external { "external" } else { "internal" }
        );
        external
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_location() {
        assert_eq!(
            network_location("https://cdn.example.com/a.png"),
            "cdn.example.com"
        );
        assert_eq!(
            network_location("http://user@host.example:8080/path?q=1"),
            "user@host.example:8080"
        );
        assert_eq!(network_location("//fonts.gstatic.com/s/font.woff2"), "fonts.gstatic.com");
        assert_eq!(network_location("https://example.com?x=1"), "example.com");
        assert_eq!(network_location("https://example.com#top"), "example.com");
        assert_eq!(network_location("  https://example.com/"), "example.com");
    }

    #[test]
    fn test_relative_urls_have_no_location() {
        assert_eq!(network_location("/local.png"), "");
        assert_eq!(network_location("img/logo.svg"), "");
        assert_eq!(network_location("data:image/png;base64,AAAA"), "");
        assert_eq!(network_location("mailto:someone@example.com"), "");
        assert_eq!(network_location(""), "");
    }

    #[test]
    fn test_external_resources() {
        let base = "https://cfcunderwriting.com/";
        assert!(is_external("https://cdn.example.com/a.png", base));
        assert!(is_external("//cdn.example.com/a.js", base));
        assert!(!is_external("https://cfcunderwriting.com/img/a.png", base));
        assert!(!is_external("http://cfcunderwriting.com/img/a.png", base));
        assert!(!is_external("/local.png", base));
    }

    #[test]
    fn test_comparison_is_literal() {
        let base = "https://www.cfcunderwriting.com/";

        // No www folding, case folding or default port stripping
        assert!(is_external("https://cfcunderwriting.com/a.png", base));
        assert!(is_external("https://WWW.cfcunderwriting.com/a.png", base));
        assert!(is_external("https://www.cfcunderwriting.com:443/a.png", base));
    }

    #[test]
    fn test_filter_reuses_base_location() {
        let filter = ResourceFilter::new("https://cfcunderwriting.com/en/");
        assert_eq!(filter.base_location(), "cfcunderwriting.com");
        assert!(filter.is_external("https://www.googletagmanager.com/gtm.js"));
        assert!(!filter.is_external("https://cfcunderwriting.com/app.js"));
    }
}
