//! URL stripping char filter implementation.

use std::sync::LazyLock;

use regex::Regex;

use super::CharFilter;

/// Matches `http://...`, `https://...`, and bare `www.` URLs up to the next
/// whitespace.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\.\S+").expect("url pattern is valid"));

/// A char filter that replaces URLs with a single space.
#[derive(Clone, Debug, Default)]
pub struct UrlStripCharFilter;

impl UrlStripCharFilter {
    /// Create a new URL stripping char filter.
    pub fn new() -> Self {
        UrlStripCharFilter
    }
}

impl CharFilter for UrlStripCharFilter {
    fn filter(&self, input: &str) -> String {
        URL_PATTERN.replace_all(input, " ").into_owned()
    }

    fn name(&self) -> &'static str {
        "url_strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_http_url() {
        let filter = UrlStripCharFilter::new();
        assert_eq!(
            filter.filter("cek http://example.com/a?b=1 bagus"),
            "cek   bagus"
        );
    }

    #[test]
    fn test_strip_www_url() {
        let filter = UrlStripCharFilter::new();
        assert_eq!(filter.filter("lihat www.example.com sekarang"), "lihat   sekarang");
    }

    #[test]
    fn test_no_url() {
        let filter = UrlStripCharFilter::new();
        assert_eq!(filter.filter("tidak ada tautan"), "tidak ada tautan");
    }
}
