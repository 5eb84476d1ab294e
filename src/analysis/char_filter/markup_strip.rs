//! Markup stripping char filter implementation.

use std::sync::LazyLock;

use regex::Regex;

use super::CharFilter;

/// Matches any `<...>` tag, non-greedily.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// A char filter that replaces markup tags with a single space.
///
/// Review text scraped from app stores occasionally carries HTML fragments
/// (`<b>`, `<br>`); this removes them without merging adjacent words.
#[derive(Clone, Debug, Default)]
pub struct MarkupStripCharFilter;

impl MarkupStripCharFilter {
    /// Create a new markup stripping char filter.
    pub fn new() -> Self {
        MarkupStripCharFilter
    }
}

impl CharFilter for MarkupStripCharFilter {
    fn filter(&self, input: &str) -> String {
        TAG_PATTERN.replace_all(input, " ").into_owned()
    }

    fn name(&self) -> &'static str {
        "markup_strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        let filter = MarkupStripCharFilter::new();
        assert_eq!(
            filter.filter("<b>aplikasi</b> bagus"),
            " aplikasi  bagus"
        );
    }

    #[test]
    fn test_no_tags() {
        let filter = MarkupStripCharFilter::new();
        assert_eq!(filter.filter("aplikasi bagus"), "aplikasi bagus");
    }
}
