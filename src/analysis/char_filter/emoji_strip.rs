//! Emoji stripping char filter implementation.

use super::CharFilter;

/// A char filter that replaces pictographic emoji and any other non-ASCII
/// character with a single space.
///
/// Indonesian is written in Latin script, so after emoticon mapping every
/// non-ASCII code point in review text is either an emoji or noise; both are
/// dropped the same way. Runs after [`super::emoticon::EmoticonMapCharFilter`]
/// so mapped sentiment words are already plain ASCII.
#[derive(Clone, Debug, Default)]
pub struct EmojiStripCharFilter;

impl EmojiStripCharFilter {
    /// Create a new emoji stripping char filter.
    pub fn new() -> Self {
        EmojiStripCharFilter
    }
}

impl CharFilter for EmojiStripCharFilter {
    fn filter(&self, input: &str) -> String {
        input
            .chars()
            .map(|c| if c.is_ascii() { c } else { ' ' })
            .collect()
    }

    fn name(&self) -> &'static str {
        "emoji_strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_emoji() {
        let filter = EmojiStripCharFilter::new();
        assert_eq!(filter.filter("mantap 😊 sekali"), "mantap   sekali");
    }

    #[test]
    fn test_strip_other_non_ascii() {
        let filter = EmojiStripCharFilter::new();
        assert_eq!(filter.filter("oké"), "ok ");
    }

    #[test]
    fn test_ascii_untouched() {
        let filter = EmojiStripCharFilter::new();
        assert_eq!(filter.filter("biasa saja"), "biasa saja");
    }
}
