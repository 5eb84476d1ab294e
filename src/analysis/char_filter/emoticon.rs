//! Emoticon mapping char filter implementation.

use aho_corasick::{AhoCorasick, MatchKind};

use super::CharFilter;
use crate::error::{Result, SentimenError};

/// A char filter that replaces literal ASCII emoticons with sentiment words.
///
/// Replacements are padded with spaces on both sides so the inserted word can
/// never merge with adjacent tokens (`":(ok"` becomes `" sedih ok"`, not
/// `"sedihok"`). Matching is leftmost-longest, so `":-("` wins over a `":-"`
/// prefix colliding with a shorter key.
pub struct EmoticonMapCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl std::fmt::Debug for EmoticonMapCharFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmoticonMapCharFilter")
            .field("patterns", &self.replacements.len())
            .finish()
    }
}

impl EmoticonMapCharFilter {
    /// Build a filter from ordered (emoticon, word) pairs.
    pub fn new(table: &[(String, String)]) -> Result<Self> {
        let patterns: Vec<&str> = table.iter().map(|(k, _)| k.as_str()).collect();
        let replacements: Vec<String> = table.iter().map(|(_, v)| format!(" {v} ")).collect();

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| SentimenError::analysis(format!("invalid emoticon table: {e}")))?;

        Ok(EmoticonMapCharFilter { ac, replacements })
    }
}

impl CharFilter for EmoticonMapCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }
        output.push_str(&input[last_match_end..]);

        output
    }

    fn name(&self) -> &'static str {
        "emoticon_map"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn filter() -> EmoticonMapCharFilter {
        EmoticonMapCharFilter::new(Lexicon::indonesian().emoticons()).unwrap()
    }

    #[test]
    fn test_map_happy_emoticon() {
        assert_eq!(filter().filter(":) bagus"), " senang  bagus");
    }

    #[test]
    fn test_map_sad_emoticon_longest_match() {
        // ":-(" must not match as ":-" + "(" or split into a shorter key.
        assert_eq!(filter().filter("error terus :-("), "error terus  sedih ");
    }

    #[test]
    fn test_padding_prevents_merging() {
        assert_eq!(filter().filter(":(ok"), " sedih ok");
    }

    #[test]
    fn test_no_emoticon() {
        assert_eq!(filter().filter("tidak ada"), "tidak ada");
    }
}
