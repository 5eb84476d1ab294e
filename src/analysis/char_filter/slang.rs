//! Slang normalization char filter implementation.

use std::sync::Arc;

use super::CharFilter;
use crate::lexicon::Lexicon;

/// A char filter that rewrites informal whole tokens to their canonical
/// forms via the lexicon's slang table.
///
/// Runs before the alphabetic filter, which is an ordering invariant:
/// abbreviations like `gk` must become the real word `tidak` while their
/// letters still exist, otherwise punctuation-adjacent slang would be
/// mangled and its semantic contribution lost. Lookup is exact per
/// whitespace-separated token; replacements may expand to several words
/// (`mksh` → `terima kasih`).
pub struct SlangNormalizeCharFilter {
    lexicon: Arc<Lexicon>,
}

impl std::fmt::Debug for SlangNormalizeCharFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlangNormalizeCharFilter").finish()
    }
}

impl SlangNormalizeCharFilter {
    /// Create a new slang normalization filter over the given lexicon.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        SlangNormalizeCharFilter { lexicon }
    }
}

impl CharFilter for SlangNormalizeCharFilter {
    fn filter(&self, input: &str) -> String {
        input
            .split_whitespace()
            .map(|token| self.lexicon.slang_lookup(token).unwrap_or(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn name(&self) -> &'static str {
        "slang_normalize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> SlangNormalizeCharFilter {
        SlangNormalizeCharFilter::new(Arc::new(Lexicon::indonesian()))
    }

    #[test]
    fn test_whole_token_replacement() {
        assert_eq!(filter().filter("gk ngerti"), "tidak ngerti");
    }

    #[test]
    fn test_multi_word_expansion() {
        assert_eq!(filter().filter("mksh banyak"), "terima kasih banyak");
    }

    #[test]
    fn test_no_partial_match() {
        // "gkx" is not "gk"; exact token lookup only.
        assert_eq!(filter().filter("gkx"), "gkx");
    }
}
