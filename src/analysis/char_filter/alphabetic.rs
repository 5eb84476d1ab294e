//! Alphabetic char filter implementation.

use super::CharFilter;

/// A char filter that keeps only lowercase Latin letters and whitespace,
/// replacing every other character with a single space.
///
/// This removes digits, punctuation, and any residual symbols in one pass.
/// It is idempotent: running it on its own output is a no-op. Non-Latin
/// scripts are silently discarded — a deliberate lossy choice for
/// Latin-script Indonesian, inherited from the stage ordering (it runs after
/// lowercasing, so uppercase letters never reach it in the default
/// configuration).
#[derive(Clone, Debug, Default)]
pub struct AlphabeticCharFilter;

impl AlphabeticCharFilter {
    /// Create a new alphabetic char filter.
    pub fn new() -> Self {
        AlphabeticCharFilter
    }
}

impl CharFilter for AlphabeticCharFilter {
    fn filter(&self, input: &str) -> String {
        input
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}
