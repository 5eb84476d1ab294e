//! Lowercase char filter implementation.

use super::CharFilter;

/// A char filter that lowercases the entire input string.
///
/// Runs first in the pipeline so every later stage — slang lookup, stopword
/// lookup, the alphabetic filter — only ever sees lowercased text.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
