//! Token filter trait and implementations.
//!
//! Token filters transform the token stream produced by the tokenizer:
//! removing stopwords, stemming, and so on. They run in the order the
//! normalizer adds them, which is a correctness invariant — stopword removal
//! must precede stemming so stopword lookup sees surface forms.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for token filters in the analysis pipeline.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}

pub mod stem;
pub mod stop;

pub use stem::StemFilter;
pub use stop::StopFilter;
