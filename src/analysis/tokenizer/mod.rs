//! Tokenizer trait and implementations.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that split text into a token stream.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the input text.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
