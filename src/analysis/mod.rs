//! Text analysis pipeline.
//!
//! Raw review text flows through char filters, a tokenizer, and token
//! filters to become a canonical token string:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → joined tokens
//! ```
//!
//! [`normalizer::TextNormalizer`] assembles the whole pipeline from a
//! [`normalizer::NormalizerConfig`] and a shared [`crate::lexicon::Lexicon`].

pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use normalizer::{NormalizerConfig, TextNormalizer};
