//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw string before it reaches the tokenizer.
//! Every stage of the normalization pipeline that operates on the whole
//! string — lowercasing, URL and markup stripping, emoticon mapping, emoji
//! removal, slang normalization, non-alphabetic filtering — is a char
//! filter. Filters are pure: the same input always produces the same output.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - lowercase the whole string
//! - [`url_strip::UrlStripCharFilter`] - replace URLs with a space
//! - [`markup_strip::MarkupStripCharFilter`] - replace `<...>` tags with a space
//! - [`emoticon::EmoticonMapCharFilter`] - replace ASCII emoticons with padded sentiment words
//! - [`emoji_strip::EmojiStripCharFilter`] - replace emoji and other non-ASCII with a space
//! - [`slang::SlangNormalizeCharFilter`] - canonicalize informal whole tokens
//! - [`alphabetic::AlphabeticCharFilter`] - keep only lowercase Latin letters and whitespace

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the rewritten string.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod alphabetic;
pub mod emoji_strip;
pub mod emoticon;
pub mod lowercase;
pub mod markup_strip;
pub mod slang;
pub mod url_strip;
