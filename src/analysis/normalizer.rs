//! Text normalization pipeline.
//!
//! [`TextNormalizer`] turns noisy, informal review text into a canonical
//! whitespace-joined token string by running a fixed sequence of stages:
//!
//! 1. lowercase
//! 2. URL stripping
//! 3. markup stripping
//! 4. emoticon mapping
//! 5. emoji / non-ASCII stripping
//! 6. slang normalization
//! 7. non-alphabetic filtering
//! 8. whitespace collapse (empty result short-circuits)
//! 9. whitespace tokenization
//! 10. stopword removal
//! 11. stemming
//! 12. single-space join
//!
//! The stage order is a correctness invariant: slang normalization must
//! precede the alphabetic filter so abbreviations become real words before
//! punctuation filtering, and lowercasing must come first so every lookup
//! table only deals with lowercased text. Each stage can be toggled off via
//! [`NormalizerConfig`], but enabled stages always run in this order.
//!
//! Normalization is a pure function of (text, config, lexicon): the same
//! inputs always produce byte-identical output. A trained model persists its
//! exact [`NormalizerConfig`] so inference reconstructs the identical
//! pipeline.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use sentimen::analysis::normalizer::{NormalizerConfig, TextNormalizer};
//! use sentimen::lexicon::Lexicon;
//!
//! let lexicon = Arc::new(Lexicon::indonesian());
//! let normalizer = TextNormalizer::new(NormalizerConfig::default(), lexicon).unwrap();
//!
//! assert_eq!(normalizer.normalize("Gk bagus :("), "tidak bagus sedih");
//! assert_eq!(normalizer.normalize("12345!!!"), "");
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{
    CharFilter, alphabetic::AlphabeticCharFilter, emoji_strip::EmojiStripCharFilter,
    emoticon::EmoticonMapCharFilter, lowercase::LowercaseCharFilter,
    markup_strip::MarkupStripCharFilter, slang::SlangNormalizeCharFilter,
    url_strip::UrlStripCharFilter,
};
use crate::analysis::token_filter::{Filter, StemFilter, StopFilter};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;
use crate::lexicon::Lexicon;

/// Immutable per-stage configuration for the normalization pipeline.
///
/// The default enables every stage with no extra stopwords. A snapshot of
/// this value is persisted inside every trained artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Lowercase the entire string.
    pub lowercase: bool,
    /// Strip `http(s)://` and `www.` URLs.
    pub strip_urls: bool,
    /// Strip `<...>` markup tags.
    pub strip_markup: bool,
    /// Replace ASCII emoticons with padded sentiment words.
    pub map_emoticons: bool,
    /// Strip emoji and other non-ASCII characters.
    pub strip_emoji: bool,
    /// Canonicalize informal whole tokens via the slang table.
    pub normalize_slang: bool,
    /// Keep only lowercase Latin letters and whitespace.
    pub strip_non_alphabetic: bool,
    /// Drop stopwords (lexicon set plus `extra_stopwords`).
    pub remove_stopwords: bool,
    /// Stem each remaining token.
    pub stem: bool,
    /// Caller-supplied additional stopwords.
    pub extra_stopwords: Option<BTreeSet<String>>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        NormalizerConfig {
            lowercase: true,
            strip_urls: true,
            strip_markup: true,
            map_emoticons: true,
            strip_emoji: true,
            normalize_slang: true,
            strip_non_alphabetic: true,
            remove_stopwords: true,
            stem: true,
            extra_stopwords: None,
        }
    }
}

/// The text normalization pipeline: char filters, then the tokenizer, then
/// token filters, assembled once from a [`NormalizerConfig`] and a shared
/// [`Lexicon`].
pub struct TextNormalizer {
    config: NormalizerConfig,
    char_filters: Vec<Box<dyn CharFilter>>,
    tokenizer: WhitespaceTokenizer,
    filters: Vec<Box<dyn Filter>>,
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl TextNormalizer {
    /// Assemble the pipeline for the given configuration and lexicon.
    pub fn new(config: NormalizerConfig, lexicon: Arc<Lexicon>) -> Result<Self> {
        let mut char_filters: Vec<Box<dyn CharFilter>> = Vec::new();

        if config.lowercase {
            char_filters.push(Box::new(LowercaseCharFilter::new()));
        }
        if config.strip_urls {
            char_filters.push(Box::new(UrlStripCharFilter::new()));
        }
        if config.strip_markup {
            char_filters.push(Box::new(MarkupStripCharFilter::new()));
        }
        if config.map_emoticons {
            char_filters.push(Box::new(EmoticonMapCharFilter::new(lexicon.emoticons())?));
        }
        if config.strip_emoji {
            char_filters.push(Box::new(EmojiStripCharFilter::new()));
        }
        if config.normalize_slang {
            char_filters.push(Box::new(SlangNormalizeCharFilter::new(Arc::clone(
                &lexicon,
            ))));
        }
        if config.strip_non_alphabetic {
            char_filters.push(Box::new(AlphabeticCharFilter::new()));
        }

        let mut filters: Vec<Box<dyn Filter>> = Vec::new();

        if config.remove_stopwords {
            let mut stop = StopFilter::new(Arc::clone(&lexicon));
            if let Some(extra) = &config.extra_stopwords {
                stop = stop.with_extra(extra.clone());
            }
            filters.push(Box::new(stop));
        }
        if config.stem {
            filters.push(Box::new(StemFilter::new(Arc::clone(&lexicon))));
        }

        Ok(TextNormalizer {
            config,
            char_filters,
            tokenizer: WhitespaceTokenizer::new(),
            filters,
        })
    }

    /// Assemble the default all-stages-on pipeline.
    pub fn with_defaults(lexicon: Arc<Lexicon>) -> Result<Self> {
        Self::new(NormalizerConfig::default(), lexicon)
    }

    /// The configuration this pipeline was assembled from.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize raw text into a canonical space-joined token string.
    ///
    /// Never fails: inputs with no usable content (empty, whitespace-only,
    /// no letters after filtering) produce the empty string.
    pub fn normalize(&self, text: &str) -> String {
        self.run(text).unwrap_or_default()
    }

    /// Normalize optional text; `None` behaves like the empty string, so
    /// null-like inputs never reach downstream stages.
    pub fn normalize_opt(&self, text: Option<&str>) -> String {
        match text {
            Some(text) => self.normalize(text),
            None => String::new(),
        }
    }

    fn run(&self, text: &str) -> Result<String> {
        let mut filtered = text.to_string();
        for char_filter in &self.char_filters {
            filtered = char_filter.filter(&filtered);
        }

        // Whitespace collapse happens through tokenize-and-join; an input
        // reduced to whitespace short-circuits here.
        if filtered.split_whitespace().next().is_none() {
            return Ok(String::new());
        }

        let mut tokens = self.tokenizer.tokenize(&filtered)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        let words: Vec<String> = tokens.map(|token| token.text).collect();
        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::with_defaults(Arc::new(Lexicon::indonesian())).unwrap()
    }

    #[test]
    fn test_determinism() {
        let n = normalizer();
        let text = "Gk ngerti pakai ini, error terus :(";
        assert_eq!(n.normalize(text), n.normalize(text));
    }

    #[test]
    fn test_empty_inputs() {
        let n = normalizer();
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.normalize("   \t\n"), "");
        assert_eq!(n.normalize("12345!!!"), "");
        assert_eq!(n.normalize_opt(None), "");
    }

    #[test]
    fn test_slang_before_alphabetic_filter() {
        // "gk" must be rewritten to the real word "tidak" before the
        // alphabetic filter runs; "tidak" is a dictionary root, so stemming
        // leaves it intact.
        let n = normalizer();
        let out = n.normalize("gk ngerti");
        assert!(
            out.split(' ').any(|t| t == "tidak"),
            "expected token \"tidak\" in {out:?}"
        );
    }

    #[test]
    fn test_emoticon_mapping() {
        let n = normalizer();
        let out = n.normalize(":) bagus");
        assert!(
            out.split(' ').any(|t| t == "senang"),
            "expected token \"senang\" in {out:?}"
        );
        assert!(out.split(' ').any(|t| t == "bagus"));
    }

    #[test]
    fn test_url_and_markup_stripping() {
        let n = normalizer();
        let out = n.normalize("<b>Aplikasi</b> bagus http://contoh.com/x?y=1");
        assert_eq!(out, "aplikasi bagus");
    }

    #[test]
    fn test_stopword_removal_and_stemming() {
        let n = normalizer();
        let out = n.normalize("Aplikasi ini sangat membantu, respons cepat dan akurat");
        assert_eq!(out, "aplikasi sangat bantu respons cepat akurat");
    }

    #[test]
    fn test_negative_review_scenario() {
        let n = normalizer();
        let out = n.normalize("Gk ngerti pakai ini, error terus :(");
        let tokens: Vec<&str> = out.split(' ').collect();
        assert!(tokens.contains(&"tidak"));
        assert!(tokens.contains(&"sedih"));
        assert!(tokens.contains(&"error"));
        assert!(!tokens.contains(&"ini"));
    }

    #[test]
    fn test_emoji_stripped() {
        let n = normalizer();
        let out = n.normalize("Saya suka aplikasi 😊 mantap!");
        assert!(out.split(' ').all(|t| t.is_ascii()));
        assert!(out.split(' ').any(|t| t == "mantap"));
    }

    #[test]
    fn test_extra_stopwords() {
        let extra: BTreeSet<String> = ["aplikasi".to_string()].into_iter().collect();
        let config = NormalizerConfig {
            extra_stopwords: Some(extra),
            ..NormalizerConfig::default()
        };
        let n = TextNormalizer::new(config, Arc::new(Lexicon::indonesian())).unwrap();
        let out = n.normalize("aplikasi bagus");
        assert_eq!(out, "bagus");
    }

    #[test]
    fn test_stages_can_be_disabled() {
        let config = NormalizerConfig {
            remove_stopwords: false,
            stem: false,
            ..NormalizerConfig::default()
        };
        let n = TextNormalizer::new(config, Arc::new(Lexicon::indonesian())).unwrap();
        assert_eq!(n.normalize("Aplikasi ini membantu"), "aplikasi ini membantu");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = NormalizerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: NormalizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
