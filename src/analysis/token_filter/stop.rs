//! Stopword removal filter implementation.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::lexicon::Lexicon;

/// A filter that removes stopwords from the token stream.
///
/// A token is dropped when it appears in the lexicon's stopword set or in an
/// optional caller-supplied extra set. Lookup assumes already-lowercased
/// tokens, which the pipeline guarantees by running the lowercase stage
/// first.
pub struct StopFilter {
    lexicon: Arc<Lexicon>,
    extra: Option<BTreeSet<String>>,
}

impl std::fmt::Debug for StopFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopFilter")
            .field("extra", &self.extra.as_ref().map(|s| s.len()))
            .finish()
    }
}

impl StopFilter {
    /// Create a stop filter over the lexicon's default stopword set.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        StopFilter {
            lexicon,
            extra: None,
        }
    }

    /// Add a caller-supplied extra stopword set.
    pub fn with_extra(mut self, extra: BTreeSet<String>) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Check if a token is a stopword under this filter.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.lexicon.is_stopword(token)
            || self
                .extra
                .as_ref()
                .is_some_and(|extra| extra.contains(token))
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<Token> = tokens
            .filter(|token| !self.is_stopword(&token.text))
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
