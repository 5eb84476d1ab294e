//! Stemming token filter implementation.

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::lexicon::Lexicon;

/// Filter that stems each token independently, preserving stream order.
pub struct StemFilter {
    lexicon: Arc<Lexicon>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter").finish()
    }
}

impl StemFilter {
    /// Create a stem filter over the lexicon's stemmer.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        StemFilter { lexicon }
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmed: Vec<Token> = tokens
            .map(|token| {
                let root = self.lexicon.stem(&token.text);
                token.with_text(root)
            })
            .collect();

        Ok(Box::new(stemmed.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::new(Arc::new(Lexicon::indonesian()));
        let tokens = vec![
            Token::new("membantu", 0),
            Token::new("aplikasinya", 1),
            Token::new("bagus", 2),
        ];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "bantu");
        assert_eq!(result[1].text, "aplikasi");
        assert_eq!(result[2].text, "bagus");
        // Positions are preserved.
        assert_eq!(result[1].position, 1);
    }
}
