//! Lexical resources for Indonesian text normalization.
//!
//! This module bundles the read-only language data the normalizer depends
//! on: a stopword set, an informal-vocabulary ("slang") table, an ASCII
//! emoticon table, and a morphological stemmer. A [`Lexicon`] is constructed
//! once at process start (typically [`Lexicon::indonesian`]) and shared by
//! every caller behind an `Arc`; nothing in it is mutated after
//! construction, so concurrent use needs no coordination.
//!
//! # Examples
//!
//! ```
//! use sentimen::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::indonesian();
//! assert!(lexicon.is_stopword("yang"));
//! assert_eq!(lexicon.slang_lookup("gk"), Some("tidak"));
//! assert_eq!(lexicon.stem("membantu"), "bantu");
//! ```

pub mod stemmer;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::lexicon::stemmer::{IndonesianStemmer, Stemmer};

/// Default Indonesian stopword list.
///
/// High-frequency function words carried over from the usual Indonesian
/// lists, with one deliberate difference: negation words (`tidak`, `bukan`,
/// `jangan`, `belum`, `kurang`) are excluded because slang normalization
/// rewrites informal negations (`gk` → `tidak`) precisely so they survive
/// into the feature space.
const DEFAULT_INDONESIAN_STOP_WORDS: &[&str] = &[
    "ada", "adalah", "agar", "akan", "anda", "antara", "apa", "apakah", "atau", "bagaimana",
    "bagi", "bahwa", "banyak", "beberapa", "begitu", "bisa", "boleh", "dalam", "dan", "dapat",
    "dari", "daripada", "demi", "demikian", "dengan", "di", "dia", "dimana", "dong", "dua",
    "dulu", "gimana", "hal", "hanya", "harus", "ia", "ini", "itu", "itulah", "iya", "jika",
    "juga", "kalau", "kami", "kamu", "kapan", "karena", "ke", "kecuali", "kemana", "kembali",
    "kenapa", "kepada", "ketika", "kita", "kok", "lagi", "lain", "maka", "masih", "mengapa",
    "menurut", "mereka", "namun", "nanti", "nih", "oleh", "pada", "para", "per", "pula", "saat",
    "saja", "sambil", "sampai", "sana", "saya", "sebab", "sebagai", "sebelum", "secara",
    "sedangkan", "sehingga", "sekitar", "selain", "seluruh", "semua", "sendiri", "seolah",
    "seperti", "seraya", "serta", "sesudah", "setelah", "setiap", "siapa", "sih", "sini", "situ",
    "sudah", "supaya", "tanpa", "telah", "tentang", "terhadap", "tersebut", "tuh", "untuk", "ya",
    "yaitu", "yakni", "yang",
];

/// Informal token → canonical word(s). Whole-token replacement only, applied
/// before non-alphabetic filtering so abbreviations like `gk` contribute a
/// real word instead of being deleted.
const DEFAULT_SLANG_TABLE: &[(&str, &str)] = &[
    ("gk", "tidak"),
    ("ga", "tidak"),
    ("gak", "tidak"),
    ("gatau", "tidak tahu"),
    ("tdk", "tidak"),
    ("klo", "kalau"),
    ("kpn", "kapan"),
    ("sb", "sebagai"),
    ("dg", "dengan"),
    ("dgn", "dengan"),
    ("yg", "yang"),
    ("td", "tidak"),
    ("mksh", "terima kasih"),
    ("thx", "terima kasih"),
    ("btw", "omong-omong"),
];

/// ASCII emoticon → sentiment word. Matched as literal substrings. Note the
/// uppercase `:D` key: the pipeline lowercases before mapping, so it never
/// fires in the default configuration; it is kept for non-lowercasing
/// configurations.
const DEFAULT_EMOTICON_TABLE: &[(&str, &str)] = &[
    (":)", "senang"),
    (":-)", "senang"),
    (":D", "senang"),
    (":(", "sedih"),
    (":-(", "sedih"),
    (";)", "senang"),
    (":'(", "sedih"),
];

/// Default Indonesian stop words as a HashSet.
pub static DEFAULT_INDONESIAN_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_INDONESIAN_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Immutable bundle of lexical resources consumed by the normalizer.
pub struct Lexicon {
    stopwords: HashSet<String>,
    slang: HashMap<String, String>,
    emoticons: Vec<(String, String)>,
    stemmer: Box<dyn Stemmer>,
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("stopwords", &self.stopwords.len())
            .field("slang", &self.slang.len())
            .field("emoticons", &self.emoticons.len())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl Lexicon {
    /// Build the default Indonesian lexicon.
    pub fn indonesian() -> Self {
        Lexicon {
            stopwords: DEFAULT_INDONESIAN_STOP_WORDS_SET.clone(),
            slang: DEFAULT_SLANG_TABLE
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            emoticons: DEFAULT_EMOTICON_TABLE
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            stemmer: Box::new(IndonesianStemmer::new()),
        }
    }

    /// Build a lexicon from explicit parts.
    pub fn new(
        stopwords: HashSet<String>,
        slang: HashMap<String, String>,
        emoticons: Vec<(String, String)>,
        stemmer: Box<dyn Stemmer>,
    ) -> Self {
        Lexicon {
            stopwords,
            slang,
            emoticons,
            stemmer,
        }
    }

    /// Check whether a (lowercased) token is a stopword.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Look up the canonical form of an informal token.
    pub fn slang_lookup(&self, token: &str) -> Option<&str> {
        self.slang.get(token).map(|s| s.as_str())
    }

    /// The emoticon table as ordered (pattern, replacement word) pairs.
    pub fn emoticons(&self) -> &[(String, String)] {
        &self.emoticons
    }

    /// Stem a single token.
    pub fn stem(&self, token: &str) -> String {
        self.stemmer.stem(token)
    }

    /// Number of stopwords in this lexicon.
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon() {
        let lexicon = Lexicon::indonesian();

        assert!(lexicon.is_stopword("yang"));
        assert!(lexicon.is_stopword("ini"));
        assert!(!lexicon.is_stopword("bagus"));
        assert!(lexicon.stopword_count() > 100);
    }

    #[test]
    fn test_negations_are_not_stopwords() {
        let lexicon = Lexicon::indonesian();

        for negation in ["tidak", "bukan", "jangan", "belum", "kurang"] {
            assert!(
                !lexicon.is_stopword(negation),
                "negation {negation:?} must survive stopword removal"
            );
        }
    }

    #[test]
    fn test_slang_lookup() {
        let lexicon = Lexicon::indonesian();

        assert_eq!(lexicon.slang_lookup("gk"), Some("tidak"));
        assert_eq!(lexicon.slang_lookup("mksh"), Some("terima kasih"));
        assert_eq!(lexicon.slang_lookup("bagus"), None);
    }

    #[test]
    fn test_emoticon_table() {
        let lexicon = Lexicon::indonesian();

        assert!(
            lexicon
                .emoticons()
                .iter()
                .any(|(k, v)| k == ":)" && v == "senang")
        );
        assert!(
            lexicon
                .emoticons()
                .iter()
                .any(|(k, v)| k == ":-(" && v == "sedih")
        );
    }
}
