//! Rule-based Indonesian stemmer.
//!
//! Indonesian morphology is affix-heavy: `membantu` (to help) is the root
//! `bantu` with the `mem-` prefix, `makanan` (food) is `makan` + `-an`.
//! [`IndonesianStemmer`] strips inflectional particles, possessive pronouns,
//! derivational suffixes, and derivational prefixes in that order, validating
//! every candidate against a root-word dictionary. A stripped form is only
//! committed when it is a known root; if no candidate validates, the input
//! word is returned unchanged. This keeps stemming conservative and exactly
//! reproducible between training and inference.
//!
//! # Examples
//!
//! ```
//! use sentimen::lexicon::stemmer::{IndonesianStemmer, Stemmer};
//!
//! let stemmer = IndonesianStemmer::new();
//! assert_eq!(stemmer.stem("membantu"), "bantu");
//! assert_eq!(stemmer.stem("makanan"), "makan");
//! // Unknown roots pass through untouched.
//! assert_eq!(stemmer.stem("ngerti"), "ngerti");
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Inflectional particles (`-lah`, `-kah`, ...), stripped first.
const PARTICLES: &[&str] = &["lah", "kah", "tah", "pun"];

/// Possessive pronoun suffixes (`bukuku` = my book).
const POSSESSIVES: &[&str] = &["nya", "ku", "mu"];

/// Derivational suffixes, longest first.
const DERIVATIONAL_SUFFIXES: &[&str] = &["kan", "an", "i"];

/// Derivational prefixes, longest variant first within each family. The
/// second element is the elided initial consonant restored during recoding:
/// `memakai` is `pakai` with the `p` assimilated into `mem-`.
const PREFIXES: &[(&str, Option<char>)] = &[
    ("meny", Some('s')),
    ("meng", Some('k')),
    ("men", Some('t')),
    ("mem", Some('p')),
    ("me", None),
    ("peny", Some('s')),
    ("peng", Some('k')),
    ("pen", Some('t')),
    ("pem", Some('p')),
    ("per", None),
    ("pe", None),
    ("ber", None),
    ("be", None),
    ("ter", None),
    ("te", None),
    ("di", None),
    ("ke", None),
    ("se", None),
];

/// Default root-word dictionary: common roots in Indonesian app-review text.
/// Stripping only commits when it lands on one of these, so extending the
/// list widens stemmer coverage without changing existing outputs.
const DEFAULT_ROOT_WORDS: &[&str] = &[
    "aplikasi", "bantu", "cepat", "akurat", "senang", "sedih", "bagus", "buruk", "jelek", "error",
    "pakai", "guna", "respons", "jawab", "tanya", "kerja", "main", "buka", "tutup", "unduh",
    "pasang", "update", "fitur", "iklan", "bayar", "gratis", "mudah", "sulit", "lambat", "keren",
    "mantap", "suka", "benci", "puas", "kecewa", "tolong", "masuk", "keluar", "daftar", "akun",
    "kata", "sandi", "nilai", "bintang", "versi", "baru", "lama", "coba", "ubah", "salah", "benar",
    "tidak", "biasa", "terus", "langsung", "sering", "jarang", "hati", "pikir", "tahu", "mau",
    "ingin", "butuh", "perlu", "hasil", "proses", "data", "server", "internet", "koneksi", "layar",
    "suara", "gambar", "video", "teks", "pesan", "kirim", "terima", "kasih", "balas", "muncul",
    "hilang", "rusak", "baik", "cinta", "marah", "lihat", "dengar", "tulis", "baca", "makan",
    "minum", "beli", "jual", "ajar", "lupa", "ingat", "ganti", "pilih", "cari", "temu", "lancar",
    "aman", "nyaman", "berat", "ringan", "penuh", "kosong", "omong", "ulas", "ulang", "bayang",
    "harap", "sayang", "untung", "rugi", "hemat", "boros", "top", "oke",
];

static DEFAULT_ROOT_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| DEFAULT_ROOT_WORDS.iter().map(|&s| s.to_string()).collect());

/// Dictionary-validated affix-stripping stemmer for Indonesian.
#[derive(Debug, Clone)]
pub struct IndonesianStemmer {
    roots: HashSet<String>,
}

impl IndonesianStemmer {
    /// Create a stemmer with the default root-word dictionary.
    pub fn new() -> Self {
        IndonesianStemmer {
            roots: DEFAULT_ROOT_WORDS_SET.clone(),
        }
    }

    /// Create a stemmer with a custom root-word dictionary.
    pub fn with_roots(roots: HashSet<String>) -> Self {
        IndonesianStemmer { roots }
    }

    /// Check whether a word is a known root.
    pub fn is_root(&self, word: &str) -> bool {
        self.roots.contains(word)
    }

    /// Strip the first matching suffix from `word`, if the remainder is long
    /// enough to be a plausible root.
    fn strip_suffix(word: &str, suffixes: &[&str]) -> Option<String> {
        for suffix in suffixes {
            if let Some(rest) = word.strip_suffix(suffix)
                && rest.chars().count() >= 3
            {
                return Some(rest.to_string());
            }
        }
        None
    }

    /// Strip the first matching derivational prefix, returning the bare
    /// remainder plus a recoded candidate when the prefix family assimilates
    /// an initial consonant.
    fn strip_prefix(word: &str) -> Option<Vec<String>> {
        for (prefix, recode) in PREFIXES {
            if let Some(rest) = word.strip_prefix(prefix)
                && rest.chars().count() >= 3
            {
                let mut candidates = vec![rest.to_string()];
                if let Some(initial) = recode {
                    candidates.push(format!("{initial}{rest}"));
                }
                return Some(candidates);
            }
        }
        None
    }

    /// Run the affix-stripping cascade, returning the first candidate that
    /// validates against the dictionary.
    fn resolve(&self, word: &str) -> Option<String> {
        let mut current = word.to_string();

        for suffixes in [PARTICLES, POSSESSIVES, DERIVATIONAL_SUFFIXES] {
            if let Some(stripped) = Self::strip_suffix(&current, suffixes) {
                if self.is_root(&stripped) {
                    return Some(stripped);
                }
                current = stripped;
            }
        }

        // Up to two prefix removals (e.g. "memper-" family compounds).
        for _ in 0..2 {
            let candidates = Self::strip_prefix(&current)?;
            for candidate in &candidates {
                if self.is_root(candidate) {
                    return Some(candidate.clone());
                }
            }
            current = candidates.into_iter().next()?;
        }

        None
    }
}

impl Default for IndonesianStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for IndonesianStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();

        if word.chars().count() <= 3 || self.is_root(&word) {
            return word;
        }

        self.resolve(&word).unwrap_or(word)
    }

    fn name(&self) -> &'static str {
        "indonesian"
    }
}

/// Stemmer that returns every word unchanged. Useful for disabling stemming
/// in a pipeline without changing its shape.
#[derive(Debug, Clone, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    /// Create a new identity stemmer.
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}
