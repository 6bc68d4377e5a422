//! English noun lemmatizer.
//!
//! Reduces plural nouns to their singular dictionary form:
//!
//! 1. Irregular plurals are looked up in an exception table
//!    (`children → child`, `knives → knife`).
//! 2. Invariant nouns (`news`, `series`) and words ending in `ss`, `us` or
//!    `is` are left alone.
//! 3. Regular plurals are detached by the first matching suffix rule
//!    (`ies → y`, `ches → ch`, `sses → ss`, `s → ""`, ...).
//!
//! Only lower-case ASCII words are considered; anything else (capitalised
//! words, digits, other scripts) passes through unchanged, as it would with a
//! dictionary that only stores lower-case lemmas.
//!
//! # Examples
//!
//! ```
//! use bayespam::analysis::token_filter::lemma::Lemmatizer;
//! use bayespam::analysis::token_filter::lemma::english::EnglishLemmatizer;
//!
//! let lemmatizer = EnglishLemmatizer::new();
//!
//! assert_eq!(lemmatizer.lemmatize("pills"), "pill");
//! assert_eq!(lemmatizer.lemmatize("companies"), "company");
//! assert_eq!(lemmatizer.lemmatize("children"), "child");
//! assert_eq!(lemmatizer.lemmatize("business"), "business");
//! ```

use ahash::{AHashMap, AHashSet};
use lazy_static::lazy_static;

use crate::analysis::token_filter::lemma::Lemmatizer;

/// Words shorter than this are returned unchanged unless listed as exceptions.
const MIN_LEMMA_LENGTH: usize = 4;

/// Shortest stem a detachment rule may leave behind.
const MIN_STEM_LENGTH: usize = 2;

/// Suffix detachment rules, tried in order. Longer, more specific suffixes
/// come first so `classes` matches `sses` before `s`.
const DETACHMENT_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("zzes", "zz"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("ies", "y"),
    ("men", "man"),
    ("s", ""),
];

/// Endings of singular nouns that look like plurals.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

lazy_static! {
    static ref NOUN_EXCEPTIONS: AHashMap<&'static str, &'static str> = [
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("mice", "mouse"),
        ("lice", "louse"),
        ("geese", "goose"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("oxen", "ox"),
        ("dice", "die"),
        ("knives", "knife"),
        ("wives", "wife"),
        ("lives", "life"),
        ("leaves", "leaf"),
        ("wolves", "wolf"),
        ("halves", "half"),
        ("shelves", "shelf"),
        ("selves", "self"),
        ("thieves", "thief"),
        ("loaves", "loaf"),
        ("calves", "calf"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("analyses", "analysis"),
        ("crises", "crisis"),
        ("theses", "thesis"),
        ("diagnoses", "diagnosis"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("appendices", "appendix"),
        ("vertices", "vertex"),
        ("cacti", "cactus"),
        ("fungi", "fungus"),
        ("alumni", "alumnus"),
        ("stimuli", "stimulus"),
        ("movies", "movie"),
        ("cookies", "cookie"),
        ("calories", "calorie"),
        ("zombies", "zombie"),
        ("rookies", "rookie"),
        ("aches", "ache"),
        ("caches", "cache"),
        ("niches", "niche"),
        ("headaches", "headache"),
        ("avalanches", "avalanche"),
    ]
    .into_iter()
    .collect();

    static ref INVARIANT_NOUNS: AHashSet<&'static str> = [
        "news",
        "series",
        "species",
        "means",
        "this",
        "thus",
        "always",
        "perhaps",
        "whereas",
        "chaos",
        "lens",
        "atlas",
        "canvas",
        "alias",
        "bias",
        "christmas",
        "specimen",
        "regimen",
        "abdomen",
        "omen",
        "amen",
        "stamen",
    ]
    .into_iter()
    .collect();
}

/// English noun lemmatizer driven by an exception table and suffix rules.
#[derive(Debug, Clone, Default)]
pub struct EnglishLemmatizer;

impl EnglishLemmatizer {
    /// Create a new English lemmatizer.
    pub fn new() -> Self {
        EnglishLemmatizer
    }

    fn detach_suffix(word: &str) -> Option<String> {
        DETACHMENT_RULES.iter().find_map(|(suffix, replacement)| {
            word.strip_suffix(suffix)
                .filter(|stem| stem.len() >= MIN_STEM_LENGTH)
                .map(|stem| format!("{stem}{replacement}"))
        })
    }
}

impl Lemmatizer for EnglishLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return word.to_string();
        }

        if let Some(lemma) = NOUN_EXCEPTIONS.get(word) {
            return (*lemma).to_string();
        }

        if word.len() < MIN_LEMMA_LENGTH
            || INVARIANT_NOUNS.contains(word)
            || SINGULAR_ENDINGS.iter().any(|ending| word.ends_with(ending))
        {
            return word.to_string();
        }

        Self::detach_suffix(word).unwrap_or_else(|| word.to_string())
    }

    fn name(&self) -> &'static str {
        "english"
    }
}
