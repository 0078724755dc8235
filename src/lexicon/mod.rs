// Lexicon store: per-language severe terms, derogatory terms and synonyms.
//
// The lexicon is plain data. It is built once (from the built-in lists,
// optionally merged with an external wordlist) and then handed to the filter
// engine, which compiles a matcher per language from it. Lookups fold case;
// stored terms keep whatever casing they were supplied with so results can
// report them verbatim.

pub mod builtin;
pub mod wordlist;

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Languages the filter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, and the default for Latin-script text
    En,
    /// Hindi (Devanagari or romanized)
    Hi,
    /// Tamil (Tamil script or romanized)
    Ta,
    /// Telugu (Telugu script or romanized)
    Te,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Hi, Language::Ta, Language::Te];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ta => "ta",
            Language::Te => "te",
        }
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            "ta" => Ok(Language::Ta),
            "te" => Ok(Language::Te),
            _ => Err(ConfigError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity class of a lexicon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Explicit profanity, always masked under the strict policy
    Severe,
    /// Insults and slurs, eligible for synonym substitution
    Derogatory,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Severe => "severe",
            Category::Derogatory => "derogatory",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Term sets and synonyms for a single language.
#[derive(Debug, Clone, Default)]
struct LanguageLexicon {
    severe: BTreeSet<String>,
    derogatory: BTreeSet<String>,
    /// Keyed by the lowercased term
    synonyms: HashMap<String, String>,
}

static EMPTY_TERMS: BTreeSet<String> = BTreeSet::new();

/// Process-wide lexicon: language → term sets and synonyms.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    languages: HashMap<Language, LanguageLexicon>,
}

impl Lexicon {
    /// A lexicon with no entries for any language.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in lexicon covering all four languages.
    pub fn builtin() -> Self {
        builtin::load()
    }

    /// Severe and derogatory term sets for `language`.
    /// A language with no entries yields two empty sets.
    pub fn terms_for(&self, language: Language) -> (&BTreeSet<String>, &BTreeSet<String>) {
        match self.languages.get(&language) {
            Some(lex) => (&lex.severe, &lex.derogatory),
            None => (&EMPTY_TERMS, &EMPTY_TERMS),
        }
    }

    /// Case-insensitive synonym lookup.
    pub fn synonym_for(&self, language: Language, term: &str) -> Option<&str> {
        self.languages
            .get(&language)?
            .synonyms
            .get(&term.to_lowercase())
            .map(String::as_str)
    }

    /// Category of a term, if the language lists it. Severe wins when a term
    /// appears in both sets.
    pub fn category_of(&self, language: Language, term: &str) -> Option<Category> {
        let lex = self.languages.get(&language)?;
        let folded = term.to_lowercase();
        let contains = |set: &BTreeSet<String>| set.iter().any(|t| t.to_lowercase() == folded);

        if contains(&lex.severe) {
            Some(Category::Severe)
        } else if contains(&lex.derogatory) {
            Some(Category::Derogatory)
        } else {
            None
        }
    }

    /// Add terms to a language's severe or derogatory set. Blank terms are
    /// ignored; surrounding whitespace is trimmed.
    pub fn add_terms<I, S>(&mut self, language: Language, category: Category, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lex = self.languages.entry(language).or_default();
        let set = match category {
            Category::Severe => &mut lex.severe,
            Category::Derogatory => &mut lex.derogatory,
        };
        for term in terms {
            let term = term.as_ref().trim();
            if !term.is_empty() {
                set.insert(term.to_string());
            }
        }
    }

    /// Map `term` (case-folded) to a softer replacement phrase. A later
    /// mapping for the same term overwrites the earlier one.
    pub fn add_synonym(&mut self, language: Language, term: &str, synonym: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }
        self.languages
            .entry(language)
            .or_default()
            .synonyms
            .insert(term.to_lowercase(), synonym.to_string());
    }

    /// Merge every entry of `other` into this lexicon.
    pub fn merge(&mut self, other: Lexicon) {
        for (language, incoming) in other.languages {
            let lex = self.languages.entry(language).or_default();
            lex.severe.extend(incoming.severe);
            lex.derogatory.extend(incoming.derogatory);
            lex.synonyms.extend(incoming.synonyms);
        }
    }

    /// Total number of terms across both sets of a language.
    pub fn term_count(&self, language: Language) -> usize {
        let (severe, derogatory) = self.terms_for(language);
        severe.len() + derogatory.len()
    }
}
