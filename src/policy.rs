// Replacement policy: mask or soften each matched term.
//
// The policy mode is fixed when an engine is built. For every distinct term
// it resolves one canonical replacement (a synonym or a run of asterisks);
// each occurrence in the text then receives that replacement reshaped to the
// occurrence's own case. Substitution is a single left-to-right pass over the
// occurrences, so a synonym is never itself re-matched and rewritten.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::lexicon::{Category, Language, Lexicon};
use crate::matcher::Occurrence;

/// How matched terms are neutralized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyMode {
    /// Synonym for every matched term, masking when none exists
    #[default]
    PreferSynonym,
    /// Severe terms always masked; derogatory terms softened when possible
    MaskSevere,
    /// Every matched term masked
    MaskAll,
}

impl PolicyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyMode::PreferSynonym => "prefer-synonym",
            PolicyMode::MaskSevere => "mask-severe",
            PolicyMode::MaskAll => "mask-all",
        }
    }

    fn allows_synonym(&self, category: Category) -> bool {
        match self {
            PolicyMode::PreferSynonym => true,
            PolicyMode::MaskSevere => category == Category::Derogatory,
            PolicyMode::MaskAll => false,
        }
    }

    /// Decide the canonical replacement for a matched term.
    pub fn resolve(
        &self,
        lexicon: &Lexicon,
        language: Language,
        term: &str,
        category: Category,
    ) -> Replacement {
        if self.allows_synonym(category) {
            if let Some(synonym) = lexicon.synonym_for(language, term) {
                return Replacement::Synonym(synonym.to_string());
            }
        }
        Replacement::Mask(mask(term))
    }
}

impl FromStr for PolicyMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "prefer-synonym" | "synonym" => Ok(PolicyMode::PreferSynonym),
            "mask-severe" | "strict" => Ok(PolicyMode::MaskSevere),
            "mask-all" | "mask" => Ok(PolicyMode::MaskAll),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical replacement chosen for a term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    Mask(String),
    Synonym(String),
}

impl Replacement {
    pub fn as_str(&self) -> &str {
        match self {
            Replacement::Mask(s) | Replacement::Synonym(s) => s,
        }
    }

    /// The text written in place of one occurrence. Synonyms follow the
    /// occurrence's case shape; masks have no case.
    pub fn for_token(&self, token: &str) -> Cow<'_, str> {
        match self {
            Replacement::Mask(stars) => Cow::Borrowed(stars.as_str()),
            Replacement::Synonym(synonym) => Cow::Owned(match_case(synonym, token)),
        }
    }
}

/// One `*` per code point of `term`.
pub fn mask(term: &str) -> String {
    "*".repeat(term.chars().count())
}

/// Reshape `replacement` to mirror the case of `token`:
/// all-uppercase → uppercase, leading capital → capitalized, else lowercase.
pub fn match_case(replacement: &str, token: &str) -> String {
    let has_upper = token.chars().any(char::is_uppercase);
    let has_lower = token.chars().any(char::is_lowercase);

    if has_upper && !has_lower {
        replacement.to_uppercase()
    } else if token.chars().next().is_some_and(char::is_uppercase) {
        capitalize(replacement)
    } else {
        replacement.to_lowercase()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Rewrite `text`, replacing each occurrence with the replacement `lookup`
/// returns for its term. Occurrences must be sorted and non-overlapping, as
/// produced by the matcher; text between them is copied unchanged.
pub fn apply<'r, F>(text: &str, occurrences: &[Occurrence<'_>], lookup: F) -> String
where
    F: Fn(&str) -> Option<&'r Replacement>,
{
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for occurrence in occurrences {
        let Some(replacement) = lookup(occurrence.term) else {
            continue;
        };
        let token = &text[occurrence.start..occurrence.end];
        out.push_str(&text[cursor..occurrence.start]);
        out.push_str(&replacement.for_token(token));
        cursor = occurrence.end;
    }
    out.push_str(&text[cursor..]);

    out
}
