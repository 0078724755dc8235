// Filter engine: the one entry point callers use.
//
// An engine is configured once: target language, whether to auto-detect the
// language per call, the replacement policy, and a lexicon. Construction
// compiles a matcher for every language so auto-detection never has to build
// anything on the hot path. After that, `filter` is a total function: it
// cannot fail, and text it cannot judge passes through unchanged.
//
// Compiled state lives behind an Arc. Cloning an engine is cheap and clones
// share it; the administrative `add_*` methods take `&mut self` and copy the
// state on write, so engines already handed to other threads never observe a
// half-applied change.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ConfigError;
use crate::lexicon::{Category, Language, Lexicon};
use crate::matcher::{MatchRecord, TermMatcher};
use crate::policy::{self, PolicyMode, Replacement};
use crate::script;

/// Outcome of filtering one text.
///
/// `matched_terms` is always exactly the key set of `replacements`, and
/// `cleaned_text` differs from `original_text` only at matched occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterResult {
    original_text: String,
    cleaned_text: String,
    matched_terms: BTreeSet<String>,
    replacements: BTreeMap<String, String>,
    resolved_language: Language,
    matches: Vec<MatchRecord>,
}

impl FilterResult {
    fn unchanged(text: &str, language: Language) -> Self {
        Self {
            original_text: text.to_string(),
            cleaned_text: text.to_string(),
            matched_terms: BTreeSet::new(),
            replacements: BTreeMap::new(),
            resolved_language: language,
            matches: Vec::new(),
        }
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn cleaned_text(&self) -> &str {
        &self.cleaned_text
    }

    pub fn into_cleaned_text(self) -> String {
        self.cleaned_text
    }

    /// Distinct lexicon terms found, as written in the lexicon.
    pub fn matched_terms(&self) -> &BTreeSet<String> {
        &self.matched_terms
    }

    /// Canonical replacement per matched term (before per-occurrence case shaping).
    pub fn replacements(&self) -> &BTreeMap<String, String> {
        &self.replacements
    }

    pub fn resolved_language(&self) -> Language {
        self.resolved_language
    }

    /// Matched terms with their categories, sorted by term.
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn is_profane(&self) -> bool {
        !self.matched_terms.is_empty()
    }
}

#[derive(Debug, Clone)]
struct Compiled {
    lexicon: Lexicon,
    matchers: HashMap<Language, TermMatcher>,
}

impl Compiled {
    fn new(lexicon: Lexicon) -> Result<Self, ConfigError> {
        let mut compiled = Self {
            lexicon,
            matchers: HashMap::new(),
        };
        for language in Language::ALL {
            compiled.rebuild(language)?;
        }
        Ok(compiled)
    }

    fn rebuild(&mut self, language: Language) -> Result<(), ConfigError> {
        let (severe, derogatory) = self.lexicon.terms_for(language);
        let matcher = TermMatcher::build(severe, derogatory)
            .map_err(|source| ConfigError::MatcherBuild { language, source })?;
        debug!(%language, terms = matcher.len(), "Compiled term matcher");
        self.matchers.insert(language, matcher);
        Ok(())
    }
}

/// Multilingual offensive-term filter.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    language: Language,
    auto_detect: bool,
    policy: PolicyMode,
    compiled: Arc<Compiled>,
}

impl FilterEngine {
    /// Build an engine over the built-in lexicon.
    ///
    /// Fails with `UnsupportedLanguage` unless `language` is one of
    /// `en`, `hi`, `ta`, `te`.
    pub fn new(language: &str, auto_detect: bool, policy: PolicyMode) -> Result<Self, ConfigError> {
        let language: Language = language.parse()?;
        Self::with_lexicon(language, auto_detect, policy, Lexicon::builtin())
    }

    /// Build an engine over a caller-supplied lexicon.
    pub fn with_lexicon(
        language: Language,
        auto_detect: bool,
        policy: PolicyMode,
        lexicon: Lexicon,
    ) -> Result<Self, ConfigError> {
        let compiled = Compiled::new(lexicon)?;

        info!(
            %language,
            auto_detect,
            %policy,
            terms = compiled.lexicon.term_count(language),
            "Filter engine ready"
        );

        Ok(Self {
            language,
            auto_detect,
            policy,
            compiled: Arc::new(compiled),
        })
    }

    /// The configured (fixed or fallback) language.
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn auto_detect(&self) -> bool {
        self.auto_detect
    }

    /// The active replacement policy.
    pub fn policy(&self) -> PolicyMode {
        self.policy
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.compiled.lexicon
    }

    /// Filter `text` and return the full result record.
    pub fn filter(&self, text: &str) -> FilterResult {
        if text.trim().is_empty() {
            return FilterResult::unchanged(text, self.language);
        }

        let language = self.resolve_language(text);
        let Some(matcher) = self.compiled.matchers.get(&language) else {
            // Unreachable for engines built through `Compiled::new`, which
            // compiles every language.
            warn!(%language, "No matcher compiled for language, passing text through");
            return FilterResult::unchanged(text, language);
        };
        if matcher.is_empty() {
            debug!(%language, "Lexicon has no terms for language");
            return FilterResult::unchanged(text, language);
        }

        let occurrences = matcher.find_occurrences(text);
        if occurrences.is_empty() {
            debug!(%language, "No terms matched");
            return FilterResult::unchanged(text, language);
        }

        let mut chosen: BTreeMap<&str, (Category, Replacement)> = BTreeMap::new();
        for occurrence in &occurrences {
            chosen.entry(occurrence.term).or_insert_with(|| {
                let replacement = self.policy.resolve(
                    &self.compiled.lexicon,
                    language,
                    occurrence.term,
                    occurrence.category,
                );
                (occurrence.category, replacement)
            });
        }

        let cleaned_text =
            policy::apply(text, &occurrences, |term| chosen.get(term).map(|(_, r)| r));

        debug!(
            %language,
            occurrences = occurrences.len(),
            distinct = chosen.len(),
            "Filtered text"
        );

        let matches = chosen
            .iter()
            .map(|(term, (category, _))| MatchRecord {
                term: term.to_string(),
                category: *category,
            })
            .collect();
        let replacements: BTreeMap<String, String> = chosen
            .iter()
            .map(|(term, (_, replacement))| (term.to_string(), replacement.as_str().to_string()))
            .collect();

        FilterResult {
            original_text: text.to_string(),
            cleaned_text,
            matched_terms: replacements.keys().cloned().collect(),
            replacements,
            resolved_language: language,
            matches,
        }
    }

    /// Filter `text` and return only the cleaned text.
    pub fn filter_text(&self, text: &str) -> String {
        self.filter(text).into_cleaned_text()
    }

    fn resolve_language(&self, text: &str) -> Language {
        if !self.auto_detect {
            return self.language;
        }
        let detected = script::detect(text);
        if self.compiled.matchers.contains_key(&detected) {
            detected
        } else {
            warn!(%detected, fallback = %self.language, "Detected language has no matcher");
            self.language
        }
    }

    /// Add derogatory (synonym-eligible) terms. Configuration-time only.
    pub fn add_terms<I, S>(&mut self, language: Language, terms: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_terms_with_category(language, Category::Derogatory, terms)
    }

    /// Add severe (always-masked under `MaskSevere`) terms. Configuration-time only.
    pub fn add_severe_terms<I, S>(
        &mut self,
        language: Language,
        terms: I,
    ) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_terms_with_category(language, Category::Severe, terms)
    }

    fn add_terms_with_category<I, S>(
        &mut self,
        language: Language,
        category: Category,
        terms: I,
    ) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compiled = Arc::make_mut(&mut self.compiled);
        compiled.lexicon.add_terms(language, category, terms);
        compiled.rebuild(language)?;
        info!(
            %language,
            %category,
            terms = compiled.lexicon.term_count(language),
            "Extended lexicon"
        );
        Ok(())
    }

    /// Map a term to a softer replacement. Configuration-time only.
    pub fn add_synonym(&mut self, language: Language, term: &str, synonym: &str) {
        let compiled = Arc::make_mut(&mut self.compiled);
        compiled.lexicon.add_synonym(language, term, synonym);
    }
}
