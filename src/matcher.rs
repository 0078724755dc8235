// Term matcher: whole-word, case-insensitive multi-term search.
//
// One Aho-Corasick automaton is compiled per language from the case-folded
// severe and derogatory terms. A scan folds the text once, keeping a map
// from folded byte offsets back to the original text, then runs an
// overlapping search so that every candidate (including terms nested inside
// longer terms) is seen. Candidates are kept only when they sit on word
// boundaries in the original text, and overlaps are resolved leftmost-first,
// longest-first. Detection and substitution therefore agree: a term reported
// as matched is a term that gets rewritten.

use std::collections::{BTreeSet, HashSet};

use aho_corasick::{AhoCorasick, MatchKind};
use serde::Serialize;

use crate::lexicon::Category;
use crate::script;

/// A distinct lexicon term found in a text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MatchRecord {
    /// The term as it is written in the lexicon
    pub term: String,
    pub category: Category,
}

/// One occurrence of a term in a text, in original byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'m> {
    pub start: usize,
    pub end: usize,
    pub term: &'m str,
    pub category: Category,
}

#[derive(Debug, Clone)]
struct Entry {
    term: String,
    category: Category,
}

/// Precompiled matcher over one language's terms.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    automaton: Option<AhoCorasick>,
    entries: Vec<Entry>,
}

impl TermMatcher {
    /// Compile a matcher from a severe and a derogatory term set.
    ///
    /// Terms are deduplicated on their case-folded form; when the same term is
    /// listed in both sets the severe entry is kept.
    pub fn build<'a, S, D>(severe: S, derogatory: D) -> Result<Self, aho_corasick::BuildError>
    where
        S: IntoIterator<Item = &'a String>,
        D: IntoIterator<Item = &'a String>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        let mut patterns = Vec::new();

        let tagged = severe
            .into_iter()
            .map(|t| (t, Category::Severe))
            .chain(derogatory.into_iter().map(|t| (t, Category::Derogatory)));

        for (term, category) in tagged {
            let folded = fold(term);
            if folded.trim().is_empty() || !seen.insert(folded.clone()) {
                continue;
            }
            patterns.push(folded);
            entries.push(Entry {
                term: term.clone(),
                category,
            });
        }

        let automaton = if patterns.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .match_kind(MatchKind::Standard)
                    .build(&patterns)?,
            )
        };

        Ok(Self { automaton, entries })
    }

    /// Number of distinct terms compiled into the matcher.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every whole-word occurrence of a lexicon term, in text order and
    /// without overlaps.
    pub fn find_occurrences(&self, text: &str) -> Vec<Occurrence<'_>> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };

        let folded = FoldedText::new(text);

        let mut candidates: Vec<(usize, usize, usize)> = automaton
            .find_overlapping_iter(&folded.text)
            .filter_map(|m| {
                let start = folded.original_offset(m.start())?;
                let end = folded.original_offset(m.end())?;
                is_whole_word(text, start, end).then_some((start, end, m.pattern().as_usize()))
            })
            .collect();

        // Leftmost first, then longest, then lexicon order
        candidates.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)).then(a.2.cmp(&b.2)));

        let mut occurrences = Vec::new();
        let mut cursor = 0;
        for (start, end, pattern) in candidates {
            if start < cursor {
                continue;
            }
            let entry = &self.entries[pattern];
            occurrences.push(Occurrence {
                start,
                end,
                term: &entry.term,
                category: entry.category,
            });
            cursor = end;
        }

        occurrences
    }

    /// Distinct terms present in `text`, one record per term regardless of how
    /// many times it occurs.
    pub fn find_matches(&self, text: &str) -> BTreeSet<MatchRecord> {
        self.find_occurrences(text)
            .into_iter()
            .map(|o| MatchRecord {
                term: o.term.to_string(),
                category: o.category,
            })
            .collect()
    }
}

/// Simple lowercase mapping: one char in, one char out, so 'İ' folds to 'i'.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn fold(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Marks a folded byte that is not the first byte of a char.
const NOT_A_CHAR_START: usize = usize::MAX;

/// Case-folded copy of a text plus a folded → original offset map.
struct FoldedText {
    text: String,
    /// `origin[i]` is the original byte offset of the char whose folded form
    /// starts at folded byte `i`; one extra slot maps the end of the text.
    origin: Vec<usize>,
}

impl FoldedText {
    fn new(original: &str) -> Self {
        let mut text = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len() + 1);

        for (offset, c) in original.char_indices() {
            origin.push(offset);
            text.push(fold_char(c));
            origin.resize(text.len(), NOT_A_CHAR_START);
        }
        origin.push(original.len());

        Self { text, origin }
    }

    fn original_offset(&self, folded: usize) -> Option<usize> {
        match self.origin.get(folded) {
            Some(&NOT_A_CHAR_START) | None => None,
            Some(&offset) => Some(offset),
        }
    }
}

/// True when `text[start..end]` is neither preceded nor followed by a word
/// character.
fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Word characters for boundary purposes. Indic vowel signs and viramas are
/// combining marks, so the whole native-script block counts (minus the danda
/// punctuation), as do the zero-width joiners used inside Indic words and
/// the Latin combining diacritics of decomposed text.
pub fn is_word_char(c: char) -> bool {
    if c.is_alphanumeric() || c == '_' {
        return true;
    }
    match c {
        '\u{0964}' | '\u{0965}' => false,
        '\u{200C}' | '\u{200D}' => true,
        '\u{0300}'..='\u{036F}' => true,
        _ => script::script_of(c).is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(severe: &[&str], derogatory: &[&str]) -> TermMatcher {
        let severe: Vec<String> = severe.iter().map(|s| s.to_string()).collect();
        let derogatory: Vec<String> = derogatory.iter().map(|s| s.to_string()).collect();
        TermMatcher::build(&severe, &derogatory).unwrap()
    }

    fn terms(m: &TermMatcher, text: &str) -> Vec<String> {
        m.find_matches(text).into_iter().map(|r| r.term).collect()
    }

    #[test]
    fn test_substring_inside_word_not_matched() {
        let m = matcher(&["ass"], &[]);
        assert!(m.find_matches("grasshopper").is_empty());
        assert!(m.find_matches("bypass the check").is_empty());
        assert_eq!(terms(&m, "you ass"), vec!["ass"]);
    }

    #[test]
    fn test_case_insensitive() {
        let m = matcher(&[], &["stupid"]);
        let occ = m.find_occurrences("STUPID and Stupid");
        assert_eq!(occ.len(), 2);
        assert_eq!((occ[0].start, occ[0].end), (0, 6));
        assert_eq!((occ[1].start, occ[1].end), (11, 17));
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        let m = matcher(&[], &["idiot"]);
        assert_eq!(terms(&m, "(idiot)!"), vec!["idiot"]);
        assert_eq!(terms(&m, "idiot, idiot."), vec!["idiot"]);
        assert!(m.find_matches("idiotic").is_empty());
    }

    #[test]
    fn test_longest_wins_at_same_start() {
        let m = matcher(&[], &["fool", "bloody fool"]);
        let occ = m.find_occurrences("what a bloody fool");
        assert_eq!(occ.len(), 1);
        assert_eq!(occ[0].term, "bloody fool");
    }

    #[test]
    fn test_severe_wins_on_duplicate() {
        let m = matcher(&["Jerk"], &["jerk"]);
        assert_eq!(m.len(), 1);
        let found = m.find_matches("jerk");
        let record = found.iter().next().unwrap();
        assert_eq!(record.term, "Jerk");
        assert_eq!(record.category, Category::Severe);
    }

    #[test]
    fn test_devanagari_vowel_sign_is_not_a_boundary() {
        // "गधा" must not match inside "गधापन"
        let m = matcher(&[], &["गधा"]);
        assert!(m.find_matches("वह गधापन है").is_empty());
        assert_eq!(terms(&m, "तुम गधा हो।"), vec!["गधा"]);
    }

    #[test]
    fn test_zero_width_joiner_is_not_a_boundary() {
        let m = matcher(&[], &["गधा"]);
        assert!(m.find_matches("गधा\u{200D}").is_empty());
        assert!(m.find_matches("\u{200C}गधा").is_empty());
        assert_eq!(terms(&m, "गधा \u{200D}"), vec!["गधा"]);
    }

    #[test]
    fn test_combining_diacritic_is_not_a_boundary() {
        // Decomposed "café"
        let m = matcher(&[], &["cafe"]);
        assert!(m.find_matches("the cafe\u{0301} is open").is_empty());
        assert_eq!(terms(&m, "the cafe is open"), vec!["cafe"]);
    }

    #[test]
    fn test_tamil_term_at_end_of_sentence() {
        let m = matcher(&[], &["முட்டாள்"]);
        assert_eq!(terms(&m, "நீ ஒரு முட்டாள்."), vec!["முட்டாள்"]);
    }

    #[test]
    fn test_dotted_capital_i_folds_to_i() {
        let m = matcher(&[], &["idiot"]);
        let text = "you İdiot";
        let occ = m.find_occurrences(text);
        assert_eq!(occ.len(), 1);
        assert_eq!(&text[occ[0].start..occ[0].end], "İdiot");
    }

    #[test]
    fn test_offsets_survive_byte_length_changes() {
        // 'İ' is two bytes and folds to one; the Kelvin sign is three and folds to one
        let m = matcher(&[], &["idiot"]);
        let text = "İİ \u{212A} idiot";
        let occ = m.find_occurrences(text);
        assert_eq!(occ.len(), 1);
        assert_eq!(&text[occ[0].start..occ[0].end], "idiot");
    }

    #[test]
    fn test_empty_matcher() {
        let m = matcher(&[], &[]);
        assert!(m.is_empty());
        assert!(m.find_occurrences("anything at all").is_empty());
    }
}
