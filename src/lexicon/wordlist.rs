// External wordlist documents.
//
// A wordlist is a JSON object keyed by language code. Each value is either a
// plain array of terms (treated as derogatory, i.e. synonym-eligible) or an
// object with explicit `severe`, `derogatory` and `synonyms` sections:
//
//   {
//     "hi": ["bewakoof", "gadha"],
//     "en": {"severe": ["frak"], "synonyms": {"frak": "darn"}}
//   }
//
// The document is read wholesale at construction time and merged into the
// built-in lexicon; it is never written back.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::{Category, Language, Lexicon};
use crate::error::ConfigError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Entry {
    Terms(Vec<String>),
    Sections(Sections),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Sections {
    severe: Vec<String>,
    derogatory: Vec<String>,
    synonyms: HashMap<String, String>,
}

/// Parse a wordlist document into a standalone lexicon.
pub fn parse(json: &str) -> Result<Lexicon, serde_json::Error> {
    let document: BTreeMap<String, Entry> = serde_json::from_str(json)?;
    let mut lexicon = Lexicon::empty();

    for (code, entry) in document {
        // Unknown language keys surface as a serde error so callers report a
        // single parse failure for the document.
        let language: Language = code
            .parse()
            .map_err(|e: ConfigError| <serde_json::Error as serde::de::Error>::custom(e))?;

        match entry {
            Entry::Terms(terms) => lexicon.add_terms(language, Category::Derogatory, terms),
            Entry::Sections(sections) => {
                lexicon.add_terms(language, Category::Severe, sections.severe);
                lexicon.add_terms(language, Category::Derogatory, sections.derogatory);
                for (term, synonym) in &sections.synonyms {
                    lexicon.add_synonym(language, term, synonym);
                }
            }
        }
    }

    Ok(lexicon)
}

/// Read and parse a wordlist file.
pub fn load(path: &Path) -> Result<Lexicon, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::WordlistRead {
        path: path.to_path_buf(),
        source,
    })?;

    let lexicon = parse(&json).map_err(|source| ConfigError::WordlistParse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        languages = Language::ALL
            .iter()
            .filter(|l| lexicon.term_count(**l) > 0)
            .count(),
        "Loaded external wordlist"
    );

    Ok(lexicon)
}

/// Built-in lexicon merged with an optional external wordlist.
pub fn builtin_with(path: Option<&Path>) -> Result<Lexicon, ConfigError> {
    let mut lexicon = Lexicon::builtin();
    if let Some(path) = path {
        lexicon.merge(load(path)?);
    }
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_term_arrays() {
        let lexicon = parse(r#"{"hi": ["bewakoof", "gadha"], "ta": ["loosu"]}"#).unwrap();
        assert_eq!(
            lexicon.category_of(Language::Hi, "gadha"),
            Some(Category::Derogatory)
        );
        assert_eq!(lexicon.term_count(Language::Ta), 1);
        assert_eq!(lexicon.term_count(Language::En), 0);
    }

    #[test]
    fn test_parse_sections() {
        let lexicon = parse(
            r#"{"en": {"severe": ["frak"], "derogatory": ["nerfherder"], "synonyms": {"Nerfherder": "scruffy person"}}}"#,
        )
        .unwrap();
        assert_eq!(lexicon.category_of(Language::En, "frak"), Some(Category::Severe));
        assert_eq!(
            lexicon.synonym_for(Language::En, "nerfherder"),
            Some("scruffy person")
        );
    }

    #[test]
    fn test_parse_rejects_unknown_language() {
        let err = parse(r#"{"fr": ["idiot"]}"#).unwrap_err();
        assert!(err.to_string().contains("not supported"), "{err}");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/muffle-wordlist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::WordlistRead { .. }));
    }

    #[test]
    fn test_builtin_with_merges_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        std::fs::write(&path, r#"{"te": {"derogatory": ["pichodu"]}}"#).unwrap();

        let lexicon = builtin_with(Some(&path)).unwrap();
        assert_eq!(
            lexicon.category_of(Language::Te, "pichodu"),
            Some(Category::Derogatory)
        );
        // Built-in entries survive the merge
        assert_eq!(lexicon.category_of(Language::Te, "vedava"), Some(Category::Derogatory));
    }
}
