// Script detector: infers a language from the Unicode blocks in a text.
//
// This is a coarse heuristic. It only recognizes native scripts, so romanized
// Hindi, Tamil or Telugu is always classified as English. Priority among
// scripts is fixed (Devanagari, then Tamil, then Telugu): the first script
// with any hit wins, no matter how many code points the others have.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::lexicon::Language;

/// Scripts checked by the detector, in priority order.
const SCRIPT_BLOCKS: [(Language, RangeInclusive<char>); 3] = [
    (Language::Hi, '\u{0900}'..='\u{097F}'),
    (Language::Ta, '\u{0B80}'..='\u{0BFF}'),
    (Language::Te, '\u{0C00}'..='\u{0C7F}'),
];

/// Language used when no native script is present.
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// Per-script code point counts for a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScriptCounts {
    pub devanagari: usize,
    pub tamil: usize,
    pub telugu: usize,
}

impl ScriptCounts {
    fn count_for(&self, language: Language) -> usize {
        match language {
            Language::Hi => self.devanagari,
            Language::Ta => self.tamil,
            Language::Te => self.telugu,
            Language::En => 0,
        }
    }
}

/// Count code points falling in each native script block.
pub fn script_counts(text: &str) -> ScriptCounts {
    let mut counts = ScriptCounts::default();
    for c in text.chars() {
        match script_of(c) {
            Some(Language::Hi) => counts.devanagari += 1,
            Some(Language::Ta) => counts.tamil += 1,
            Some(Language::Te) => counts.telugu += 1,
            _ => {}
        }
    }
    counts
}

/// Detect the language of `text` from its script.
pub fn detect(text: &str) -> Language {
    let counts = script_counts(text);
    SCRIPT_BLOCKS
        .iter()
        .map(|(language, _)| *language)
        .find(|language| counts.count_for(*language) > 0)
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// The native-script language a single character belongs to, if any.
pub fn script_of(c: char) -> Option<Language> {
    SCRIPT_BLOCKS
        .iter()
        .find(|(_, block)| block.contains(&c))
        .map(|(language, _)| *language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_defaults_to_english() {
        assert_eq!(detect("You are so stupid"), Language::En);
        assert_eq!(detect(""), Language::En);
    }

    #[test]
    fn test_romanized_is_english() {
        assert_eq!(detect("tu bahut bewakoof hai"), Language::En);
    }

    #[test]
    fn test_each_script() {
        assert_eq!(detect("तुम गधा हो"), Language::Hi);
        assert_eq!(detect("நீ முட்டாள்"), Language::Ta);
        assert_eq!(detect("నువ్వు వెధవ"), Language::Te);
    }

    #[test]
    fn test_priority_ignores_counts() {
        // One Devanagari code point outranks a long Telugu run
        let text = format!("{}क", "వెధవ".repeat(25));
        assert_eq!(detect(&text), Language::Hi);

        let text = format!("{}ம", "వెధవ".repeat(25));
        assert_eq!(detect(&text), Language::Ta);
    }

    #[test]
    fn test_script_counts() {
        let counts = script_counts("abc गधा நாய்");
        assert_eq!(counts.devanagari, 3);
        assert_eq!(counts.tamil, 4);
        assert_eq!(counts.telugu, 0);
    }
}
