// Unit tests for script detection, the term matcher, and shared engines.
//
// Tests isolated pieces through the public API: detect() priority rules,
// TermMatcher boundary handling over the built-in lexicon, and an engine
// shared across threads.

use std::sync::Arc;
use std::thread;

use muffle::lexicon::{Category, Language, Lexicon};
use muffle::matcher::TermMatcher;
use muffle::script::{detect, script_counts};
use muffle::{FilterEngine, PolicyMode};

// ============================================================
// detect: priority order
// ============================================================

#[test]
fn detect_devanagari_outranks_tamil_and_telugu() {
    let text = format!("{}{}ह", "நாய்".repeat(30), "కుక్క".repeat(30));
    assert_eq!(detect(&text), Language::Hi);
}

#[test]
fn detect_tamil_outranks_telugu() {
    let text = format!("{}ந", "కుక్క".repeat(100));
    assert_eq!(detect(&text), Language::Ta);
}

#[test]
fn detect_digits_and_punctuation_default_to_english() {
    assert_eq!(detect("1234 !!! ???"), Language::En);
}

#[test]
fn counts_ignore_latin() {
    let counts = script_counts("hello");
    assert_eq!(counts.devanagari + counts.tamil + counts.telugu, 0);
}

// ============================================================
// TermMatcher over the built-in lexicon
// ============================================================

fn builtin_matcher(language: Language) -> TermMatcher {
    let lexicon = Lexicon::builtin();
    let (severe, derogatory) = lexicon.terms_for(language);
    TermMatcher::build(severe, derogatory).unwrap()
}

#[test]
fn matcher_reports_each_distinct_term_once() {
    let m = builtin_matcher(Language::En);
    let found = m.find_matches("jerk jerk JERK, loser");
    let terms: Vec<&str> = found.iter().map(|r| r.term.as_str()).collect();
    assert_eq!(terms, vec!["jerk", "loser"]);
    assert!(found.iter().all(|r| r.category == Category::Derogatory));
}

#[test]
fn matcher_prefers_longer_term_with_shared_prefix() {
    let m = builtin_matcher(Language::En);
    let occ = m.find_occurrences("fucking hell");
    let terms: Vec<&str> = occ.iter().map(|o| o.term).collect();
    assert_eq!(terms, vec!["fucking", "hell"]);
}

#[test]
fn matcher_skips_terms_glued_to_digits_or_underscores() {
    let m = builtin_matcher(Language::En);
    assert!(m.find_matches("idiot2 _idiot").is_empty());
}

#[test]
fn matcher_romanized_and_native_are_distinct() {
    let m = builtin_matcher(Language::Te);
    let found = m.find_matches("kukka ani కుక్క");
    let terms: Vec<&str> = found.iter().map(|r| r.term.as_str()).collect();
    assert_eq!(terms, vec!["kukka", "కుక్క"]);
}

// ============================================================
// Shared engine
// ============================================================

#[test]
fn engine_shared_across_threads() {
    let engine = Arc::new(FilterEngine::new("en", true, PolicyMode::MaskSevere).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.filter_text(&format!("call {i}: you moron")))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            format!("call {i}: you confused person")
        );
    }
}
