// Colored terminal output for filter results and script detection.
//
// main.rs delegates all human-facing formatting here.

use colored::Colorize;

use crate::engine::FilterResult;
use crate::lexicon::{Category, Language};
use crate::script::ScriptCounts;

/// Longest preview of input/output text shown in a summary.
const PREVIEW_CHARS: usize = 120;

/// Display a filter result: language, matched terms and a before/after preview.
pub fn display_result(result: &FilterResult) {
    println!(
        "\n{}",
        format!(
            "=== Filter Result (language: {}) ===",
            result.resolved_language()
        )
        .bold()
    );

    if !result.is_profane() {
        println!("  {}", "No offensive terms found.".green());
        return;
    }

    println!(
        "  {} distinct term(s) matched:",
        result.matched_terms().len()
    );
    println!();
    println!(
        "  {:<24} {:<11} {}",
        "Term".dimmed(),
        "Category".dimmed(),
        "Replacement".dimmed(),
    );
    println!("  {}", "-".repeat(60).dimmed());

    for record in result.matches() {
        let replacement = result
            .replacements()
            .get(&record.term)
            .map(String::as_str)
            .unwrap_or("?");
        println!(
            "  {:<24} {:<11} {}",
            record.term,
            colorize_category(record.category),
            replacement,
        );
    }

    println!();
    println!(
        "  {} {}",
        "Before:".dimmed(),
        super::truncate_chars(result.original_text(), PREVIEW_CHARS)
    );
    println!(
        "  {} {}",
        "After: ".dimmed(),
        super::truncate_chars(result.cleaned_text(), PREVIEW_CHARS).bold()
    );
}

/// Display per-script counts and the language they resolve to.
pub fn display_detection(counts: &ScriptCounts, language: Language) {
    println!("{}", format!("Detected language: {language}").bold());
    println!("  Devanagari: {}", counts.devanagari);
    println!("  Tamil:      {}", counts.tamil);
    println!("  Telugu:     {}", counts.telugu);
}

/// Colorize a term category.
fn colorize_category(category: Category) -> colored::ColoredString {
    match category {
        Category::Severe => category.as_str().red().bold(),
        Category::Derogatory => category.as_str().yellow(),
    }
}
