// Error types for the library surface.
//
// Filtering itself never fails. Everything here happens either while an
// engine is being configured (language codes, policy names, wordlists) or in
// the file collaborator that feeds text in and writes cleaned text out.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring a filter engine.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("language '{0}' not supported (supported: en, hi, ta, te)")]
    UnsupportedLanguage(String),

    #[error("unknown policy '{0}' (expected prefer-synonym, mask-severe or mask-all)")]
    UnknownPolicy(String),

    #[error("failed to compile term matcher for '{language}'")]
    MatcherBuild {
        language: crate::lexicon::Language,
        #[source]
        source: aho_corasick::BuildError,
    },

    #[error("failed to read wordlist {}", path.display())]
    WordlistRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse wordlist {}", path.display())]
    WordlistParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by the file collaborator around the engine.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("input file '{}' not found", .0.display())]
    InputFileNotFound(PathBuf),

    #[error("failed to read input file {}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file {}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
