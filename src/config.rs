use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::lexicon::Language;
use crate::policy::PolicyMode;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Command-line flags take
/// precedence over everything here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed language (MUFFLE_LANG). None means detect from the text's script.
    pub language: Option<Language>,
    /// Replacement policy (MUFFLE_POLICY, default prefer-synonym)
    pub policy: PolicyMode,
    /// Optional external wordlist merged into the built-in lexicon (MUFFLE_WORDLIST)
    pub wordlist: Option<PathBuf>,
    /// Detect the language per call even when a language is set (MUFFLE_AUTO_DETECT)
    pub auto_detect: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; invalid values are errors rather than
    /// being silently ignored.
    pub fn load() -> Result<Self> {
        let language = match non_empty_var("MUFFLE_LANG") {
            Some(code) => Some(code.parse::<Language>().context("Invalid MUFFLE_LANG")?),
            None => None,
        };

        let policy = match non_empty_var("MUFFLE_POLICY") {
            Some(name) => name.parse::<PolicyMode>().context("Invalid MUFFLE_POLICY")?,
            None => PolicyMode::default(),
        };

        let auto_detect = match non_empty_var("MUFFLE_AUTO_DETECT").as_deref() {
            Some("1" | "true" | "yes") => true,
            Some("0" | "false" | "no") | None => false,
            Some(other) => anyhow::bail!(
                "Invalid MUFFLE_AUTO_DETECT '{other}' (expected true/false)"
            ),
        };

        Ok(Self {
            language,
            policy,
            wordlist: non_empty_var("MUFFLE_WORDLIST").map(PathBuf::from),
            auto_detect,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
