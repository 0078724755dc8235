use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use muffle::config::Config;
use muffle::lexicon::{wordlist, Language};
use muffle::{FilterEngine, PolicyMode};

/// Muffle: mask or soften offensive vocabulary in English, Hindi, Tamil and Telugu.
///
/// Native-script and romanized terms are both recognized. Settings can also
/// come from MUFFLE_* environment variables or a .env file.
#[derive(Parser)]
#[command(name = "muffle", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct EngineArgs {
    /// Language code (en, hi, ta, te). Omit to detect from the text's script
    #[arg(long)]
    lang: Option<String>,

    /// Detect the language per text even when --lang is given (--lang becomes the fallback)
    #[arg(long)]
    auto_detect: bool,

    /// Replacement policy: prefer-synonym, mask-severe or mask-all
    #[arg(long)]
    policy: Option<String>,

    /// JSON wordlist merged into the built-in lexicon
    #[arg(long)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a text file and write the cleaned text to another file
    Filter {
        /// UTF-8 input file
        input: PathBuf,

        /// Output file (parent directories are created)
        output: PathBuf,

        #[command(flatten)]
        engine: EngineArgs,

        /// Also write the full filter result as JSON to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Filter a literal string and show what was matched
    Check {
        /// Text to filter
        text: String,

        #[command(flatten)]
        engine: EngineArgs,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show which language the script detector picks for a file
    Detect {
        /// UTF-8 input file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("muffle=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Filter {
            input,
            output,
            engine,
            report,
        } => {
            let config = Config::load()?;
            let text = muffle::files::read_input(&input)?;
            let engine = build_engine(&config, &engine)?;

            info!(input = %input.display(), bytes = text.len(), "Filtering file");
            let result = engine.filter(&text);

            let json = match &report {
                Some(_) => Some(serde_json::to_string_pretty(&result)?),
                None => None,
            };
            muffle::files::write_with_report(
                &output,
                result.cleaned_text(),
                report.as_deref().zip(json.as_deref()),
            )?;
            if let Some(report) = &report {
                println!("Report saved to: {}", report.display());
            }

            println!(
                "{} {} ({} term(s) replaced, language: {})",
                "Done:".bold(),
                output.display(),
                result.matched_terms().len(),
                result.resolved_language(),
            );
        }

        Commands::Check { text, engine, json } => {
            let config = Config::load()?;
            let engine = build_engine(&config, &engine)?;
            let result = engine.filter(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                muffle::output::terminal::display_result(&result);
            }
        }

        Commands::Detect { input } => {
            let text = muffle::files::read_input(&input)?;
            let counts = muffle::script::script_counts(&text);
            let language = muffle::script::detect(&text);
            muffle::output::terminal::display_detection(&counts, language);
        }
    }

    Ok(())
}

/// Merge CLI flags over environment configuration and build the engine.
///
/// With no language from either source the engine runs in auto-detect mode
/// with English as the fallback, matching how a bare input file is handled.
fn build_engine(config: &Config, args: &EngineArgs) -> Result<FilterEngine> {
    let language = match args.lang.as_deref() {
        Some(code) => Some(code.parse::<Language>()?),
        None => config.language,
    };
    let policy = match args.policy.as_deref() {
        Some(name) => name.parse::<PolicyMode>()?,
        None => config.policy,
    };
    let auto_detect = args.auto_detect || config.auto_detect || language.is_none();
    let wordlist_path: Option<&Path> = args
        .wordlist
        .as_deref()
        .or(config.wordlist.as_deref());

    let lexicon = wordlist::builtin_with(wordlist_path)?;
    let engine = FilterEngine::with_lexicon(
        language.unwrap_or(muffle::script::DEFAULT_LANGUAGE),
        auto_detect,
        policy,
        lexicon,
    )
    .context("Failed to configure filter engine")?;

    Ok(engine)
}
