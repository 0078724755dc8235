// Muffle: multilingual offensive-term filter.
//
// This is the library root. The filter engine is the entry point; the other
// modules are its building blocks (lexicon, script detection, matching,
// replacement policy) and the collaborators used by the CLI.

pub mod config;
pub mod engine;
pub mod error;
pub mod files;
pub mod lexicon;
pub mod matcher;
pub mod output;
pub mod policy;
pub mod script;

pub use engine::{FilterEngine, FilterResult};
pub use error::{ConfigError, IoError};
pub use lexicon::{Category, Language, Lexicon};
pub use matcher::MatchRecord;
pub use policy::PolicyMode;
