//! Word-list loading for the veil filter
//!
//! Reads the three line-based inputs the matching engine is built from:
//! the blacklist, the stop-character set, and the script-variant mapping.
//! All loading errors are surfaced here; the engine itself never touches
//! the filesystem.

pub mod error;
pub mod loader;

pub use error::{LexiconError, Result};
pub use loader::{Lexicon, load_stop_chars, load_variants, load_words};
