//! Matching engine for the veil word filter
//!
//! This crate contains:
//! - Normalizer (case folding, script-variant canonicalization, stop characters)
//! - PatternIndex (arena-backed prefix tree over the blacklist)
//! - Scanner (single-pass matching and redaction)
//!
//! Everything here is pure computation over in-memory character sequences;
//! loading word lists from disk lives in `veil-lexicon`.

pub mod filter;
pub mod index;
pub mod normalizer;
pub mod scanner;

pub use filter::WordFilter;
pub use index::PatternIndex;
pub use normalizer::Normalizer;
pub use scanner::{DEFAULT_REPLACEMENT, ScanOutcome, Scanner};
