pub mod batch;
pub mod repl;
pub mod scan;

use anyhow::{Context, Result};
use tracing::debug;
use veil_core::WordFilter;
use veil_lexicon::Lexicon;

use crate::cli::Cli;
use crate::config::Config;

/// Resolve lexicon paths (flags win over config) and build the filter.
pub fn build_filter(cli: &Cli, config: &Config) -> Result<WordFilter> {
    let blacklist = cli
        .blacklist
        .clone()
        .unwrap_or_else(|| config.lexicon.blacklist.clone());
    let stop_chars = cli
        .stop_chars
        .clone()
        .or_else(|| config.lexicon.stop_chars.clone());
    let variants = cli
        .variants
        .clone()
        .or_else(|| config.lexicon.variants.clone());

    let lexicon = Lexicon::load(&blacklist, stop_chars.as_deref(), variants.as_deref())
        .with_context(|| format!("Failed to load lexicon (blacklist: {})", blacklist.display()))?;

    debug!(
        words = lexicon.blacklist.len(),
        stop_chars = lexicon.stop_chars.len(),
        variants = lexicon.variants.len(),
        "lexicon loaded"
    );

    Ok(WordFilter::new(
        lexicon.blacklist,
        lexicon.stop_chars,
        lexicon.variants,
    ))
}
