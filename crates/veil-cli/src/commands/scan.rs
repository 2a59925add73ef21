use std::path::PathBuf;

use anyhow::{Context, Result};
use veil_core::WordFilter;

pub fn handle(
    filter: &WordFilter,
    text: Option<String>,
    file: Option<PathBuf>,
    replacement: char,
    json: bool,
) -> Result<()> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => anyhow::bail!("Nothing to scan: pass TEXT or --file <PATH>"),
    };

    let outcome = filter.scan_with(&text, replacement);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("{}", outcome.redacted);

    if outcome.is_clean() {
        println!("\nNo blacklisted words found.");
    } else {
        println!("\nMatched words ({}):", outcome.matches.len());
        for word in &outcome.matches {
            println!("  {}", word);
        }
    }

    Ok(())
}
