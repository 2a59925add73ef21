use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use veil_core::WordFilter;

const PROGRESS_EVERY: usize = 10_000;

#[derive(Debug, Serialize)]
struct BatchSummary {
    lines: usize,
    flagged_lines: usize,
    total_matches: usize,
    elapsed_ms: u128,
}

/// Scan every line of `input`, optionally writing redacted lines to
/// `output`, and print a summary at the end.
pub fn handle(
    filter: &WordFilter,
    input: PathBuf,
    output: Option<PathBuf>,
    replacement: char,
    json: bool,
) -> Result<()> {
    let reader = BufReader::new(
        File::open(&input).with_context(|| format!("Failed to open {}", input.display()))?,
    );

    let mut writer = match &output {
        Some(path) => Some(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => None,
    };

    let start = Instant::now();
    let mut lines = 0usize;
    let mut flagged_lines = 0usize;
    let mut total_matches = 0usize;

    for line in reader.lines() {
        let line = line?;
        let outcome = filter.scan_with(&line, replacement);

        lines += 1;
        if !outcome.is_clean() {
            flagged_lines += 1;
            total_matches += outcome.matches.len();
        }

        if let Some(writer) = writer.as_mut() {
            writeln!(writer, "{}", outcome.redacted)?;
        }

        if lines % PROGRESS_EVERY == 0 {
            info!(lines, flagged_lines, "batch progress");
        }
    }

    if let Some(writer) = writer.as_mut() {
        writer.flush()?;
    }

    let elapsed = start.elapsed();
    let summary = BatchSummary {
        lines,
        flagged_lines,
        total_matches,
        elapsed_ms: elapsed.as_millis(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Scanned {} lines in {:.2?}", summary.lines, elapsed);
    println!("  Flagged lines: {}", summary.flagged_lines);
    println!("  Total matches: {}", summary.total_matches);
    if elapsed.as_secs_f64() > 0.0 {
        println!(
            "  Throughput: {:.0} lines/s",
            summary.lines as f64 / elapsed.as_secs_f64()
        );
    }

    if let Some(path) = output {
        println!("  Redacted output: {}", path.display());
    }

    Ok(())
}
