use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::Result;
use veil_core::WordFilter;

/// Interactive read-loop: scan each stdin line, print the redacted text,
/// the matched words, and the elapsed time. `q` or EOF exits.
pub fn handle(filter: &WordFilter, replacement: char) -> Result<()> {
    println!(
        "Loaded {} blacklisted words. Enter text to scan (q to quit).",
        filter.word_count()
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line == "q" {
            break;
        }

        let start = Instant::now();
        let outcome = filter.scan_with(line, replacement);
        let elapsed = start.elapsed();

        println!("{}", outcome.redacted);
        if !outcome.is_clean() {
            println!("Matched: {}", outcome.matches.join(", "));
        }
        println!("({} match(es) in {:.2?})", outcome.matches.len(), elapsed);
    }

    Ok(())
}
