use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "veil")]
#[command(about = "Blacklist word filtering with evasion tolerance", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Blacklist file, one word per line (overrides config)
    #[arg(long, global = true)]
    pub blacklist: Option<PathBuf>,

    /// Stop-character file: noise characters ignorable inside a match
    #[arg(long, global = true)]
    pub stop_chars: Option<PathBuf>,

    /// Variant mapping file, one source<TAB>canonical pair per line
    #[arg(long, global = true)]
    pub variants: Option<PathBuf>,

    /// Replacement symbol for redacted spans
    #[arg(long, global = true)]
    pub replacement: Option<char>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan one text and print the redacted result
    Scan {
        /// Text to scan
        text: Option<String>,

        /// Read the text to scan from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Emit the scan outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactively scan lines read from stdin
    Repl,

    /// Scan every line of a file and report a summary
    Batch {
        /// Input file, one text per line
        input: PathBuf,

        /// Write redacted lines to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
