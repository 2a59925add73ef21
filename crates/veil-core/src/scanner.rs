use serde::{Deserialize, Serialize};

use crate::index::PatternIndex;
use crate::normalizer::Normalizer;

pub const DEFAULT_REPLACEMENT: char = '*';

/// Result of scanning one input text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Input with every matched span replaced by the replacement symbol,
    /// one symbol per consumed character, so length alignment with the
    /// input is preserved 1:1.
    pub redacted: String,
    /// Matched words in the order they were found. Each entry holds the
    /// literal matching characters from the input (original case and
    /// script form), skipped noise excluded.
    pub matches: Vec<String>,
}

impl ScanOutcome {
    pub fn is_clean(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Resolution of one candidate match attempt.
enum Candidate {
    /// A blacklisted word completed after consuming this many input
    /// characters (skipped noise included).
    Matched { consumed: usize, word: String },
    /// The trie path broke, or input ran out mid-path.
    Abandoned,
}

/// Single-pass matcher over one PatternIndex/Normalizer pair.
///
/// The scanner borrows both structures immutably, so any number of scans
/// may run concurrently against the same index once construction is done.
pub struct Scanner<'a> {
    index: &'a PatternIndex,
    normalizer: &'a Normalizer,
}

impl<'a> Scanner<'a> {
    pub fn new(index: &'a PatternIndex, normalizer: &'a Normalizer) -> Self {
        Self { index, normalizer }
    }

    /// Scan `text`, replacing every matched span with `replacement`.
    ///
    /// Restartable prefix automaton: at every offset not already consumed
    /// by a match, grow one candidate from the trie root. A failed
    /// candidate emits only the character at its start offset, then the
    /// scan resumes one position later; a completed candidate consumes its
    /// whole span. Worst case O(n * m) for text length n and longest word
    /// m, which is fine for moderation-sized blacklists.
    pub fn scan(&self, text: &str, replacement: char) -> ScanOutcome {
        let chars: Vec<char> = text.chars().collect();
        let mut redacted = String::with_capacity(text.len());
        let mut matches = Vec::new();

        let mut idx = 0;
        while idx < chars.len() {
            match self.attempt(&chars[idx..]) {
                Candidate::Matched { consumed, word } => {
                    redacted.extend(std::iter::repeat_n(replacement, consumed));
                    matches.push(word);
                    idx += consumed;
                }
                Candidate::Abandoned => {
                    redacted.push(chars[idx]);
                    idx += 1;
                }
            }
        }

        ScanOutcome { redacted, matches }
    }

    /// Try to grow one match from the start of `window`.
    fn attempt(&self, window: &[char]) -> Candidate {
        let mut node = PatternIndex::ROOT;
        let mut consumed = 0usize;
        let mut literal = String::new();
        let mut last_real: Option<char> = None;

        for &raw in window {
            let canon = self.normalizer.canonicalize(raw);

            // Stop characters are skippable only after the candidate has
            // consumed at least one real character; a repeat of the
            // previous raw character collapses onto it.
            let skippable = (!literal.is_empty() && self.normalizer.is_stop_char(canon))
                || last_real == Some(raw);
            if skippable {
                consumed += 1;
                continue;
            }

            match self.index.child(node, canon) {
                Some(next) => {
                    consumed += 1;
                    literal.push(raw);
                    last_real = Some(raw);
                    node = next;
                    if self.index.is_terminal(next) {
                        // Shortest match wins.
                        return Candidate::Matched {
                            consumed,
                            word: literal,
                        };
                    }
                }
                None => return Candidate::Abandoned,
            }
        }

        Candidate::Abandoned
    }
}
