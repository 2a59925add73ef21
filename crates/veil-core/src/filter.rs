use crate::index::PatternIndex;
use crate::normalizer::Normalizer;
use crate::scanner::{DEFAULT_REPLACEMENT, ScanOutcome, Scanner};

/// Owning facade over the matching engine.
///
/// Bundles a Normalizer and the PatternIndex built through it from raw
/// in-memory lists, which is the shape callers outside this crate want:
/// build once at startup, then call [`WordFilter::filter`] per input.
pub struct WordFilter {
    index: PatternIndex,
    normalizer: Normalizer,
}

impl WordFilter {
    pub fn new<I, S>(
        blacklist: I,
        stop_chars: impl IntoIterator<Item = char>,
        variants: impl IntoIterator<Item = (char, char)>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalizer = Normalizer::new(stop_chars, variants);
        let index = PatternIndex::build(blacklist, &normalizer);
        Self { index, normalizer }
    }

    /// Scan with the default `*` replacement symbol.
    pub fn filter(&self, text: &str) -> ScanOutcome {
        self.scan_with(text, DEFAULT_REPLACEMENT)
    }

    pub fn scan_with(&self, text: &str, replacement: char) -> ScanOutcome {
        Scanner::new(&self.index, &self.normalizer).scan(text, replacement)
    }

    /// Number of distinct words indexed.
    pub fn word_count(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults_to_asterisk() {
        let filter = WordFilter::new(["bad"], [], []);
        let outcome = filter.filter("bad news");
        assert_eq!(outcome.redacted, "*** news");
        assert_eq!(outcome.matches, vec!["bad"]);
    }

    #[test]
    fn test_word_count_skips_blanks() {
        let filter = WordFilter::new(["bad", "", "  "], [], []);
        assert_eq!(filter.word_count(), 1);
    }
}
