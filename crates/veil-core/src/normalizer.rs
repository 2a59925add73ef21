use std::collections::{HashMap, HashSet};

/// Character-level canonicalization for the scanner.
///
/// Folds case and maps script variants (e.g. traditional forms onto their
/// simplified equivalents), and answers stop-character membership. Both
/// lookups are O(1) and the tables are read-only after construction, so a
/// Normalizer can be shared freely across concurrent scans.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    stop_chars: HashSet<char>,
    variants: HashMap<char, char>,
}

impl Normalizer {
    pub fn new(
        stop_chars: impl IntoIterator<Item = char>,
        variants: impl IntoIterator<Item = (char, char)>,
    ) -> Self {
        Self {
            stop_chars: stop_chars.into_iter().collect(),
            variants: variants.into_iter().collect(),
        }
    }

    /// Canonical form of a character: lowercased, then mapped through the
    /// variant table. Characters without an entry canonicalize to themselves;
    /// this is total and never fails.
    pub fn canonicalize(&self, ch: char) -> char {
        let folded = ch.to_lowercase().next().unwrap_or(ch);
        self.variants.get(&folded).copied().unwrap_or(folded)
    }

    /// Whether a character counts as ignorable noise inside a match.
    pub fn is_stop_char(&self, ch: char) -> bool {
        self.stop_chars.contains(&ch)
    }
}
