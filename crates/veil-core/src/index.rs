use std::collections::HashMap;

use crate::normalizer::Normalizer;

/// One prefix position in the indexed blacklist.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, usize>,
    terminal: bool,
}

/// Prefix tree over the canonicalized blacklist.
///
/// Nodes live in a single arena; index 0 is the root (the empty prefix,
/// never terminal) and every path from the root spells a prefix of some
/// indexed word. Immutable once built, so the whole structure can be shared
/// across threads by reference.
#[derive(Debug, Clone)]
pub struct PatternIndex {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl PatternIndex {
    pub const ROOT: usize = 0;

    /// Index a blacklist. Each word is trimmed and canonicalized through the
    /// normalizer before insertion; words that trim to nothing are skipped
    /// and duplicate insertions are idempotent.
    pub fn build<I, S>(words: I, normalizer: &Normalizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self {
            nodes: vec![TrieNode::default()],
            words: 0,
        };
        for word in words {
            index.insert(word.as_ref(), normalizer);
        }
        index
    }

    fn insert(&mut self, word: &str, normalizer: &Normalizer) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }

        let mut node = Self::ROOT;
        for ch in word.chars() {
            let canon = normalizer.canonicalize(ch);
            node = match self.nodes[node].children.get(&canon).copied() {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(canon, child);
                    child
                }
            };
        }

        if !self.nodes[node].terminal {
            self.nodes[node].terminal = true;
            self.words += 1;
        }
    }

    /// Follow the edge labelled `ch` out of `node`, if it exists.
    pub fn child(&self, node: usize, ch: char) -> Option<usize> {
        self.nodes[node].children.get(&ch).copied()
    }

    /// Whether a blacklisted word ends exactly at `node`.
    pub fn is_terminal(&self, node: usize) -> bool {
        self.nodes[node].terminal
    }

    /// Number of distinct canonical words indexed.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}
