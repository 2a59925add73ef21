use std::path::Path;

use tracing::debug;

use crate::error::{LexiconError, Result};

/// Load a word list: one word per line, trimmed, blank lines skipped.
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Load the stop-character set. Every character of every line counts, so a
/// line may carry one character or a whole run of punctuation; lines are
/// not trimmed beyond the newline, which keeps space-like characters
/// loadable as stop characters.
pub fn load_stop_chars(path: &Path) -> Result<Vec<char>> {
    let content = std::fs::read_to_string(path)?;
    let chars: Vec<char> = content.lines().flat_map(|line| line.chars()).collect();

    debug!(path = %path.display(), count = chars.len(), "loaded stop characters");
    Ok(chars)
}

/// Load the script-variant mapping: one `source<TAB>canonical` pair per
/// line, each side a single character. Blank lines are skipped; anything
/// else malformed is an error, never silently dropped.
pub fn load_variants(path: &Path) -> Result<Vec<(char, char)>> {
    let content = std::fs::read_to_string(path)?;
    let mut pairs = Vec::new();

    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let source = fields.next().and_then(single_char);
        let canonical = fields.next().and_then(single_char);
        let rest = fields.next();

        match (source, canonical, rest) {
            (Some(source), Some(canonical), None) => pairs.push((source, canonical)),
            _ => {
                return Err(LexiconError::MalformedVariant {
                    path: path.to_path_buf(),
                    line: lineno + 1,
                });
            }
        }
    }

    debug!(path = %path.display(), count = pairs.len(), "loaded variant mappings");
    Ok(pairs)
}

fn single_char(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// The three loaded lists, bundled for handoff to the matching engine.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub blacklist: Vec<String>,
    pub stop_chars: Vec<char>,
    pub variants: Vec<(char, char)>,
}

impl Lexicon {
    /// Load a lexicon from disk. The blacklist is required; the stop-character
    /// and variant files are optional, but once a path is given the file must
    /// exist and parse.
    pub fn load(
        blacklist: &Path,
        stop_chars: Option<&Path>,
        variants: Option<&Path>,
    ) -> Result<Self> {
        Ok(Self {
            blacklist: load_words(blacklist)?,
            stop_chars: match stop_chars {
                Some(path) => load_stop_chars(path)?,
                None => Vec::new(),
            },
            variants: match variants {
                Some(path) => load_variants(path)?,
                None => Vec::new(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_words_trims_and_skips_blanks() {
        let file = write_temp("法轮功\n  bad  \n\n\t\nadmin\n");
        let words = load_words(file.path()).unwrap();
        assert_eq!(words, vec!["法轮功", "bad", "admin"]);
    }

    #[test]
    fn test_load_words_missing_file() {
        let result = load_words(Path::new("/nonexistent/black_words.txt"));
        assert!(matches!(result, Err(LexiconError::Io(_))));
    }

    #[test]
    fn test_load_stop_chars_takes_every_char() {
        let file = write_temp("！\n@#\n。\n");
        let chars = load_stop_chars(file.path()).unwrap();
        assert_eq!(chars, vec!['！', '@', '#', '。']);
    }

    #[test]
    fn test_load_variants() {
        let file = write_temp("輪\t轮\n髮\t发\n\n");
        let pairs = load_variants(file.path()).unwrap();
        assert_eq!(pairs, vec![('輪', '轮'), ('髮', '发')]);
    }

    #[test]
    fn test_load_variants_rejects_missing_field() {
        let file = write_temp("輪\t轮\n髮\n");
        let err = load_variants(file.path()).unwrap_err();
        match err {
            LexiconError::MalformedVariant { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_variants_rejects_extra_field() {
        let file = write_temp("輪\t轮\t多\n");
        assert!(matches!(
            load_variants(file.path()),
            Err(LexiconError::MalformedVariant { line: 1, .. })
        ));
    }

    #[test]
    fn test_load_variants_rejects_multichar_field() {
        let file = write_temp("輪轮\t轮\n");
        assert!(matches!(
            load_variants(file.path()),
            Err(LexiconError::MalformedVariant { line: 1, .. })
        ));
    }

    #[test]
    fn test_lexicon_load_with_optional_files_absent() {
        let blacklist = write_temp("bad\n");
        let lexicon = Lexicon::load(blacklist.path(), None, None).unwrap();
        assert_eq!(lexicon.blacklist, vec!["bad"]);
        assert!(lexicon.stop_chars.is_empty());
        assert!(lexicon.variants.is_empty());
    }

    #[test]
    fn test_lexicon_load_full() {
        let blacklist = write_temp("法轮功\nbad\n");
        let stops = write_temp("！@\n");
        let variants = write_temp("輪\t轮\n");

        let lexicon = Lexicon::load(
            blacklist.path(),
            Some(stops.path()),
            Some(variants.path()),
        )
        .unwrap();

        assert_eq!(lexicon.blacklist.len(), 2);
        assert_eq!(lexicon.stop_chars, vec!['！', '@']);
        assert_eq!(lexicon.variants, vec![('輪', '轮')]);
    }
}
