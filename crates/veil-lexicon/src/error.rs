use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Malformed variant mapping at {}:{}: expected two tab-separated characters", .path.display(), .line)]
    MalformedVariant { path: PathBuf, line: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LexiconError>;
