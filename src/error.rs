use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing words, feedback and word lists.
#[derive(Debug, Error)]
pub enum Error {
    #[error("expected a {expected}-letter word, got {word:?}")]
    InvalidWord { word: String, expected: usize },
    #[error("invalid feedback {feedback:?}: expected {expected} characters from '-', '+', '*'")]
    InvalidFeedback { feedback: String, expected: usize },
    #[error("word size {requested} is not supported, this build uses {supported}-letter words")]
    UnsupportedWordSize { requested: usize, supported: usize },
    #[error("could not find word list {name}")]
    WordListNotFound { name: String },
    #[error("{}:{line}: {source}", .path.display())]
    WordList {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<Error>,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
