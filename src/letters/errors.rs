use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LettersError {
    #[error("Letters cannot be empty")]
    EmptyLetters,
    #[error("Failed to read word list {path}: {source}")]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid input: {0}")]
    UtilsError(#[from] crate::utils::UtilsError),
}
