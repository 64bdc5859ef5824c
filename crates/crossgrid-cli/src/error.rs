use crossgrid::core::io::wordlist::WordListError;
use crossgrid::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read word list '{path}': {source}", path = path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: WordListError,
    },

    #[error("LaTeX compilation failed: {0}")]
    Compile(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
