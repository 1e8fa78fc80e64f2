// File: src/error.rs
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("lexicon JSON error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not replace lexicon file: {0}")]
    Persist(#[from] tempfile::PersistError),
    #[error("lexicon at {} was never loaded, refusing to overwrite it", .0.display())]
    NotLoaded(PathBuf),
    #[error("invalid entity: {0}")]
    InvalidEntity(&'static str),
}
