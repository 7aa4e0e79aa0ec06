//! Reader error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Speech synthesis is not available")]
    Unavailable,

    #[error("Speech engine error: {0}")]
    Engine(String),
}
