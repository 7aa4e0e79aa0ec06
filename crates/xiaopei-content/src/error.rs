//! Content error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Tab not found: {0}")]
    TabNotFound(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),
}
