//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Menu link not found: {0}")]
    LinkNotFound(String),

    #[error("Link does not target a section: {0}")]
    NotASectionLink(String),
}
