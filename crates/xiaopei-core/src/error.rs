//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Navigation error: {0}")]
    Navigation(#[from] xiaopei_navigation::NavigationError),

    #[error("Booking error: {0}")]
    Booking(#[from] xiaopei_booking::BookingError),

    #[error("Reader error: {0}")]
    Reader(#[from] xiaopei_reader::ReaderError),

    #[error("Content error: {0}")]
    Content(#[from] xiaopei_content::ContentError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Site not initialized")]
    NotInitialized,
}
