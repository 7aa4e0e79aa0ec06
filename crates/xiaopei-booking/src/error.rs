//! Booking error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Required field is empty: {0}")]
    MissingField(String),

    #[error("Invalid booking date: {0}")]
    InvalidDate(String),

    #[error("Booking date is in the past: {0}")]
    DateInPast(String),

    #[error("Phone number has no digits")]
    InvalidPhone,

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("No submission in flight")]
    NoSubmission,
}
