//! Xiaopei Booking
//!
//! The grooming-appointment form. The whole flow is local: the draft is
//! collected at submission time, logged diagnostically, and discarded once
//! the simulated fixed-latency submission completes. Nothing is stored or
//! transmitted.

mod draft;
mod error;
mod form;
mod validate;

pub use draft::BookingDraft;
pub use error::BookingError;
pub use form::{BookingForm, BookingUi, SubmitState};
pub use validate::{filter_phone_input, min_booking_date, validate_draft};

pub type Result<T> = std::result::Result<T, BookingError>;
