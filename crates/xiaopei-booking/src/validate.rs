//! Field validation
//!
//! Mirrors what the page enforces while typing: the phone field only ever
//! holds phone characters, and the date picker's minimum is today.

use chrono::{Local, NaiveDate};

use crate::draft::BookingDraft;
use crate::error::BookingError;
use crate::Result;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Keep only digits, parentheses, plus, whitespace and hyphen, in order.
pub fn filter_phone_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '(' | ')' | '+' | '-'))
        .collect()
}

/// Earliest selectable booking date (today, local time)
pub fn min_booking_date() -> NaiveDate {
    Local::now().date_naive()
}

/// Check a draft before the submission flow starts. `min_date` is injected
/// so tests are not pinned to the wall clock.
pub fn validate_draft(draft: &BookingDraft, required: &[&str], min_date: NaiveDate) -> Result<()> {
    for name in required {
        match draft.get(name) {
            Some(value) if !value.trim().is_empty() => {}
            _ => return Err(BookingError::MissingField((*name).to_string())),
        }
    }

    if let Some(phone) = draft.get("phone") {
        if !phone.chars().any(|c| c.is_ascii_digit()) {
            return Err(BookingError::InvalidPhone);
        }
    }

    if let Some(date) = draft.get("date") {
        let parsed = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|_| BookingError::InvalidDate(date.to_string()))?;
        if parsed < min_date {
            return Err(BookingError::DateInPast(date.to_string()));
        }
    }

    Ok(())
}
