//! Booking form lifecycle
//!
//! Submit flow: collect the draft, disable the button with a progress
//! caption, wait out the simulated latency (owned by the command layer),
//! then show the success modal, clear the fields and restore the button.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::draft::BookingDraft;
use crate::error::BookingError;
use crate::validate::{filter_phone_input, validate_draft, DATE_FORMAT};
use crate::Result;

const PHONE_FIELD: &str = "phone";
const SUBMIT_CAPTION: &str = "提交预约";
const SUBMITTING_CAPTION: &str = "提交中…";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitState {
    /// Form is editable and the button is live
    Idle,
    /// Draft collected, waiting out the simulated latency
    Submitting,
}

/// What the page renders for the form and modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingUi {
    pub submit_caption: &'static str,
    pub submit_enabled: bool,
    pub modal_visible: bool,
    pub confirmation_id: Option<String>,
    /// Value for the date input's `min` attribute
    pub min_date: String,
}

pub struct BookingForm {
    fields: BTreeMap<String, String>,
    required: Vec<String>,
    min_date: NaiveDate,
    state: SubmitState,
    modal_visible: bool,
    confirmation_id: Option<String>,
}

impl BookingForm {
    pub fn new(required: Vec<String>, min_date: NaiveDate) -> Self {
        Self {
            fields: BTreeMap::new(),
            required,
            min_date,
            state: SubmitState::Idle,
            modal_visible: false,
            confirmation_id: None,
        }
    }

    /// Store an edited field value. The phone field is filtered on the way
    /// in so it never holds anything but phone characters; the stored value
    /// is returned for the input box to render.
    pub fn set_field(&mut self, name: &str, value: &str) -> String {
        let stored = if name == PHONE_FIELD {
            filter_phone_input(value)
        } else {
            value.to_string()
        };
        self.fields.insert(name.to_string(), stored.clone());
        stored
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Collect and validate the draft, then lock the form for the simulated
    /// latency. A second submit while one is in flight is an error (the
    /// button is disabled, but the precondition holds regardless).
    pub fn begin_submit(&mut self) -> Result<BookingDraft> {
        if self.state == SubmitState::Submitting {
            return Err(BookingError::SubmissionInFlight);
        }

        let draft = BookingDraft::from_fields(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        let required: Vec<&str> = self.required.iter().map(String::as_str).collect();
        validate_draft(&draft, &required, self.min_date)?;

        draft.log();
        self.state = SubmitState::Submitting;
        Ok(draft)
    }

    /// Latency elapsed: show the success modal, clear the fields, restore
    /// the button. The draft is gone after this point.
    pub fn complete_submit(&mut self) -> Result<String> {
        if self.state != SubmitState::Submitting {
            return Err(BookingError::NoSubmission);
        }

        let confirmation = Uuid::new_v4().to_string();
        tracing::info!(confirmation = %confirmation, "Booking accepted");

        self.fields.clear();
        self.state = SubmitState::Idle;
        self.modal_visible = true;
        self.confirmation_id = Some(confirmation.clone());
        Ok(confirmation)
    }

    /// Close control or a click outside the modal. Idempotent.
    pub fn dismiss_success(&mut self) {
        self.modal_visible = false;
        self.confirmation_id = None;
    }

    pub fn ui(&self) -> BookingUi {
        BookingUi {
            submit_caption: match self.state {
                SubmitState::Idle => SUBMIT_CAPTION,
                SubmitState::Submitting => SUBMITTING_CAPTION,
            },
            submit_enabled: self.state == SubmitState::Idle,
            modal_visible: self.modal_visible,
            confirmation_id: self.confirmation_id.clone(),
            min_date: self.min_date.format(DATE_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> BookingForm {
        let min_date = NaiveDate::parse_from_str("2025-01-01", DATE_FORMAT).unwrap();
        BookingForm::new(
            vec!["name".to_string(), "phone".to_string(), "date".to_string()],
            min_date,
        )
    }

    fn fill(form: &mut BookingForm) {
        form.set_field("name", "Alex");
        form.set_field("phone", "555-0100");
        form.set_field("date", "2025-01-01");
    }

    #[test]
    fn test_submit_collects_exactly_the_entered_fields() {
        let mut form = form();
        fill(&mut form);

        let draft = form.begin_submit().unwrap();
        assert_eq!(draft.len(), 3);
        assert_eq!(draft.get("name"), Some("Alex"));
        assert_eq!(draft.get("phone"), Some("555-0100"));
        assert_eq!(draft.get("date"), Some("2025-01-01"));
    }

    #[test]
    fn test_submit_lifecycle() {
        let mut form = form();
        fill(&mut form);

        assert!(form.ui().submit_enabled);
        assert_eq!(form.ui().submit_caption, "提交预约");

        form.begin_submit().unwrap();
        assert!(!form.ui().submit_enabled);
        assert_eq!(form.ui().submit_caption, "提交中…");
        assert!(!form.ui().modal_visible);

        let confirmation = form.complete_submit().unwrap();
        let ui = form.ui();
        assert!(ui.modal_visible);
        assert_eq!(ui.confirmation_id.as_deref(), Some(confirmation.as_str()));
        assert!(ui.submit_enabled);
        assert_eq!(ui.submit_caption, "提交预约");

        // Fields are cleared once the submission completes
        assert_eq!(form.field("name"), None);

        form.dismiss_success();
        assert!(!form.ui().modal_visible);
        form.dismiss_success();
        assert!(!form.ui().modal_visible);
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut form = form();
        fill(&mut form);
        form.begin_submit().unwrap();

        let err = form.begin_submit().unwrap_err();
        assert!(matches!(err, BookingError::SubmissionInFlight));
    }

    #[test]
    fn test_complete_without_submit_is_rejected() {
        let mut form = form();
        assert!(matches!(
            form.complete_submit(),
            Err(BookingError::NoSubmission)
        ));
    }

    #[test]
    fn test_invalid_draft_keeps_form_editable() {
        let mut form = form();
        form.set_field("name", "Alex");

        assert!(form.begin_submit().is_err());
        assert_eq!(form.state(), SubmitState::Idle);
        assert!(form.ui().submit_enabled);
    }

    #[test]
    fn test_phone_field_is_filtered_on_entry() {
        let mut form = form();
        let stored = form.set_field("phone", "abc123-555)(");
        assert_eq!(stored, "123-555)(");
        assert_eq!(form.field("phone"), Some("123-555)("));
    }

    #[test]
    fn test_min_date_is_exposed_for_the_date_input() {
        let form = form();
        assert_eq!(form.ui().min_date, "2025-01-01");
    }
}
