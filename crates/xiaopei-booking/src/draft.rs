//! Booking draft
//!
//! An ephemeral snapshot of the form fields, built at submission time and
//! dropped when the submission flow finishes. Never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    fields: BTreeMap<String, String>,
}

impl BookingDraft {
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Diagnostic log of the submitted draft. In production this would be
    /// the hand-off to a backend; here it is the whole story.
    pub fn log(&self) {
        tracing::info!(draft = ?self.fields, "Booking submitted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_contains_exactly_the_submitted_fields() {
        let draft = BookingDraft::from_fields([
            ("name", "Alex"),
            ("phone", "555-0100"),
            ("date", "2025-01-01"),
        ]);

        assert_eq!(draft.len(), 3);
        assert_eq!(draft.get("name"), Some("Alex"));
        assert_eq!(draft.get("phone"), Some("555-0100"));
        assert_eq!(draft.get("date"), Some("2025-01-01"));
        assert_eq!(draft.get("email"), None);
    }
}
