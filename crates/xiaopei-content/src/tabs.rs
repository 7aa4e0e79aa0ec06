//! Knowledge tab switching
//!
//! Exactly one tab and its content panel are active at a time.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabSet {
    tabs: Vec<String>,
    active: Option<String>,
}

impl TabSet {
    /// The first declared tab starts active, matching the landing markup.
    pub fn new(tabs: Vec<String>) -> Self {
        let active = tabs.first().cloned();
        Self { tabs, active }
    }

    /// Activate a tab. Unknown ids leave the current tab in place.
    pub fn activate(&mut self, tab_id: &str) -> Result<()> {
        if !self.tabs.iter().any(|t| t == tab_id) {
            return Err(ContentError::TabNotFound(tab_id.to_string()));
        }

        tracing::debug!(tab = %tab_id, "Knowledge tab activated");
        self.active = Some(tab_id.to_string());
        Ok(())
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn is_active(&self, tab_id: &str) -> bool {
        self.active.as_deref() == Some(tab_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_tab() {
        let mut tabs = TabSet::new(vec![
            "dog-care".to_string(),
            "cat-care".to_string(),
            "nutrition".to_string(),
        ]);
        assert_eq!(tabs.active(), Some("dog-care"));

        tabs.activate("nutrition").unwrap();
        assert!(tabs.is_active("nutrition"));
        assert!(!tabs.is_active("dog-care"));
        assert!(!tabs.is_active("cat-care"));
    }

    #[test]
    fn test_unknown_tab_changes_nothing() {
        let mut tabs = TabSet::new(vec!["dog-care".to_string()]);
        assert!(tabs.activate("fish-care").is_err());
        assert_eq!(tabs.active(), Some("dog-care"));
    }
}
