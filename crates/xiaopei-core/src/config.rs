//! Site configuration
//!
//! The source site ships in two variants: the plain landing page, and the
//! article pages that add the read-aloud control and the knowledge
//! widgets. The feature set is chosen per deployment here rather than
//! inferred from the markup.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ship the read-aloud control on article pages
    pub reader_enabled: bool,
    /// Ship the knowledge tabs and archive filter
    pub knowledge_enabled: bool,
    /// Ship the booking form
    pub booking_enabled: bool,
    /// Simulated booking submission latency, in milliseconds
    pub submit_latency_ms: u64,
    /// Fields that must be filled before a booking is accepted
    pub required_booking_fields: Vec<String>,
    /// Override for the date picker's minimum; None means today
    pub booking_min_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reader_enabled: true,
            knowledge_enabled: true,
            booking_enabled: true,
            submit_latency_ms: 1_000,
            required_booking_fields: vec![
                "name".to_string(),
                "phone".to_string(),
                "date".to_string(),
            ],
            booking_min_date: None,
        }
    }
}
