//! Reading Session State Machine
//!
//! ```text
//! Idle
//!   ↓ start (non-empty text)
//! Playing ⇄ Paused        (toggle button)
//!   ↓ completion / error / stop
//! Idle
//! ```
//!
//! Pause is applied when requested, not when the host confirms it; the
//! host's pause acknowledgment is unreliable and is treated as advisory.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReaderState {
    /// No reading session exists
    Idle,
    /// An utterance is being spoken
    Playing,
    /// The current utterance is suspended and can be resumed
    Paused,
}

impl ReaderState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: ReaderState) -> bool {
        match (self, target) {
            // A session only starts from Idle
            (ReaderState::Idle, ReaderState::Playing) => true,
            // Playing can pause, or end (completion, error, stop)
            (ReaderState::Playing, ReaderState::Paused) => true,
            (ReaderState::Playing, ReaderState::Idle) => true,
            // Paused can resume, or end (error, stop)
            (ReaderState::Paused, ReaderState::Playing) => true,
            (ReaderState::Paused, ReaderState::Idle) => true,
            // Same state is always valid (no-op)
            (a, b) if *a == b => true,
            // Idle never pauses
            _ => false,
        }
    }

    /// Returns true while a session exists, paused or not
    pub fn is_active(&self) -> bool {
        matches!(self, ReaderState::Playing | ReaderState::Paused)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReaderState::Idle => "idle",
            ReaderState::Playing => "playing",
            ReaderState::Paused => "paused",
        }
    }
}

impl std::fmt::Display for ReaderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
