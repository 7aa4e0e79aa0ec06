//! Speech engine seam
//!
//! The controller never talks to the host speech capability directly; it
//! drives a [`SpeechEngine`] and consumes [`EngineEvent`]s. The production
//! engine forwards to the webview's speech synthesis, tests use a recording
//! fake.

use crate::voice::VoiceInfo;
use crate::Result;

/// Monotonically increasing id for one reading session. Lifecycle events
/// carry the id they belong to so notifications from a superseded or
/// cancelled session can be dropped.
pub type SessionId = u64;

/// A single request to vocalize text
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// BCP 47 tag the text is written in
    pub language: String,
    /// Preferred voice name; None lets the platform choose
    pub voice: Option<String>,
    pub rate: f32,
}

/// Notifications flowing back from the host speech capability
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The voice inventory became available. Fired at most once per page.
    VoicesChanged(Vec<VoiceInfo>),
    /// The utterance actually started speaking
    Started(SessionId),
    /// The utterance ran to natural completion
    Finished(SessionId),
    /// The host reported a playback error
    Errored(SessionId),
    /// Pause acknowledgment; advisory, the pause already took effect
    PauseConfirmed(SessionId),
    /// Resume acknowledgment; advisory
    ResumeConfirmed(SessionId),
}

pub trait SpeechEngine: Send + Sync {
    /// Begin speaking. Implementations cancel whatever was in flight first;
    /// overlapping starts are last-start-wins, never an error.
    fn speak(&mut self, session: SessionId, utterance: &Utterance) -> Result<()>;

    fn pause(&mut self) -> Result<()>;

    fn resume(&mut self) -> Result<()>;

    /// Cancel the in-flight utterance, if any. Must be safe to call idle.
    fn cancel(&mut self) -> Result<()>;
}
