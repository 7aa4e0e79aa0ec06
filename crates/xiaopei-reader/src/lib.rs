//! Xiaopei Article Reader
//!
//! Reads a post's body text aloud through the host speech capability.
//! One controller instance owns the whole session: exactly one reading
//! session exists at a time, a new start cancels the previous one outright,
//! and every widget (toggle button, stop button, status line, waveform)
//! renders from the same state snapshot.

mod controller;
mod engine;
mod error;
mod state;
mod ui;
mod voice;

pub use controller::ReaderController;
pub use engine::{EngineEvent, SessionId, SpeechEngine, Utterance};
pub use error::ReaderError;
pub use state::ReaderState;
pub use ui::ReaderUi;
pub use voice::{pick_chinese_voice, VoiceInfo};

pub type Result<T> = std::result::Result<T, ReaderError>;
