//! Webview speech bridge
//!
//! The platform's speech synthesis lives in the webview (that is where the
//! neural Mandarin voices are), so the engine side of the reader is a thin
//! event bridge: control flows out as window events, lifecycle
//! notifications come back through the reader commands.

use serde::Serialize;
use tauri::{Emitter, WebviewWindow};

use xiaopei_core::{ReaderError, SessionId, SpeechEngine, Utterance};

#[derive(Debug, Clone, Serialize)]
struct SpeakPayload<'a> {
    session: SessionId,
    text: &'a str,
    language: &'a str,
    voice: Option<&'a str>,
    rate: f32,
}

pub struct WebviewSpeech {
    window: WebviewWindow,
}

impl WebviewSpeech {
    pub fn new(window: WebviewWindow) -> Self {
        Self { window }
    }

    fn emit<P: Serialize + Clone>(&self, event: &str, payload: P) -> Result<(), ReaderError> {
        self.window
            .emit(event, payload)
            .map_err(|e| ReaderError::Engine(e.to_string()))
    }
}

impl SpeechEngine for WebviewSpeech {
    fn speak(&mut self, session: SessionId, utterance: &Utterance) -> Result<(), ReaderError> {
        self.emit(
            "reader-speak",
            SpeakPayload {
                session,
                text: &utterance.text,
                language: &utterance.language,
                voice: utterance.voice.as_deref(),
                rate: utterance.rate,
            },
        )
    }

    fn pause(&mut self) -> Result<(), ReaderError> {
        self.emit("reader-pause", ())
    }

    fn resume(&mut self) -> Result<(), ReaderError> {
        self.emit("reader-resume", ())
    }

    fn cancel(&mut self) -> Result<(), ReaderError> {
        self.emit("reader-cancel", ())
    }
}
