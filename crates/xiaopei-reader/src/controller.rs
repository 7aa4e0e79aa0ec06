//! Reader controller
//!
//! Owns the single reading session for a page. All mutation goes through
//! the four operations below plus [`handle_event`]; no other component
//! touches session state.
//!
//! [`handle_event`]: ReaderController::handle_event

use crate::engine::{EngineEvent, SessionId, SpeechEngine, Utterance};
use crate::error::ReaderError;
use crate::state::ReaderState;
use crate::ui::ReaderUi;
use crate::voice::{pick_chinese_voice, VoiceInfo};
use crate::Result;

const ARTICLE_LANGUAGE: &str = "zh-CN";
const READING_RATE: f32 = 1.0;

pub struct ReaderController {
    /// None when the capability check failed at initialization; the control
    /// is then permanently disabled and every operation is a no-op.
    engine: Option<Box<dyn SpeechEngine>>,
    state: ReaderState,
    voices: Vec<VoiceInfo>,
    /// The one-shot voices-changed notification has fired
    voices_known: bool,
    /// Text waiting for the voice inventory; consumed at most once
    pending_text: Option<String>,
    /// Current session id; bumped on every start and every cancellation so
    /// late events from a superseded session are dropped.
    session: SessionId,
}

impl ReaderController {
    pub fn new(engine: Option<Box<dyn SpeechEngine>>) -> Self {
        if engine.is_none() {
            tracing::info!("Speech capability unavailable, reader disabled");
        }

        Self {
            engine,
            state: ReaderState::Idle,
            voices: Vec::new(),
            voices_known: false,
            pending_text: None,
            session: 0,
        }
    }

    pub fn supported(&self) -> bool {
        self.engine.is_some()
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Widget snapshot for the current state
    pub fn ui(&self) -> ReaderUi {
        if self.engine.is_none() {
            ReaderUi::unsupported()
        } else {
            ReaderUi::for_state(self.state)
        }
    }

    /// First engagement while idle. If the platform has not reported its
    /// voices yet, the start is deferred until the one-shot voices-changed
    /// notification; otherwise the session starts immediately.
    pub fn activate(&mut self, article_text: &str) -> Result<()> {
        if self.engine.is_none() || self.state.is_active() {
            return Ok(());
        }

        let text = article_text.trim();
        if text.is_empty() {
            return Ok(());
        }

        if self.voices.is_empty() && !self.voices_known {
            if self.pending_text.is_none() {
                tracing::debug!("Voice inventory not ready, deferring start");
                self.pending_text = Some(text.to_string());
            }
            return Ok(());
        }

        self.start(text)
    }

    /// Begin a new session, superseding any in-flight one (last-start-wins).
    /// Empty text is a no-op.
    pub fn start(&mut self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        let engine = self.engine.as_mut().ok_or(ReaderError::Unavailable)?;

        if let Err(e) = engine.cancel() {
            tracing::warn!(error = %e, "Cancelling previous utterance failed");
        }
        self.session += 1;

        let utterance = Utterance {
            text: text.to_string(),
            language: ARTICLE_LANGUAGE.to_string(),
            voice: pick_chinese_voice(&self.voices).map(|v| v.name.clone()),
            rate: READING_RATE,
        };

        if let Err(e) = engine.speak(self.session, &utterance) {
            self.state = ReaderState::Idle;
            return Err(e);
        }

        tracing::debug!(
            session = self.session,
            voice = utterance.voice.as_deref().unwrap_or("<default>"),
            chars = utterance.text.chars().count(),
            "Reading session started"
        );
        self.state = ReaderState::Playing;
        Ok(())
    }

    /// The single visible button: starts while idle, pauses while playing,
    /// resumes while paused.
    pub fn toggle(&mut self, article_text: &str) -> Result<()> {
        match self.state {
            ReaderState::Idle => self.activate(article_text),
            ReaderState::Playing => {
                if let Some(engine) = self.engine.as_mut() {
                    if let Err(e) = engine.pause() {
                        tracing::warn!(error = %e, "Pause request failed");
                    }
                }
                // The host's pause acknowledgment is unreliable, so the
                // paused state is applied at request time.
                self.state = ReaderState::Paused;
                Ok(())
            }
            ReaderState::Paused => {
                if let Some(engine) = self.engine.as_mut() {
                    if let Err(e) = engine.resume() {
                        tracing::warn!(error = %e, "Resume request failed");
                    }
                }
                self.state = ReaderState::Playing;
                Ok(())
            }
        }
    }

    /// Cancel the session outright and return to Idle. Safe to call idle.
    pub fn stop(&mut self) {
        self.pending_text = None;

        if !self.state.is_active() {
            return;
        }

        if let Some(engine) = self.engine.as_mut() {
            if let Err(e) = engine.cancel() {
                tracing::warn!(error = %e, "Cancel failed");
            }
        }

        // Invalidate in-flight lifecycle events from the cancelled session
        self.session += 1;
        self.state = ReaderState::Idle;
        tracing::debug!("Reading session stopped");
    }

    /// Page teardown; the session must not outlive the page.
    pub fn teardown(&mut self) {
        self.stop();
    }

    /// Feed a lifecycle notification from the engine. Events carrying a
    /// superseded session id are dropped without touching state.
    pub fn handle_event(&mut self, event: EngineEvent) -> Result<()> {
        match event {
            EngineEvent::VoicesChanged(voices) => {
                tracing::debug!(count = voices.len(), "Voice inventory available");
                self.voices = voices;
                self.voices_known = true;
                if let Some(text) = self.pending_text.take() {
                    return self.start(&text);
                }
                Ok(())
            }
            EngineEvent::Started(id) => {
                // Playing was already applied when the start was requested
                if self.is_current(id) {
                    tracing::debug!(session = id, "Utterance started");
                }
                Ok(())
            }
            EngineEvent::Finished(id) | EngineEvent::Errored(id) => {
                if !self.is_current(id) {
                    return Ok(());
                }
                // An error collapses to Idle exactly like completion
                if self.state.is_active() {
                    self.state = ReaderState::Idle;
                    tracing::debug!(session = id, "Reading session ended");
                }
                Ok(())
            }
            EngineEvent::PauseConfirmed(id) | EngineEvent::ResumeConfirmed(id) => {
                // Advisory: the transition already happened at request time,
                // and a late acknowledgment must not fight a newer state.
                if self.is_current(id) {
                    tracing::trace!(session = id, state = %self.state, "Playback acknowledgment");
                }
                Ok(())
            }
        }
    }

    fn is_current(&self, id: SessionId) -> bool {
        if id != self.session {
            tracing::debug!(event_session = id, current = self.session, "Dropping stale event");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Speak(SessionId, String, Option<String>),
        Pause,
        Resume,
        Cancel,
    }

    struct FakeEngine {
        calls: Arc<Mutex<Vec<Call>>>,
    }

    impl SpeechEngine for FakeEngine {
        fn speak(&mut self, session: SessionId, utterance: &Utterance) -> Result<()> {
            self.calls.lock().unwrap().push(Call::Speak(
                session,
                utterance.text.clone(),
                utterance.voice.clone(),
            ));
            Ok(())
        }

        fn pause(&mut self) -> Result<()> {
            self.calls.lock().unwrap().push(Call::Pause);
            Ok(())
        }

        fn resume(&mut self) -> Result<()> {
            self.calls.lock().unwrap().push(Call::Resume);
            Ok(())
        }

        fn cancel(&mut self) -> Result<()> {
            self.calls.lock().unwrap().push(Call::Cancel);
            Ok(())
        }
    }

    fn controller() -> (ReaderController, Arc<Mutex<Vec<Call>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut controller = ReaderController::new(Some(Box::new(FakeEngine {
            calls: Arc::clone(&calls),
        })));
        controller
            .handle_event(EngineEvent::VoicesChanged(vec![VoiceInfo {
                name: "Microsoft Xiaoxiao Online (Natural)".to_string(),
                language: "zh-CN".to_string(),
            }]))
            .unwrap();
        (controller, calls)
    }

    #[test]
    fn test_toggle_cycle_matches_transition_table() {
        let (mut reader, _) = controller();
        assert_eq!(reader.state(), ReaderState::Idle);

        reader.toggle("宠物健康指南").unwrap();
        assert_eq!(reader.state(), ReaderState::Playing);

        reader.toggle("宠物健康指南").unwrap();
        assert_eq!(reader.state(), ReaderState::Paused);

        reader.toggle("宠物健康指南").unwrap();
        assert_eq!(reader.state(), ReaderState::Playing);

        reader.toggle("宠物健康指南").unwrap();
        assert_eq!(reader.state(), ReaderState::Paused);
    }

    #[test]
    fn test_toggle_issues_pause_and_resume() {
        let (mut reader, calls) = controller();
        reader.toggle("text").unwrap();
        reader.toggle("text").unwrap();
        reader.toggle("text").unwrap();

        let calls = calls.lock().unwrap();
        assert!(calls.contains(&Call::Pause));
        assert!(calls.contains(&Call::Resume));
    }

    #[test]
    fn test_stop_is_idempotent_from_any_state() {
        let (mut reader, _) = controller();
        reader.toggle("text").unwrap();
        reader.toggle("text").unwrap(); // paused

        reader.stop();
        assert_eq!(reader.state(), ReaderState::Idle);
        let ui_once = reader.ui();

        reader.stop();
        assert_eq!(reader.state(), ReaderState::Idle);
        assert_eq!(reader.ui(), ui_once);
    }

    #[test]
    fn test_start_supersedes_previous_session() {
        let (mut reader, calls) = controller();
        reader.start("第一篇").unwrap();
        let first = reader.session();

        reader.start("第二篇").unwrap();
        assert_eq!(reader.state(), ReaderState::Playing);
        assert_ne!(reader.session(), first);

        // The superseded session's completion must not alter state
        reader.handle_event(EngineEvent::Finished(first)).unwrap();
        assert_eq!(reader.state(), ReaderState::Playing);

        // The live session's completion does
        reader
            .handle_event(EngineEvent::Finished(reader.session()))
            .unwrap();
        assert_eq!(reader.state(), ReaderState::Idle);

        // Each start cancelled whatever was in flight first
        let calls = calls.lock().unwrap();
        assert_eq!(calls.iter().filter(|c| **c == Call::Cancel).count(), 2);
    }

    #[test]
    fn test_stale_started_after_stop_does_not_resurrect() {
        let (mut reader, _) = controller();
        reader.start("text").unwrap();
        let session = reader.session();

        reader.stop();
        reader.handle_event(EngineEvent::Started(session)).unwrap();
        assert_eq!(reader.state(), ReaderState::Idle);
    }

    #[test]
    fn test_error_collapses_to_idle_like_completion() {
        let (mut reader, _) = controller();
        reader.start("text").unwrap();
        reader
            .handle_event(EngineEvent::Errored(reader.session()))
            .unwrap();
        assert_eq!(reader.state(), ReaderState::Idle);
    }

    #[test]
    fn test_late_pause_ack_is_idempotent() {
        let (mut reader, _) = controller();
        reader.toggle("text").unwrap();
        reader.toggle("text").unwrap(); // paused, applied optimistically
        let session = reader.session();

        reader
            .handle_event(EngineEvent::PauseConfirmed(session))
            .unwrap();
        assert_eq!(reader.state(), ReaderState::Paused);

        // Ack arriving after the user already resumed must not re-pause
        reader.toggle("text").unwrap();
        reader
            .handle_event(EngineEvent::PauseConfirmed(session))
            .unwrap();
        assert_eq!(reader.state(), ReaderState::Playing);
    }

    #[test]
    fn test_empty_article_is_a_noop() {
        let (mut reader, calls) = controller();
        reader.activate("   \n\t ").unwrap();
        assert_eq!(reader.state(), ReaderState::Idle);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_activation_defers_until_voices_arrive() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut reader = ReaderController::new(Some(Box::new(FakeEngine {
            calls: Arc::clone(&calls),
        })));

        reader.activate("晚到的声音").unwrap();
        assert_eq!(reader.state(), ReaderState::Idle);
        assert!(calls.lock().unwrap().is_empty());

        reader
            .handle_event(EngineEvent::VoicesChanged(vec![VoiceInfo {
                name: "Ting-Ting".to_string(),
                language: "zh-CN".to_string(),
            }]))
            .unwrap();
        assert_eq!(reader.state(), ReaderState::Playing);

        // The deferred start fires at most once
        reader.stop();
        reader
            .handle_event(EngineEvent::VoicesChanged(Vec::new()))
            .unwrap();
        assert_eq!(reader.state(), ReaderState::Idle);
    }

    #[test]
    fn test_selected_voice_reaches_the_engine() {
        let (mut reader, calls) = controller();
        reader.start("text").unwrap();

        let calls = calls.lock().unwrap();
        match calls.last() {
            Some(Call::Speak(_, _, voice)) => {
                assert_eq!(
                    voice.as_deref(),
                    Some("Microsoft Xiaoxiao Online (Natural)")
                );
            }
            other => panic!("Expected a speak call, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_host_disables_everything() {
        let mut reader = ReaderController::new(None);
        assert!(!reader.supported());

        reader.activate("text").unwrap();
        reader.toggle("text").unwrap();
        assert_eq!(reader.state(), ReaderState::Idle);

        let ui = reader.ui();
        assert!(!ui.enabled);
        assert_eq!(ui.status, "当前浏览器不支持语音朗读");
    }

    #[test]
    fn test_empty_voice_inventory_uses_platform_default() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut reader = ReaderController::new(Some(Box::new(FakeEngine {
            calls: Arc::clone(&calls),
        })));
        reader
            .handle_event(EngineEvent::VoicesChanged(Vec::new()))
            .unwrap();

        reader.start("text").unwrap();
        let calls = calls.lock().unwrap();
        match calls.last() {
            Some(Call::Speak(_, _, voice)) => assert!(voice.is_none()),
            other => panic!("Expected a speak call, got {:?}", other),
        }
    }
}
