//! Read-aloud commands
//!
//! The webview reports the speech capability once at startup, sends the
//! post body HTML with each toggle, and relays the speech lifecycle back.
//! Text extraction happens here so the controller only ever sees plain
//! trimmed text.

use scraper::{Html, Selector};
use tauri::{State, WebviewWindow};

use super::navigation::CommandResult;
use crate::speech::WebviewSpeech;
use crate::state::AppState;
use xiaopei_core::{EngineEvent, ReaderUi, SessionId, SpeechEngine, VoiceInfo};

#[tauri::command]
pub fn reader_init(
    window: WebviewWindow,
    state: State<AppState>,
    supported: bool,
) -> CommandResult<ReaderUi> {
    match state.with_site(|site| {
        let engine: Option<Box<dyn SpeechEngine>> = if supported && site.reader_enabled() {
            Some(Box::new(WebviewSpeech::new(window.clone())))
        } else {
            None
        };
        site.set_reader_engine(engine);
        Ok(site.reader_ui())
    }) {
        Ok(ui) => CommandResult::ok(ui),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn reader_toggle(state: State<AppState>, article_html: String) -> CommandResult<ReaderUi> {
    let text = extract_article_text(&article_html);

    match state.with_site(|site| {
        if !site.reader_enabled() {
            return Ok(site.reader_ui());
        }
        site.reader_toggle(&text)
    }) {
        Ok(ui) => CommandResult::ok(ui),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn reader_stop(state: State<AppState>) -> CommandResult<ReaderUi> {
    match state.with_site(|site| Ok(site.reader_stop())) {
        Ok(ui) => CommandResult::ok(ui),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn reader_voices_changed(
    state: State<AppState>,
    voices: Vec<VoiceInfo>,
) -> CommandResult<ReaderUi> {
    match state.with_site(|site| site.reader_event(EngineEvent::VoicesChanged(voices))) {
        Ok(ui) => CommandResult::ok(ui),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn reader_playback_event(
    state: State<AppState>,
    kind: String,
    session: SessionId,
) -> CommandResult<ReaderUi> {
    let event = match kind.as_str() {
        "started" => EngineEvent::Started(session),
        "finished" => EngineEvent::Finished(session),
        "errored" => EngineEvent::Errored(session),
        "paused" => EngineEvent::PauseConfirmed(session),
        "resumed" => EngineEvent::ResumeConfirmed(session),
        other => return CommandResult::err(format!("Unknown playback event: {other}")),
    };

    match state.with_site(|site| site.reader_event(event)) {
        Ok(ui) => CommandResult::ok(ui),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Pull the readable text out of the post body, the way a reader sees it:
/// block elements in document order, whitespace collapsed, trimmed.
fn extract_article_text(html: &str) -> String {
    let doc = Html::parse_document(html);

    let block_sel = match Selector::parse("h1, h2, h3, p, blockquote, li") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    let mut blocks: Vec<String> = Vec::new();
    for el in doc.select(&block_sel) {
        let text = el.text().collect::<Vec<_>>().join(" ");
        let cleaned = normalize_whitespace(&text);
        if !cleaned.is_empty() {
            blocks.push(cleaned);
        }
    }

    // Markup without block structure still gets read
    if blocks.is_empty() {
        let root = doc.root_element();
        let text = root.text().collect::<Vec<_>>().join(" ");
        return normalize_whitespace(&text);
    }

    blocks.join("\n")
}

fn normalize_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.push(ch);
            last_space = false;
        }
    }
    out.trim().to_string()
}
