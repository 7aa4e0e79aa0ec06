//! Reader widget snapshot
//!
//! Everything the page shows for the reader (toggle button glyph and
//! caption, status line, waveform indicator, stop button) is derived from
//! the session state in one place, so the widgets can never disagree.

use serde::Serialize;

use crate::state::ReaderState;

const ICON_IDLE: &str = "🔊";
const ICON_PLAYING: &str = "⏸";
const ICON_PAUSED: &str = "▶";

const LABEL_IDLE: &str = "朗读";
const LABEL_PLAYING: &str = "暂停";
const LABEL_PAUSED: &str = "继续";

const STATUS_PLAYING: &str = "正在朗读…";
const STATUS_PAUSED: &str = "已暂停";
const STATUS_UNSUPPORTED: &str = "当前浏览器不支持语音朗读";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReaderUi {
    /// Toggle button glyph
    pub icon: &'static str,
    /// Toggle button caption
    pub label: &'static str,
    /// Status line under the controls; empty when idle
    pub status: &'static str,
    /// Waveform indicator animates only while speaking
    pub wave_active: bool,
    /// The stop button is visible only while a session exists
    pub stop_visible: bool,
    /// False permanently when the host has no speech capability
    pub enabled: bool,
}

impl ReaderUi {
    pub fn for_state(state: ReaderState) -> Self {
        match state {
            ReaderState::Idle => Self {
                icon: ICON_IDLE,
                label: LABEL_IDLE,
                status: "",
                wave_active: false,
                stop_visible: false,
                enabled: true,
            },
            ReaderState::Playing => Self {
                icon: ICON_PLAYING,
                label: LABEL_PLAYING,
                status: STATUS_PLAYING,
                wave_active: true,
                stop_visible: true,
                enabled: true,
            },
            ReaderState::Paused => Self {
                icon: ICON_PAUSED,
                label: LABEL_PAUSED,
                status: STATUS_PAUSED,
                wave_active: false,
                stop_visible: true,
                enabled: true,
            },
        }
    }

    /// Permanent state when the capability check failed at initialization
    pub fn unsupported() -> Self {
        Self {
            icon: ICON_IDLE,
            label: LABEL_IDLE,
            status: STATUS_UNSUPPORTED,
            wave_active: false,
            stop_visible: false,
            enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playing_shows_stop_and_wave() {
        let ui = ReaderUi::for_state(ReaderState::Playing);
        assert!(ui.wave_active);
        assert!(ui.stop_visible);
        assert_eq!(ui.label, "暂停");
        assert_eq!(ui.status, "正在朗读…");
    }

    #[test]
    fn test_paused_keeps_stop_but_not_wave() {
        let ui = ReaderUi::for_state(ReaderState::Paused);
        assert!(!ui.wave_active);
        assert!(ui.stop_visible);
        assert_eq!(ui.label, "继续");
    }

    #[test]
    fn test_idle_clears_everything() {
        let ui = ReaderUi::for_state(ReaderState::Idle);
        assert!(!ui.wave_active);
        assert!(!ui.stop_visible);
        assert_eq!(ui.status, "");
        assert_eq!(ui.icon, "🔊");
    }

    #[test]
    fn test_unsupported_is_disabled_with_fixed_message() {
        let ui = ReaderUi::unsupported();
        assert!(!ui.enabled);
        assert_eq!(ui.status, "当前浏览器不支持语音朗读");
    }
}
