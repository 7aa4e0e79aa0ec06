//! Voice selection
//!
//! The site's articles are Mandarin, so the preference order is: a
//! Mainland-Chinese voice from the platform's neural engine, any
//! Mainland-Chinese voice, any Chinese voice, else whatever the platform
//! speaks by default. Selection is a pure function over the enumerated
//! voice list so the playback side effects never depend on it being right.

use serde::{Deserialize, Serialize};

/// One voice as enumerated by the host speech capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    /// Display name, e.g. "Microsoft Xiaoxiao Online (Natural)"
    pub name: String,
    /// BCP 47 language tag, e.g. "zh-CN"
    pub language: String,
}

const MAINLAND_CHINESE: &str = "zh-CN";
const NEURAL_ENGINE_MARKER: &str = "Microsoft";

/// Pick the best available Chinese voice, or None for the platform default.
pub fn pick_chinese_voice(voices: &[VoiceInfo]) -> Option<&VoiceInfo> {
    let preferences: [&dyn Fn(&&VoiceInfo) -> bool; 3] = [
        &|v| v.language == MAINLAND_CHINESE && v.name.contains(NEURAL_ENGINE_MARKER),
        &|v| v.language == MAINLAND_CHINESE,
        &|v| v.language.starts_with("zh"),
    ];

    preferences
        .iter()
        .find_map(|wanted| voices.iter().find(|v| wanted(v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(name: &str, language: &str) -> VoiceInfo {
        VoiceInfo {
            name: name.to_string(),
            language: language.to_string(),
        }
    }

    #[test]
    fn test_neural_mainland_voice_wins() {
        let voices = vec![
            voice("Ting-Ting", "zh-CN"),
            voice("Microsoft Xiaoxiao Online (Natural)", "zh-CN"),
            voice("Sin-ji", "zh-HK"),
            voice("Samantha", "en-US"),
        ];
        assert_eq!(
            pick_chinese_voice(&voices).map(|v| v.name.as_str()),
            Some("Microsoft Xiaoxiao Online (Natural)")
        );
    }

    #[test]
    fn test_falls_back_to_plain_mainland_voice() {
        let voices = vec![
            voice("Sin-ji", "zh-HK"),
            voice("Ting-Ting", "zh-CN"),
            voice("Samantha", "en-US"),
        ];
        assert_eq!(
            pick_chinese_voice(&voices).map(|v| v.name.as_str()),
            Some("Ting-Ting")
        );
    }

    #[test]
    fn test_falls_back_to_any_chinese_voice() {
        let voices = vec![voice("Samantha", "en-US"), voice("Sin-ji", "zh-HK")];
        assert_eq!(
            pick_chinese_voice(&voices).map(|v| v.name.as_str()),
            Some("Sin-ji")
        );
    }

    #[test]
    fn test_no_chinese_voice_means_platform_default() {
        let voices = vec![voice("Samantha", "en-US"), voice("Thomas", "fr-FR")];
        assert!(pick_chinese_voice(&voices).is_none());
        assert!(pick_chinese_voice(&[]).is_none());
    }

    #[test]
    fn test_neural_marker_outside_mainland_does_not_count() {
        // A neural voice in the wrong locale loses to a plain zh-CN one
        let voices = vec![
            voice("Microsoft HiuGaai Online (Natural)", "zh-HK"),
            voice("Ting-Ting", "zh-CN"),
        ];
        assert_eq!(
            pick_chinese_voice(&voices).map(|v| v.name.as_str()),
            Some("Ting-Ting")
        );
    }
}
