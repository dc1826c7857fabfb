use std::env;

use serde::{Deserialize, Serialize};

use self::ai::AiConfig;
use self::gesture::GestureConfig;
use self::pronunciation::PronunciationConfig;
use self::review::ReviewConfig;
use self::ui::UiConfig;

pub mod ai;
pub mod gesture;
pub mod pronunciation;
pub mod review;
pub mod ui;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ai: AiConfig,
    pub gesture: GestureConfig,
    pub review: ReviewConfig,
    pub pronunciation: PronunciationConfig,
    pub ui: UiConfig,

    /// Capacity of the shell -> event loop channel
    pub input_capacity: usize,
    /// Capacity of the event loop -> shell channel
    pub frame_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let mut ai = AiConfig::default();
        if let Ok(url) = env::var("LEXIS_AI_URL") {
            ai.api_url = url;
        }
        if let Some(timeout) = env::var("LEXIS_AI_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            ai.timeout_seconds = timeout;
        }
        if let Some(enabled) = env::var("LEXIS_AI_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            ai.enabled = enabled;
        }

        let mut pronunciation = PronunciationConfig::default();
        if let Some(delay) = env::var("LEXIS_ANALYSIS_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            pronunciation.analysis_delay_ms = delay;
        }

        let mut gesture = GestureConfig::default();
        if let Some(width) = env::var("LEXIS_SCREEN_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            gesture.screen_width = width;
        }

        let input_capacity = env::var("LEXIS_INPUT_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        let frame_capacity = env::var("LEXIS_FRAME_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(128);

        Config {
            ai,
            gesture,
            review: ReviewConfig::default(),
            pronunciation,
            ui: UiConfig::default(),

            input_capacity,
            frame_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            gesture: GestureConfig::default(),
            review: ReviewConfig::default(),
            pronunciation: PronunciationConfig::default(),
            ui: UiConfig::default(),
            input_capacity: 64,
            frame_capacity: 128,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_profile_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "gesture": { "swipe_threshold": 90.0 } }"#).unwrap();

        assert_eq!(config.gesture.swipe_threshold, 90.0);
        assert_eq!(config.gesture.swipe_duration_ms, 300);
        assert_eq!(config.review.excellent_percent, 80);
        assert_eq!(config.pronunciation.analysis_delay_ms, 2000);
        assert_eq!(config.ai.api_url, "https://api.a0.dev/ai/llm");
        assert_eq!(config.frame_capacity, 128);
    }
}
