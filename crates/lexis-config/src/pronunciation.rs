use serde::{Deserialize, Serialize};

fn default_analysis_delay_ms() -> u64 {
    2000
}

fn default_min_score() -> u8 {
    60
}

fn default_max_score() -> u8 {
    95
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PronunciationConfig {
    /// Simulated analysis time after a recording stops
    #[serde(default = "default_analysis_delay_ms")]
    pub analysis_delay_ms: u64,
    #[serde(default = "default_min_score")]
    pub min_score: u8,
    #[serde(default = "default_max_score")]
    pub max_score: u8,
}

impl Default for PronunciationConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: default_analysis_delay_ms(),
            min_score: default_min_score(),
            max_score: default_max_score(),
        }
    }
}
