use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "https://api.a0.dev/ai/llm".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_word_count() -> usize {
    5
}

fn default_system_prompt() -> String {
    "You are an AI assistant that helps language learners with English vocabulary. \
     Generate relevant English vocabulary words with Vietnamese translations based on \
     the user's topic or interest."
        .to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AiConfig {
    /// When disabled every request resolves to the placeholder words
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Text-generation endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// How many words to ask for
    #[serde(default = "default_word_count")]
    pub word_count: usize,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
            word_count: default_word_count(),
            system_prompt: default_system_prompt(),
        }
    }
}
