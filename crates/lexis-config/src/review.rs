use serde::{Deserialize, Serialize};

fn default_excellent_percent() -> u32 {
    80
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ReviewConfig {
    /// Score percentage at or above which a run is rated excellent
    #[serde(default = "default_excellent_percent")]
    pub excellent_percent: u32,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            excellent_percent: default_excellent_percent(),
        }
    }
}
