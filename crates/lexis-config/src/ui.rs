use serde::{Deserialize, Serialize};

fn default_username() -> String {
    "Học viên".to_string()
}

fn default_daily_goal() -> u32 {
    80
}

fn default_frame_width() -> usize {
    48
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_username")]
    pub username: String,
    /// Words per day
    #[serde(default = "default_daily_goal")]
    pub daily_goal: u32,
    /// Width of rules and progress bars in rendered frames
    #[serde(default = "default_frame_width")]
    pub frame_width: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            daily_goal: default_daily_goal(),
            frame_width: default_frame_width(),
        }
    }
}
