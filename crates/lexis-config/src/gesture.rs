use serde::{Deserialize, Serialize};

fn default_swipe_threshold() -> f32 {
    120.0
}

fn default_max_rotation_deg() -> f32 {
    10.0
}

fn default_screen_width() -> f32 {
    390.0
}

fn default_swipe_duration_ms() -> u64 {
    300
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GestureConfig {
    /// Horizontal release distance (px) past which a drag counts as a swipe
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f32,
    /// Card tilt at half a screen width of drag
    #[serde(default = "default_max_rotation_deg")]
    pub max_rotation_deg: f32,
    #[serde(default = "default_screen_width")]
    pub screen_width: f32,
    /// Swipe-out animation length
    #[serde(default = "default_swipe_duration_ms")]
    pub swipe_duration_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            max_rotation_deg: default_max_rotation_deg(),
            screen_width: default_screen_width(),
            swipe_duration_ms: default_swipe_duration_ms(),
        }
    }
}
