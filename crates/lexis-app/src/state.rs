use std::sync::Arc;

use lexis_config::Config;
use lexis_suggest::WordSuggester;
use tokio::sync::RwLock;

use crate::audio::AudioDevice;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub suggester: Arc<dyn WordSuggester>,
    pub audio: Arc<dyn AudioDevice>,
}

impl AppState {
    pub fn new(
        config: Config,
        suggester: Arc<dyn WordSuggester>,
        audio: Arc<dyn AudioDevice>,
    ) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            suggester,
            audio,
        }
    }
}
