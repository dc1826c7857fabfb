use std::fs;
use std::path::Path;

use anyhow::Context;
use lexis_config::Config;
use serde::{Deserialize, Serialize};

/// A named configuration stored as JSON
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Load the config stored in a profile file
pub fn load_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("parsing profile {}", path.display()))?;

    tracing::info!(profile = %profile.name, "loaded profile");
    Ok(profile.value)
}

/// Write a profile built from the current environment, named after the file
pub fn write_profile(path: &Path, config: Config) -> anyhow::Result<()> {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "main".to_string());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let profile = Profile {
        name,
        value: config,
    };
    fs::write(path, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!(path = %path.display(), "wrote profile");
    Ok(())
}
