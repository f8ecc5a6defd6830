use super::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load configuration from file or return defaults
pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_path())
}

/// Load configuration from an explicit path, falling back to defaults when it is missing
pub fn load_config_from(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        tracing::debug!("No config at {:?}, using defaults", config_path);
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config {:?}", config_path))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config {:?}", config_path))?;
    Ok(config)
}

/// Get the path to the config file
fn get_config_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "scriptgen")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("~/.config/scriptgen/config.toml"))
}
