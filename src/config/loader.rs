// Configuration loader
// Loads settings from --config or ./shader-embed.toml, falling back to defaults

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::DEFAULT_CONFIG_FILE;
use super::settings::EmbedConfig;

/// Load configuration for a run.
///
/// An explicit path must exist. Without one, `./shader-embed.toml` is used
/// when present and defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<EmbedConfig> {
    match explicit {
        Some(path) => load_from_file(path),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                load_from_file(&default_path)
            } else {
                tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                Ok(EmbedConfig::default())
            }
        }
    }
}

fn load_from_file(path: &Path) -> Result<EmbedConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: EmbedConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?config, "Loaded config");
    Ok(config)
}
