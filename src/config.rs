use crate::constants::{CONFIG_FILE, CSV_FILE, MARKDOWN_FILE, MARKDOWN_TITLE, SOURCE_URL};
use crate::error::{Result, ToukijoError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub source_url: String,
    pub csv_path: PathBuf,
    pub markdown_path: PathBuf,
    pub markdown_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            csv_path: PathBuf::from(CSV_FILE),
            markdown_path: PathBuf::from(MARKDOWN_FILE),
            markdown_title: MARKDOWN_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Loads `toukijo.toml` from the working directory, or the defaults if it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path).map_err(|e| {
            ToukijoError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        if config.source_url.trim().is_empty() {
            return Err(ToukijoError::Config("source_url must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Same configuration with both output files placed under `dir`.
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.csv_path = dir.join(&self.csv_path);
        self.markdown_path = dir.join(&self.markdown_path);
        self
    }
}
