use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_DATA_FILE: &str = "catches.json";

/// Optional `config.toml` in the data directory. Everything has a default;
/// a missing file is not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// File name of the catch log inside the data directory.
    pub data_file: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn data_file(&self) -> &str {
        self.data_file.as_deref().unwrap_or(DEFAULT_DATA_FILE)
    }
}
