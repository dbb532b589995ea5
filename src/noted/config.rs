use crate::error::{NotedError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".noted.json";
const DEFAULT_DATA_FILE: &str = "notes.json";

/// Every key `get`/`set` understands, in display order.
pub const CONFIG_KEYS: &[&str] = &["data-file", "pretty"];

/// Configuration for noted, stored in `.noted.json` in the working directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotedConfig {
    /// Path of the notes file, relative to the working directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Pretty-print the notes file
    #[serde(default)]
    pub pretty: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for NotedConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            pretty: false,
        }
    }
}

impl NotedConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotedError::Io)?;
        let config: NotedConfig =
            serde_json::from_str(&content).map_err(NotedError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotedError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotedError::Serialization)?;
        fs::write(config_path, content).map_err(NotedError::Io)?;
        Ok(())
    }

    /// Resolve the data file against `base_dir`.
    pub fn data_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.data_file)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "pretty" => Some(self.pretty.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = value.trim().to_string();
            }
            "pretty" => {
                self.pretty = match value {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => return Err(format!("Invalid boolean for pretty: {}", other)),
                };
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}
