use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Optional on-disk configuration, merged under CLI flags.
///
/// Only environment concerns live here; nothing in this file changes what
/// gets scraped or how failures are handled.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrowserConfig {
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
    #[serde(default = "default_true")]
    pub headless: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            headless: default_true(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}

impl CliConfig {
    /// Load the config file if present, falling back to defaults on any
    /// read or parse problem.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("Warning: Failed to parse config: {err}");
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!("Warning: Failed to read config: {err}");
                Self::default()
            }
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cinecrawl")
            .join("config.toml")
    }
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("data").join("movies_complete_data.csv")
}

fn default_true() -> bool {
    true
}
