use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod suite;

pub use suite::{Case, Suite};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    ConfigReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ConfigParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid suite glob {pattern:?}: {source}")]
    InvalidGlob {
        pattern: String,
        source: glob::PatternError,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Glob patterns naming suite files. `~` and `$VARS` are expanded.
    #[serde(default)]
    pub suites: Vec<String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                path: config_path.to_path_buf(),
                source,
            })?;

        log::debug!(
            "Loaded {} suite patterns from {}",
            config.suites.len(),
            config_path.display()
        );
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/xml-parts");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands every suite glob and returns the matching files, sorted and
    /// without duplicates.
    pub fn suite_paths(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut paths = BTreeSet::new();
        for pattern in &self.suites {
            let expanded = Self::expand_pattern(pattern);
            let entries = glob::glob(&expanded).map_err(|source| ConfigError::InvalidGlob {
                pattern: expanded.clone(),
                source,
            })?;

            for entry in entries {
                match entry {
                    Ok(path) => {
                        paths.insert(path);
                    }
                    Err(e) => log::warn!("Skipping unreadable suite path: {e}"),
                }
            }
        }
        Ok(paths.into_iter().collect())
    }

    fn expand_pattern(pattern: &str) -> String {
        match shellexpand::full(pattern) {
            Ok(expanded) => expanded.into_owned(),
            Err(_) => pattern.to_string(),
        }
    }
}
