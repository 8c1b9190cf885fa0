//! Declarative case suites.
//!
//! ```toml
//! [[case]]
//! name = "can take attributes"
//! parts = ['<div class="strong" >', "<br/>", "</div>"]
//! matches = ['<div class="strong" ><br/></div>']
//! rejects = ["<div><span/></div>"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    #[serde(default, rename = "case")]
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub name: String,
    /// Expected tokens, in order.
    pub parts: Vec<String>,
    /// Candidates that must match.
    #[serde(default)]
    pub matches: Vec<String>,
    /// Candidates that must not match.
    #[serde(default)]
    pub rejects: Vec<String>,
}

impl Case {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.rejects.is_empty()
    }
}

impl Suite {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigReadError {
                path: path.to_path_buf(),
                source,
            })?;

        let suite = Self::parse(&content).map_err(|source| ConfigError::ConfigParseError {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Loaded {} cases from {}", suite.cases.len(), path.display());
        Ok(suite)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
