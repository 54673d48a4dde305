//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::query::TextMatch;

/// Environment variable naming the configuration file to load
pub const CONFIG_ENV_VAR: &str = "MAESTER_CONFIG";

/// Server configuration
///
/// Every field has a default, so a partial YAML file (or none at all) is
/// enough to start the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// JSON file of character drafts loaded at startup
    ///
    /// A missing file is not an error; the server starts with an empty
    /// store and logs a warning.
    pub seed_path: String,

    /// How text equality filters compare values
    pub text_match: TextMatch,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            seed_path: "data/characters.json".to_string(),
            text_match: TextMatch::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from the file named by `MAESTER_CONFIG`
    ///
    /// Falls back to the defaults when the variable is unset.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_yaml_file(&path),
            Err(_) => Ok(Self::default()),
        }
    }
}
