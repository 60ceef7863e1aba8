//! Site configuration loaded from `kiln.toml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default name of the configuration file
pub const CONFIG_FILE: &str = "kiln.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the Markdown pages
    pub content_dir: PathBuf,
    /// Directory mirrored verbatim into the output
    pub static_dir: PathBuf,
    /// Directory the site is written to (cleared on every build)
    pub output_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    pub template: PathBuf,
    /// Prefix replacing the leading `/` of root-relative links
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
            base_path: "/".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if it does not exist
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `kiln.toml` from the working directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(CONFIG_FILE)
    }
}
