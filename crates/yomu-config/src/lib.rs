use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::analyzer::AnalyzerConfig;
use self::server::ServerConfig;
use self::translator::TranslatorConfig;

pub mod analyzer;
pub mod server;
pub mod translator;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub analyzer: AnalyzerConfig,
    pub translator: TranslatorConfig,
}

impl Config {
    /// Build config from process environment, falling back to defaults
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build config from an arbitrary variable source
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            server: ServerConfig::from_vars(&var),
            analyzer: AnalyzerConfig::from_vars(&var),
            translator: TranslatorConfig::from_vars(&var),
        }
    }

    /// Load config from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Parse an optional variable, ignoring values that don't parse
pub(crate) fn parse_var<T: std::str::FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    var(key).and_then(|v| v.trim().parse().ok())
}
