use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::parse_var;

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("assets/dict/system.dic.zst")
}

fn default_preload() -> bool {
    false
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Compiled vibrato system dictionary, optionally zstd-compressed
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,
    /// Build the analyzer at startup instead of on the first request
    #[serde(default = "default_preload")]
    pub preload: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            dictionary_path: default_dictionary_path(),
            preload: default_preload(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            dictionary_path: var("YOMU_DICT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.dictionary_path),
            preload: parse_var(var, "YOMU_PRELOAD_ANALYZER").unwrap_or(defaults.preload),
        }
    }
}
