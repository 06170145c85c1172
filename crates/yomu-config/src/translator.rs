use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::parse_var;

fn default_from_lang() -> String {
    "ja".to_string()
}

fn default_to_lang() -> String {
    "en".to_string()
}

fn default_api_url() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

/// Settings for the MyMemory translation endpoint
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Hard upper bound for a single translation call
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            api_url: default_api_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl TranslatorConfig {
    pub fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            api_url: var("YOMU_TRANSLATOR_URL").unwrap_or(defaults.api_url),
            timeout_ms: parse_var(var, "YOMU_TRANSLATOR_TIMEOUT_MS")
                .unwrap_or(defaults.timeout_ms),
            user_agent: var("YOMU_USER_AGENT").unwrap_or(defaults.user_agent),
            ..defaults
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// MyMemory style `langpair` value, e.g. `ja|en`
    pub fn lang_pair(&self) -> String {
        format!("{}|{}", self.from_lang, self.to_lang)
    }
}
