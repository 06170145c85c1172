use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::parse_var;

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_shutdown_grace_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Prefix every route is mounted under, e.g. `/yomu`
    #[serde(default)]
    pub base_path: String,
    #[serde(default = "default_shutdown_grace_ms")]
    pub shutdown_grace_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            base_path: String::new(),
            shutdown_grace_ms: default_shutdown_grace_ms(),
        }
    }
}

impl ServerConfig {
    pub fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: var("YOMU_BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: parse_var(var, "YOMU_PORT").unwrap_or(defaults.port),
            base_path: var("YOMU_BASE_PATH")
                .map(|p| normalize_base_path(&p))
                .unwrap_or(defaults.base_path),
            shutdown_grace_ms: parse_var(var, "YOMU_SHUTDOWN_GRACE_MS")
                .unwrap_or(defaults.shutdown_grace_ms),
        }
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }
}

/// `"yomu/"` -> `"/yomu"`, `"/"` -> `""`
pub fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("yomu"), "/yomu");
        assert_eq!(normalize_base_path("/apps/yomu/"), "/apps/yomu");
    }
}
