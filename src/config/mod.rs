//! Configuration loading and management

use crate::core::page::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Service configuration
///
/// Every field has a default, so a partial YAML file (or none at all)
/// yields a runnable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Page size applied when a request names none
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Upper bound a request's limit is clamped to
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Whether to attach a permissive CORS layer
    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> usize {
    MAX_PAGE_SIZE
}

fn default_cors_enabled() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            cors_enabled: default_cors_enabled(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
