//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the roll-call API (e.g. "http://localhost:4001/api")
    pub api_base_url: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Shown in CLI output
    #[serde(default)]
    pub staff_name: Option<String>,
}

/// Expands tilde in path and returns the full path
pub fn expand_config_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let path = expand_config_path(path);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        Ok(config)
    }
}
