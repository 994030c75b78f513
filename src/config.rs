// src/config.rs
// Embedder-facing configuration.
//
// Resolution order mirrors the rest of our config handling:
// 1) $NEWS_API_BASE_URL
// 2) config/overlay.toml ([api] base_url)
// 3) built-in default

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const ENV_BASE_URL: &str = "NEWS_API_BASE_URL";
pub const DEFAULT_CONFIG_PATH: &str = "config/overlay.toml";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    pub api_base_url: String,
}

#[derive(Deserialize)]
struct ConfigFile {
    api: ApiSection,
}

#[derive(Deserialize)]
struct ApiSection {
    base_url: String,
}

impl OverlayConfig {
    pub fn from_toml_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading overlay config from {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("parsing overlay config {}", path.display()))?;
        Ok(Self {
            api_base_url: file.api.base_url,
        })
    }

    /// Env var first, then the default TOML path, then the built-in default.
    /// A present-but-broken config file is an error; absence is not.
    pub fn resolve() -> Result<Self> {
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.trim().is_empty() {
                return Ok(Self { api_base_url: url });
            }
        }
        let path = PathBuf::from(DEFAULT_CONFIG_PATH);
        if path.exists() {
            return Self::from_toml_path(&path);
        }
        Ok(Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
        })
    }
}
