//! Configuration system for glframe
//!
//! Reads config from ~/.config/glframe/config.toml; the `GLFRAME_EMBED_URL`
//! environment variable overrides the configured embed URL.

use std::path::{Path, PathBuf};

use glframe_embed::EmbedConfig;
use serde::Deserialize;

/// Environment variable overriding `[embed] url`.
pub const EMBED_URL_ENV: &str = "GLFRAME_EMBED_URL";

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub http_port: u16,
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8080,
            bind: "127.0.0.1".to_string(),
        }
    }
}

/// Full application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub embed: EmbedConfig,
}

impl Config {
    /// Load configuration from the default path and apply the environment
    /// override.
    pub fn load() -> Self {
        Self::load_from_path(&Self::default_config_path())
            .apply_env_override(std::env::var(EMBED_URL_ENV).ok())
    }

    /// Get default config path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("glframe")
            .join("config.toml")
    }

    /// Load from a specific path. An unreadable or invalid file warns and
    /// falls back to defaults; a missing file is silently the defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("  [warn] Failed to parse {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("  [warn] Failed to read {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// `GLFRAME_EMBED_URL` beats the config file when set and non-empty.
    pub fn apply_env_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            self.embed.url = Some(url);
        }
        self
    }

    /// Create default config file if it doesn't exist
    pub fn create_default_if_missing() {
        let path = Self::default_config_path();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let default_config = r#"# glframe Configuration

[server]
http_port = 8080
bind = "127.0.0.1"

[embed]
# Address of the WebGL build to embed, absolute or relative to the page.
# The GLFRAME_EMBED_URL environment variable takes priority over this value.
# url = "https://builds.example.com/game/index.html"
"#;
            let _ = std::fs::write(&path, default_config);
        }
    }
}
